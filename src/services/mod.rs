//! Core services for checkpoint tracking, scroll monitoring, replay, and reporting

pub mod tracker;
pub mod monitor;
pub mod sink;
pub mod replay;
pub mod report;
