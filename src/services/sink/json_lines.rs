//! Streaming JSON Lines sink that writes events incrementally.

use super::{EventSink, SinkReport};
use crate::models::TrackedEvent;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Sink implementation that streams events onto a writer, one JSON document
/// per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    recorded: u64,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Create a file-backed sink targeting the provided path, creating
    /// parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path_ref = path.as_ref();

        if let Some(parent) = path_ref.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path_ref)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap an arbitrary writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            recorded: 0,
        }
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn send(&mut self, event: &TrackedEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.recorded = self.recorded.saturating_add(1);
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> io::Result<SinkReport> {
        self.writer.flush()?;
        Ok(SinkReport::new(Vec::new(), self.recorded))
    }
}
