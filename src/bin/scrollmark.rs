//! Scroll analytics CLI (scrollmark) - Main binary entry point

use scrollmark::cli::args::{Command, ReplayArgs, ReportArgs, parse_args};
use scrollmark::cli::output::{
    format_replay_json, format_report_json, print_replay_text, print_report_text,
};
use scrollmark::services::report::summarize_events;
use scrollmark::services::sink::{EventSink, JsonLinesSink, MemorySink};
use scrollmark::{ReplayOptions, TrackerConfig, replay_trace};
use std::process;
use std::time::Duration;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug scrollmark replay session.jsonl
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    // Parse arguments
    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    // Execute command
    let exit_code = match &cli_args.command {
        Command::Replay(replay_args) => handle_replay(replay_args),
        Command::Report(report_args) => handle_report(report_args),
    };

    process::exit(exit_code);
}

fn handle_replay(args: &ReplayArgs) -> i32 {
    let config = TrackerConfig {
        track_percent_scrolled: !args.no_percent,
        track_pixels_scrolled: args.pixels,
        track_timing: args.timing,
    };

    let mut options = ReplayOptions {
        tracker: config,
        ..ReplayOptions::default()
    };
    if let Some(ms) = args.interval_ms {
        options.throttle_interval = Duration::from_millis(ms);
    }

    // Read trace
    let samples = match scrollmark::io::trace::read_trace(&args.trace) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading trace: {e}");
            return match e {
                scrollmark::Error::Parse { .. } => 2,
                _ => 4,
            };
        }
    };

    if !args.quiet {
        eprintln!("Replaying: {} ({} samples)", args.trace, samples.len());
    }

    // Events stream to a file when requested, otherwise stay in memory for
    // the summary.
    let sink: Box<dyn EventSink> = match args.events_out.as_deref() {
        Some(path) => match JsonLinesSink::create(path) {
            Ok(s) => Box::new(s),
            Err(e) => {
                eprintln!("Error: Failed to create event log {path}: {e}");
                return 4;
            }
        },
        None => Box::new(MemorySink::new()),
    };

    let summary = match replay_trace(&samples, &options, sink) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                scrollmark::Error::InvalidInput(_) | scrollmark::Error::InvalidSample(_) => 2,
                _ => 4,
            };
        }
    };

    if let Some(path) = args.events_out.as_deref()
        && !args.quiet
    {
        eprintln!(
            "Event log saved: {path} ({} events)",
            summary.events_recorded
        );
    }

    if args.json {
        println!("{}", format_replay_json(&summary));
    } else if !args.quiet {
        print_replay_text(&summary);
    }

    0
}

fn handle_report(args: &ReportArgs) -> i32 {
    let events = match scrollmark::io::event_log::read_event_log(&args.events_file) {
        Ok(evts) => evts,
        Err(e) => {
            eprintln!("Error reading event log: {e}");
            return match e {
                scrollmark::Error::Parse { .. } => 2,
                _ => 4,
            };
        }
    };

    let report = summarize_events(&events);

    if args.json {
        println!("{}", format_report_json(&report));
    } else {
        print_report_text(&report);
    }

    0
}

fn print_help() {
    println!("Scroll Analytics CLI (scrollmark) - Replay scroll traces and inspect checkpoint events");
    println!();
    println!("USAGE:");
    println!("    scrollmark replay <TRACE> [OPTIONS]");
    println!("    scrollmark report <EVENTS_FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    replay    Drive a recorded scroll trace through the tracker and summarize it");
    println!("    report    Read a tracked-event log and display aggregates");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("REPLAY OPTIONS:");
    println!("    --pixels                  Also report raw pixel depth in 250 px bands");
    println!("    --no-percent              Disable percent checkpoint events");
    println!("    --timing                  Attach measured elapsed seconds to events");
    println!("    --interval-ms <N>         Sample admission interval in milliseconds (default: 500)");
    println!("    --events <FILE>           Stream events to a JSON Lines log");
    println!("    --json                    Emit machine-readable output");
    println!("    --quiet                   Suppress non-error output");
    println!();
    println!("REPORT OPTIONS:");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("WORKFLOW:");
    println!("    1. Record a scroll trace (one JSON sample per line)");
    println!("    2. Replay it:         scrollmark replay session.jsonl --events events.jsonl");
    println!("    3. Inspect events:    scrollmark report events.jsonl");
    println!();
    println!("EXAMPLES:");
    println!("    scrollmark replay session.jsonl --pixels --timing");
    println!("    scrollmark replay session.jsonl --interval-ms 250 --json");
    println!("    scrollmark report events.jsonl --json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("scrollmark {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
