//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Replay(ReplayArgs),
    Report(ReportArgs),
}

#[derive(Debug, Clone, Default)]
pub struct ReplayArgs {
    pub trace: String,
    pub pixels: bool,
    pub no_percent: bool,
    pub timing: bool,
    pub interval_ms: Option<u64>,
    pub events_out: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub events_file: String,
    pub json: bool,
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "replay" => {
            let replay_args = parse_replay_args(&args[2..])?;
            Command::Replay(replay_args)
        }
        "report" => {
            let report_args = parse_report_args(&args[2..])?;
            Command::Report(report_args)
        }
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn parse_replay_args(args: &[String]) -> Result<ReplayArgs, String> {
    let mut replay_args = ReplayArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--pixels" => {
                replay_args.pixels = true;
            }
            "--no-percent" => {
                replay_args.no_percent = true;
            }
            "--timing" => {
                replay_args.timing = true;
            }
            "--interval-ms" => {
                i += 1;
                if i >= args.len() {
                    return Err("--interval-ms requires a value".to_string());
                }
                let ms: u64 = args[i]
                    .parse()
                    .map_err(|_| "--interval-ms must be a positive integer".to_string())?;
                if ms == 0 {
                    return Err("--interval-ms must be greater than zero".to_string());
                }
                replay_args.interval_ms = Some(ms);
            }
            "--events" => {
                i += 1;
                if i >= args.len() {
                    return Err("--events requires a file path".to_string());
                }
                replay_args.events_out = Some(args[i].clone());
            }
            "--json" => {
                replay_args.json = true;
            }
            "--quiet" => {
                replay_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if replay_args.trace.is_empty() {
                    replay_args.trace = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if replay_args.trace.is_empty() {
        return Err("Missing required argument: TRACE".to_string());
    }

    Ok(replay_args)
}

fn parse_report_args(args: &[String]) -> Result<ReportArgs, String> {
    let mut events_file = String::new();
    let mut json = false;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json = true;
            }
            arg if !arg.starts_with("--") => {
                if events_file.is_empty() {
                    events_file = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if events_file.is_empty() {
        return Err("Missing required argument: EVENTS_FILE".to_string());
    }

    Ok(ReportArgs { events_file, json })
}
