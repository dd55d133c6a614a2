//! Command-line converter between xAPI statements and Caliper events.
//!
//! # Responsibility
//! - Read one JSON record from a file or stdin, convert it, print pretty JSON.
//! - Bootstrap core file logging from `LRS_LOG_DIR` / `LRS_LOG_LEVEL`.
//!
//! # Invariants
//! - Exit code 2 for usage errors, 1 for I/O or conversion failures.
//! - Converted records go to stdout; diagnostics go to stderr.

use log::warn;
use lrs_core::{ConversionService, Event, Statement};
use std::io::Read;
use std::process::ExitCode;

const USAGE: &str = "usage: lrs_cli <to-caliper|to-xapi> [FILE]\n       lrs_cli version";

enum CliError {
    Usage(String),
    Failed(String),
}

enum Command {
    ToCaliper(Option<String>),
    ToXapi(Option<String>),
    Version,
}

fn main() -> ExitCode {
    if let Err(err) = lrs_core::init_logging_from_env() {
        eprintln!("lrs_cli: logging disabled: {err}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("lrs_cli: {message}\n{USAGE}");
            ExitCode::from(2)
        }
        Err(CliError::Failed(message)) => {
            warn!("event=cli_run module=cli status=error");
            eprintln!("lrs_cli: {message}");
            ExitCode::from(1)
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| CliError::Usage("missing command".to_string()))?;
    if rest.len() > 1 {
        return Err(CliError::Usage("too many arguments".to_string()));
    }
    let input = rest.first().cloned();

    match (command.as_str(), input) {
        ("to-caliper", input) => Ok(Command::ToCaliper(input)),
        ("to-xapi", input) => Ok(Command::ToXapi(input)),
        ("version", None) => Ok(Command::Version),
        ("version", Some(_)) => Err(CliError::Usage("version takes no arguments".to_string())),
        (other, _) => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let converter = ConversionService::standard();
    let output = match command {
        Command::Version => {
            println!("lrs_core version={}", lrs_core::core_version());
            return Ok(());
        }
        Command::ToCaliper(input) => {
            let statement: Statement = read_json(input.as_deref())?;
            let event = converter
                .from_xapi(&statement)
                .map_err(|err| CliError::Failed(err.to_string()))?;
            serde_json::to_string_pretty(&event)
        }
        Command::ToXapi(input) => {
            let event: Event = read_json(input.as_deref())?;
            let statement = converter
                .to_xapi(&event)
                .map_err(|err| CliError::Failed(err.to_string()))?;
            serde_json::to_string_pretty(&statement)
        }
    };

    let output = output.map_err(|err| CliError::Failed(format!("failed to encode output: {err}")))?;
    println!("{output}");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: Option<&str>) -> Result<T, CliError> {
    let raw = match path {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| CliError::Failed(format!("failed to read stdin: {err}")))?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| CliError::Failed(format!("failed to read `{path}`: {err}")))?,
    };

    serde_json::from_str(&raw).map_err(|err| CliError::Failed(format!("invalid JSON input: {err}")))
}
