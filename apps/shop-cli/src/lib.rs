//! # Shop CLI
//!
//! Line-oriented front end for the computer shop catalog.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop CLI Session                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   stdin / --input file                                                  │
//! │        │  one command per line                                          │
//! │        ▼                                                                │
//! │   ┌─────────────────────────────────────────────────────────────────┐   │
//! │   │  run_session()                                                  │   │
//! │   │    commands::parse_line() ──► commands::execute()               │   │
//! │   └─────────────────────────────────────────────────────────────────┘   │
//! │        │                              │                                 │
//! │        │                              ▼                                 │
//! │        │                 ┌──────────────────────────┐                   │
//! │        │                 │  CatalogState            │                   │
//! │        │                 │  Arc<Mutex<Catalog>>     │                   │
//! │        │                 └──────────────────────────┘                   │
//! │        ▼                                                                │
//! │   stdout: text message, or one JSON object per line                     │
//! │   stderr: tracing output                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - `cli`: command-line flags (clap)
//! - `commands`: command parsing and handlers
//! - `error`: [`CommandError`] and its codes
//! - `state`: session catalog and configuration

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use error::{CommandError, ErrorCode};
pub use state::{CatalogState, ConfigState, OutputMode};

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set, otherwise `fallback` is used
/// (normally [`ConfigState::log_filter`]).
pub fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// JSON line written for every command in [`OutputMode::Json`].
#[derive(Serialize)]
struct Reply<'a, T: Serialize> {
    ok: bool,
    #[serde(flatten)]
    body: &'a T,
}

fn write_reply<W: Write, T: Serialize>(output: &mut W, ok: bool, body: &T) -> io::Result<()> {
    let line = serde_json::to_string(&Reply { ok, body }).map_err(io::Error::other)?;
    writeln!(output, "{}", line)
}

/// Processes commands from `input` until the close command or end of input.
///
/// Every command produces exactly one response on `output`; failures are
/// reported there too and the session keeps going. Only I/O errors abort.
pub fn run_session<R, W>(
    state: &CatalogState,
    config: &ConfigState,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == config.close_command {
            debug!("Close command received");
            break;
        }

        let result = match commands::parse_line(line) {
            Ok(Some(command)) => commands::execute(state, command),
            Ok(None) => continue,
            Err(e) => Err(e),
        };

        match (&result, config.output) {
            (Ok(response), OutputMode::Text) => writeln!(output, "{}", response.message)?,
            (Ok(response), OutputMode::Json) => write_reply(output, true, response)?,
            (Err(e), OutputMode::Text) => writeln!(output, "{}", e.message)?,
            (Err(e), OutputMode::Json) => write_reply(output, false, e)?,
        }

        if let Err(e) = &result {
            debug!(code = ?e.code, line = %line, "Command failed");
        }
    }

    let totals = state.totals();
    debug!(
        computers = totals.computer_count,
        components = totals.component_count,
        peripherals = totals.peripheral_count,
        "Session finished"
    );

    output.flush()
}

/// Runs one session over stdin, or over `input` when a path is given.
pub fn run(config: &ConfigState, input: Option<&Path>) -> io::Result<()> {
    let state = CatalogState::new();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    info!(output = ?config.output, close = %config.close_command, "Starting shop session");

    match input {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            run_session(&state, config, reader, &mut output)
        }
        None => run_session(&state, config, io::stdin().lock(), &mut output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(config: &ConfigState, script: &str) -> Vec<String> {
        let state = CatalogState::new();
        let mut output = Vec::new();
        run_session(&state, config, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_text_session_prices_and_performance() {
        let script = "\
AddComputer DesktopComputer 1 Asus X 500
AddComponent 1 10 CentralProcessingUnit Intel i9 200 5 9

GetComputerData 1
Close
GetComputerData 1
";
        let lines = session(&ConfigState::default(), script);

        assert_eq!(
            lines,
            vec![
                "Computer with id 1 added successfully.",
                "Component CentralProcessingUnit with id 10 added successfully in computer with id 1.",
                "Overall Performance: 20.00. Price: 700.00 - DesktopComputer: Asus X (Id: 1)",
                " Components (1):",
                "  Overall Performance: 5.00. Price: 200.00 - CentralProcessingUnit: Intel i9 (Id: 10) Generation: 9",
                " Peripherals (0); Average Overall Performance (0.00):",
            ]
        );
    }

    #[test]
    fn test_failures_do_not_end_the_session() {
        let script = "\
RemoveComponent Motherboard 1
AddComputer Laptop 1 Dell XPS 300
RemoveComponent Motherboard 1
Fly away
BuyBest 100
BuyComputer 1
BuyComputer 1
";
        let lines = session(&ConfigState::default(), script);

        assert_eq!(
            lines,
            vec![
                "Computer with this id does not exist.",
                "Computer with id 1 added successfully.",
                "Component Motherboard does not exist in Laptop with Id 1.",
                "Unknown command: Fly",
                "Can't buy a computer with a budget of $100.00.",
                "Overall Performance: 10.00. Price: 300.00 - Laptop: Dell XPS (Id: 1)",
                " Components (0):",
                " Peripherals (0); Average Overall Performance (0.00):",
                "Computer with this id does not exist.",
            ]
        );
    }

    #[test]
    fn test_buy_best_prefers_performance_within_budget() {
        let script = "\
AddComputer DesktopComputer 1 Asus X 500
AddComputer Laptop 2 Dell XPS 300
AddComponent 2 20 VideoCard Nvidia RTX 100 30 4
BuyBest 600
";
        let lines = session(&ConfigState::default(), script);

        assert_eq!(
            lines[3],
            "Overall Performance: 40.00. Price: 400.00 - Laptop: Dell XPS (Id: 2)"
        );
    }

    #[test]
    fn test_json_session() {
        let config = ConfigState {
            output: OutputMode::Json,
            ..ConfigState::default()
        };
        let script = "AddComputer Laptop 7 Dell XPS 300.50\nAddComputer Tablet 8 A B 1\n";
        let lines = session(&config, script);

        let ok: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(ok["ok"], true);
        assert_eq!(ok["message"], "Computer with id 7 added successfully.");
        assert_eq!(ok["computer"]["priceCents"], 30_050);
        assert_eq!(ok["computer"]["kind"], "Laptop");

        let err: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(err["ok"], false);
        assert_eq!(err["code"], "INVALID_TYPE");
        assert_eq!(err["message"], "Computer type is invalid.");
    }

    #[test]
    fn test_custom_close_command() {
        let config = ConfigState {
            close_command: "Exit".to_string(),
            ..ConfigState::default()
        };
        let state = CatalogState::new();
        let mut output = Vec::new();
        let script = "AddComputer Laptop 1 Dell XPS 1\nClose\nExit\nAddComputer Laptop 2 Dell XPS 1\n";
        run_session(&state, &config, Cursor::new(script), &mut output).unwrap();

        let lines: Vec<_> = String::from_utf8(output).unwrap().lines().map(str::to_string).collect();
        assert_eq!(lines[1], "Unknown command: Close");
        assert_eq!(lines.len(), 2);
        assert_eq!(state.totals().computer_count, 1);
    }
}
