//! # Commands Module
//!
//! Parses command lines and dispatches them to the catalog.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (parsing, dispatch, Response)
//! ├── computer.rs    ◄─── AddComputer, BuyComputer, BuyBest, GetComputerData
//! ├── component.rs   ◄─── AddComponent, RemoveComponent
//! └── peripheral.rs  ◄─── AddPeripheral, RemovePeripheral
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "AddComputer Laptop 1 Dell XPS 999.90"                                 │
//! │         │                                                               │
//! │         │ parse_line()                                                  │
//! │         ▼                                                               │
//! │  Command::AddComputer { kind: "Laptop", id: 1, .., price: 999.90 }      │
//! │         │                                                               │
//! │         │ execute(&CatalogState, command)                               │
//! │         ▼                                                               │
//! │  computer::add_computer() ──► Catalog::add_computer()                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Response { message: "Computer with id 1 added successfully." }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Type tags stay text until they reach the catalog so that its error
//! precedence (unknown computer, then duplicate id, then bad type) holds.

pub mod component;
pub mod computer;
pub mod peripheral;

use serde::Serialize;
use shop_core::{ComputerSummary, Money, ProductId};

use crate::error::CommandError;
use crate::state::CatalogState;

// =============================================================================
// Command
// =============================================================================

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddComputer {
        kind: String,
        id: ProductId,
        manufacturer: String,
        model: String,
        price: Money,
    },
    AddPeripheral {
        computer_id: ProductId,
        id: ProductId,
        kind: String,
        manufacturer: String,
        model: String,
        price: Money,
        overall_performance: f64,
        connection_type: String,
    },
    RemovePeripheral {
        kind: String,
        computer_id: ProductId,
    },
    AddComponent {
        computer_id: ProductId,
        id: ProductId,
        kind: String,
        manufacturer: String,
        model: String,
        price: Money,
        overall_performance: f64,
        generation: u32,
    },
    RemoveComponent {
        kind: String,
        computer_id: ProductId,
    },
    BuyComputer {
        id: ProductId,
    },
    BuyBest {
        budget: Money,
    },
    GetComputerData {
        id: ProductId,
    },
}

/// Successful command output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Confirmation or full computer description
    pub message: String,

    /// Structured view of the computer the command touched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer: Option<ComputerSummary>,
}

impl Response {
    pub fn message(message: impl Into<String>) -> Self {
        Response {
            message: message.into(),
            computer: None,
        }
    }

    pub fn with_computer(message: impl Into<String>, computer: ComputerSummary) -> Self {
        Response {
            message: message.into(),
            computer: Some(computer),
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Positional argument reader with named errors.
struct Args<'a> {
    command: &'a str,
    words: std::slice::Iter<'a, &'a str>,
}

impl<'a> Args<'a> {
    fn new(command: &'a str, words: &'a [&'a str], expected: usize) -> Result<Self, CommandError> {
        if words.len() != expected {
            return Err(CommandError::bad_arguments(format!(
                "{} expects {} arguments, got {}",
                command,
                expected,
                words.len()
            )));
        }

        Ok(Args {
            command,
            words: words.iter(),
        })
    }

    fn word(&mut self, name: &str) -> Result<&'a str, CommandError> {
        self.words.next().copied().ok_or_else(|| {
            CommandError::bad_arguments(format!("{}: missing {}", self.command, name))
        })
    }

    fn text(&mut self, name: &str) -> Result<String, CommandError> {
        self.word(name).map(str::to_string)
    }

    fn id(&mut self, name: &str) -> Result<ProductId, CommandError> {
        let word = self.word(name)?;
        word.parse().map_err(|_| self.invalid(name, word))
    }

    fn generation(&mut self) -> Result<u32, CommandError> {
        let word = self.word("generation")?;
        word.parse().map_err(|_| self.invalid("generation", word))
    }

    fn number(&mut self, name: &str) -> Result<f64, CommandError> {
        let word = self.word(name)?;
        word.parse().map_err(|_| self.invalid(name, word))
    }

    fn money(&mut self, name: &str) -> Result<Money, CommandError> {
        let word = self.word(name)?;
        word.parse().map_err(|_| self.invalid(name, word))
    }

    fn invalid(&self, name: &str, word: &str) -> CommandError {
        CommandError::bad_arguments(format!("{}: invalid {} '{}'", self.command, name, word))
    }
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((name, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match *name {
        "AddComputer" => {
            let mut args = Args::new(name, rest, 5)?;
            Command::AddComputer {
                kind: args.text("computer type")?,
                id: args.id("id")?,
                manufacturer: args.text("manufacturer")?,
                model: args.text("model")?,
                price: args.money("price")?,
            }
        }
        "AddPeripheral" => {
            let mut args = Args::new(name, rest, 8)?;
            Command::AddPeripheral {
                computer_id: args.id("computer id")?,
                id: args.id("id")?,
                kind: args.text("peripheral type")?,
                manufacturer: args.text("manufacturer")?,
                model: args.text("model")?,
                price: args.money("price")?,
                overall_performance: args.number("overall performance")?,
                connection_type: args.text("connection type")?,
            }
        }
        "RemovePeripheral" => {
            let mut args = Args::new(name, rest, 2)?;
            Command::RemovePeripheral {
                kind: args.text("peripheral type")?,
                computer_id: args.id("computer id")?,
            }
        }
        "AddComponent" => {
            let mut args = Args::new(name, rest, 8)?;
            Command::AddComponent {
                computer_id: args.id("computer id")?,
                id: args.id("id")?,
                kind: args.text("component type")?,
                manufacturer: args.text("manufacturer")?,
                model: args.text("model")?,
                price: args.money("price")?,
                overall_performance: args.number("overall performance")?,
                generation: args.generation()?,
            }
        }
        "RemoveComponent" => {
            let mut args = Args::new(name, rest, 2)?;
            Command::RemoveComponent {
                kind: args.text("component type")?,
                computer_id: args.id("computer id")?,
            }
        }
        "BuyComputer" => {
            let mut args = Args::new(name, rest, 1)?;
            Command::BuyComputer { id: args.id("id")? }
        }
        "BuyBest" => {
            let mut args = Args::new(name, rest, 1)?;
            Command::BuyBest {
                budget: args.money("budget")?,
            }
        }
        "GetComputerData" => {
            let mut args = Args::new(name, rest, 1)?;
            Command::GetComputerData { id: args.id("id")? }
        }
        other => return Err(CommandError::unknown_command(other)),
    };

    Ok(Some(command))
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs a parsed command against the catalog.
pub fn execute(state: &CatalogState, command: Command) -> Result<Response, CommandError> {
    match command {
        Command::AddComputer {
            kind,
            id,
            manufacturer,
            model,
            price,
        } => computer::add_computer(state, &kind, id, &manufacturer, &model, price),
        Command::AddPeripheral {
            computer_id,
            id,
            kind,
            manufacturer,
            model,
            price,
            overall_performance,
            connection_type,
        } => peripheral::add_peripheral(
            state,
            computer_id,
            shop_core::NewPeripheral {
                id,
                kind: &kind,
                manufacturer: &manufacturer,
                model: &model,
                price,
                overall_performance,
                connection_type: &connection_type,
            },
        ),
        Command::RemovePeripheral { kind, computer_id } => {
            peripheral::remove_peripheral(state, &kind, computer_id)
        }
        Command::AddComponent {
            computer_id,
            id,
            kind,
            manufacturer,
            model,
            price,
            overall_performance,
            generation,
        } => component::add_component(
            state,
            computer_id,
            shop_core::NewComponent {
                id,
                kind: &kind,
                manufacturer: &manufacturer,
                model: &model,
                price,
                overall_performance,
                generation,
            },
        ),
        Command::RemoveComponent { kind, computer_id } => {
            component::remove_component(state, &kind, computer_id)
        }
        Command::BuyComputer { id } => computer::buy_computer(state, id),
        Command::BuyBest { budget } => computer::buy_best_computer(state, budget),
        Command::GetComputerData { id } => computer::get_computer_data(state, id),
    }
}
