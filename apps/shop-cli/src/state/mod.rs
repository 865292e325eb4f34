//! # State Module
//!
//! Session state for the shop CLI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┬──────────────────────┐               │
//! │          ▼                                             ▼                │
//! │  ┌──────────────────┐                        ┌──────────────────┐      │
//! │  │  CatalogState    │                        │   ConfigState    │      │
//! │  │                  │                        │                  │      │
//! │  │  Arc<Mutex<      │                        │  log_filter      │      │
//! │  │    Catalog       │                        │  close_command   │      │
//! │  │  >>              │                        │  output mode     │      │
//! │  └──────────────────┘                        └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::{CatalogState, CatalogTotals};
pub use config::{ConfigState, OutputMode, DEFAULT_CLOSE_COMMAND, DEFAULT_LOG_FILTER};
