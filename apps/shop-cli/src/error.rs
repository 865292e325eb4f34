//! # Command Error Type
//!
//! Unified error type for shop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shop CLI                           │
//! │                                                                         │
//! │  "AddComponent 1 10 Toaster Intel i9 200 5 9"                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  parse_line()                                                    │  │
//! │  │  Malformed words? ─── CommandError { code: BAD_ARGUMENTS } ────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog call                                                    │  │
//! │  │  ShopError::InvalidType ─── CommandError { code: INVALID_TYPE } ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Text mode prints `message`; JSON mode prints both fields.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shop_core::ShopError;
use thiserror::Error;

/// Error returned from a command.
///
/// ## Serialization
/// In JSON mode a failed command prints:
/// ```json
/// { "ok": false, "code": "UNKNOWN_COMPUTER", "message": "Computer with this id does not exist." }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct CommandError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message, printed as-is in text mode
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Command name not recognized
    UnknownCommand,

    /// Wrong word count or unparseable number
    BadArguments,

    DuplicateId,
    UnknownComputer,
    InvalidType,
    DuplicateType,
    NotFound,
    BudgetExceeded,

    /// Field rule violated (empty model, zero id, ...)
    ValidationError,

    /// Catalog bookkeeping failure
    Internal,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    pub fn unknown_command(name: &str) -> Self {
        CommandError::new(ErrorCode::UnknownCommand, format!("Unknown command: {}", name))
    }

    pub fn bad_arguments(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::BadArguments, message)
    }
}

/// Converts core errors to command errors.
impl From<ShopError> for CommandError {
    fn from(err: ShopError) -> Self {
        let code = match &err {
            ShopError::DuplicateId { .. } => ErrorCode::DuplicateId,
            ShopError::UnknownComputer(_) => ErrorCode::UnknownComputer,
            ShopError::InvalidType { .. } => ErrorCode::InvalidType,
            ShopError::DuplicateType { .. } => ErrorCode::DuplicateType,
            ShopError::NotFound { .. } => ErrorCode::NotFound,
            ShopError::BudgetExceeded { .. } => ErrorCode::BudgetExceeded,
            ShopError::Validation(_) => ErrorCode::ValidationError,
            ShopError::RegistryOutOfSync { .. } => {
                tracing::error!(error = %err, "Catalog registry out of sync");
                ErrorCode::Internal
            }
        };

        CommandError::new(code, err.to_string())
    }
}
