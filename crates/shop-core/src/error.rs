//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── ShopError        - Catalog / aggregate rule violations            │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  shop-cli errors (app)                                                 │
//! │  └── CommandError     - What the command line prints                   │
//! │                                                                         │
//! │  Flow: ValidationError → ShopError → CommandError → stdout             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (kind, id, computer)
//! 3. Errors are enum variants, never String
//! 4. Every failure is synchronous and leaves the catalog untouched

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Entity
// =============================================================================

/// Which flat registry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Computer,
    Component,
    Peripheral,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Entity::Computer => "Computer",
            Entity::Component => "Component",
            Entity::Peripheral => "Peripheral",
        })
    }
}

// =============================================================================
// Shop Error
// =============================================================================

/// Catalog and aggregate rule violations.
///
/// None of these are retried or suppressed inside the core; they surface to
/// the caller as the immediate result of the operation.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Id already taken in the relevant registry.
    #[error("{entity} with this id already exists.")]
    DuplicateId { entity: Entity, id: u32 },

    /// Referenced computer id is not registered.
    #[error("Computer with this id does not exist.")]
    UnknownComputer(u32),

    /// Type tag is not one of the recognized kinds.
    #[error("{entity} type is invalid.")]
    InvalidType { entity: Entity, tag: String },

    /// A second item of an already attached kind.
    ///
    /// ## User Workflow
    /// ```text
    /// AddComponent 1 11 CentralProcessingUnit ...   (computer 1 has a CPU)
    ///      │
    ///      ▼
    /// DuplicateType { entity: Component, kind: "CentralProcessingUnit", .. }
    ///      │
    ///      ▼
    /// "Component CentralProcessingUnit already exists in Laptop with Id 1."
    /// ```
    #[error("{entity} {kind} already exists in {computer_kind} with Id {computer_id}.")]
    DuplicateType {
        entity: Entity,
        kind: String,
        computer_kind: String,
        computer_id: u32,
    },

    /// Detaching a kind the computer does not hold.
    #[error("{entity} {kind} does not exist in {computer_kind} with Id {computer_id}.")]
    NotFound {
        entity: Entity,
        kind: String,
        computer_kind: String,
        computer_id: u32,
    },

    /// No registered computer is priced within the budget.
    #[error("Can't buy a computer with a budget of ${budget}.")]
    BudgetExceeded { budget: Money },

    /// An attached item has no entry in its flat registry.
    ///
    /// Checked before anything is detached, so the catalog is unchanged.
    #[error("{entity} with id {id} is attached but not registered")]
    RegistryOutOfSync { entity: Entity, id: u32 },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the catalog before an item is constructed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} can not be empty.")]
    Required { field: String },

    /// Value must be greater than zero.
    #[error("{field} can not be less or equal than 0.")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}.")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
