//! # shop-core: Pure Catalog Logic for the Online Shop
//!
//! This crate is the **heart** of the online shop. It models computers, the
//! parts and accessories attached to them, and the catalog that sells them.
//! Zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Online Shop Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-cli (apps/shop-cli)                     │   │
//! │  │    AddComputer, AddComponent, BuyBest, GetComputerData, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed calls                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ component │  │ computer  │  │  catalog  │  │   │
//! │  │   │  Product  │  │ peripheral│  │ aggregate │  │ registries│  │   │
//! │  │   │   Kind    │  │   kinds   │  │ price/perf│  │ buy / best│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE WRITER                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Shared product fields and the [`Kind`] trait for type tags
//! - [`component`] - The six component kinds
//! - [`peripheral`] - The four peripheral kinds
//! - [`computer`] - The computer aggregate (attach, detach, derived values)
//! - [`catalog`] - The controller over all registries
//! - [`money`] - Integer-cent money
//! - [`validation`] - Field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Catalog, Money};
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .add_computer_rated("DesktopComputer", 1, "Asus", "X", Money::from_cents(50_000), 10.0)
//!     .unwrap();
//! catalog
//!     .add_computer_rated("Laptop", 2, "Dell", "Y", Money::from_cents(30_000), 20.0)
//!     .unwrap();
//!
//! let best = catalog.buy_best_computer(Money::from_cents(60_000)).unwrap();
//! assert_eq!(best.id(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod component;
pub mod computer;
pub mod error;
pub mod money;
pub mod peripheral;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, NewComponent, NewPeripheral, RegistryEntry};
pub use component::{Component, ComponentKind};
pub use computer::{Computer, ComputerKind, ComputerSummary};
pub use error::{Entity, ShopError, ShopResult, ValidationError};
pub use money::Money;
pub use peripheral::{Peripheral, PeripheralKind};
pub use product::{parse_kind, Kind, Product, ProductId};
