//! # Catalog State
//!
//! Holds the shop catalog for the running session.
//!
//! ## Thread Safety
//! The catalog is wrapped in `Arc<Mutex<T>>` because:
//! 1. The catalog is a single-writer structure
//! 2. Every command either reads or mutates it, one at a time
//! 3. A host embedding the CLI library may dispatch from several threads
//!
//! ## Catalog Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Operations                             │
//! │                                                                         │
//! │  Command                 Access                 Catalog Change          │
//! │  ───────                 ──────                 ──────────────          │
//! │                                                                         │
//! │  AddComputer ──────────► with_catalog_mut() ──► computers.push(..)      │
//! │  AddComponent ─────────► with_catalog_mut() ──► attach + register       │
//! │  RemovePeripheral ─────► with_catalog_mut() ──► detach + unregister     │
//! │  BuyComputer ──────────► with_catalog_mut() ──► computers.remove(..)    │
//! │                                                                         │
//! │  BuyBest ──────────────► with_catalog() ──────► (read only)             │
//! │  GetComputerData ──────► with_catalog() ──────► (read only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;
use shop_core::Catalog;

/// Catalog size summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTotals {
    pub computer_count: usize,
    pub component_count: usize,
    pub peripheral_count: usize,
}

impl From<&Catalog> for CatalogTotals {
    fn from(catalog: &Catalog) -> Self {
        CatalogTotals {
            computer_count: catalog.computers().len(),
            component_count: catalog.component_entries().len(),
            peripheral_count: catalog.peripheral_entries().len(),
        }
    }
}

/// Session-wide catalog state.
///
/// ## Why Not RwLock?
/// Most commands mutate, and each one is quick. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    pub fn new() -> Self {
        CatalogState::default()
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust
    /// use shop_cli_lib::state::{CatalogState, CatalogTotals};
    ///
    /// let state = CatalogState::new();
    /// let totals = state.with_catalog(|catalog| CatalogTotals::from(catalog));
    /// assert_eq!(totals.computer_count, 0);
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }

    /// Current catalog size, logged when a session ends.
    pub fn totals(&self) -> CatalogTotals {
        self.with_catalog(|catalog| CatalogTotals::from(catalog))
    }
}
