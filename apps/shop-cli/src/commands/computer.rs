//! # Computer Commands
//!
//! Registering, querying and purchasing computers.
//!
//! ## Purchase Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Added   │────►│ Equipped │────►│  Quoted  │────►│  Bought  │       │
//! │  │          │     │          │     │          │     │ (gone)   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │   AddComputer     AddComponent     BuyBest          BuyComputer        │
//! │                   AddPeripheral    GetComputerData                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shop_core::{ComputerSummary, Money, ProductId};
use tracing::{debug, info};

use crate::commands::Response;
use crate::error::CommandError;
use crate::state::CatalogState;

/// `AddComputer <kind> <id> <manufacturer> <model> <price>`
pub fn add_computer(
    state: &CatalogState,
    kind: &str,
    id: ProductId,
    manufacturer: &str,
    model: &str,
    price: Money,
) -> Result<Response, CommandError> {
    debug!(kind = %kind, id = %id, "add_computer command");

    let summary = state.with_catalog_mut(|catalog| {
        catalog
            .add_computer(kind, id, manufacturer, model, price)
            .map(ComputerSummary::from)
    })?;

    Ok(Response::with_computer(
        format!("Computer with id {} added successfully.", id),
        summary,
    ))
}

/// `BuyComputer <id>`: removes the computer and prints what was bought.
pub fn buy_computer(state: &CatalogState, id: ProductId) -> Result<Response, CommandError> {
    debug!(id = %id, "buy_computer command");

    let computer = state.with_catalog_mut(|catalog| catalog.buy_computer(id))?;
    info!(id = %id, price = %computer.price(), "Sold computer");

    Ok(Response::with_computer(
        computer.describe(),
        ComputerSummary::from(&computer),
    ))
}

/// `BuyBest <budget>`: describes the best computer within budget.
pub fn buy_best_computer(state: &CatalogState, budget: Money) -> Result<Response, CommandError> {
    debug!(budget = %budget, "buy_best_computer command");

    let (description, summary) = state.with_catalog(|catalog| {
        catalog
            .buy_best_computer(budget)
            .map(|computer| (computer.describe(), ComputerSummary::from(computer)))
    })?;

    Ok(Response::with_computer(description, summary))
}

/// `GetComputerData <id>`
pub fn get_computer_data(state: &CatalogState, id: ProductId) -> Result<Response, CommandError> {
    debug!(id = %id, "get_computer_data command");

    let (description, summary) = state.with_catalog(|catalog| {
        catalog
            .get_computer_data(id)
            .map(|computer| (computer.describe(), ComputerSummary::from(computer)))
    })?;

    Ok(Response::with_computer(description, summary))
}
