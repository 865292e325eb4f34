//! # Peripheral Commands

use shop_core::{ComputerSummary, NewPeripheral, ProductId, ShopError};
use tracing::debug;

use crate::commands::Response;
use crate::error::CommandError;
use crate::state::CatalogState;

/// `AddPeripheral <computerId> <id> <kind> <manufacturer> <model> <price> <performance> <connection>`
pub fn add_peripheral(
    state: &CatalogState,
    computer_id: ProductId,
    new: NewPeripheral<'_>,
) -> Result<Response, CommandError> {
    debug!(computer_id = %computer_id, id = %new.id, kind = %new.kind, "add_peripheral command");

    let (entry, summary) = state.with_catalog_mut(|catalog| {
        let entry = catalog.add_peripheral(computer_id, new)?;
        let summary = catalog.get_computer_data(computer_id).map(ComputerSummary::from)?;
        Ok::<_, ShopError>((entry, summary))
    })?;

    Ok(Response::with_computer(
        format!(
            "Peripheral {} with id {} added successfully in computer with id {}.",
            entry.kind, entry.id, entry.computer_id
        ),
        summary,
    ))
}

/// `RemovePeripheral <kind> <computerId>`
pub fn remove_peripheral(
    state: &CatalogState,
    kind: &str,
    computer_id: ProductId,
) -> Result<Response, CommandError> {
    debug!(computer_id = %computer_id, kind = %kind, "remove_peripheral command");

    let (removed, summary) = state.with_catalog_mut(|catalog| {
        let removed = catalog.remove_peripheral(kind, computer_id)?;
        let summary = catalog.get_computer_data(computer_id).map(ComputerSummary::from)?;
        Ok::<_, ShopError>((removed, summary))
    })?;

    Ok(Response::with_computer(
        format!("Successfully removed {} with id {}.", removed.kind(), removed.id()),
        summary,
    ))
}
