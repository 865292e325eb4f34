//! # Component Commands
//!
//! Attaching parts to a computer and taking them off again.

use shop_core::{ComputerSummary, NewComponent, ProductId};
use tracing::debug;

use crate::commands::Response;
use crate::error::CommandError;
use crate::state::CatalogState;

/// `AddComponent <computerId> <id> <kind> <manufacturer> <model> <price> <performance> <generation>`
pub fn add_component(
    state: &CatalogState,
    computer_id: ProductId,
    new: NewComponent<'_>,
) -> Result<Response, CommandError> {
    debug!(computer_id = %computer_id, id = %new.id, kind = %new.kind, "add_component command");

    let (entry, summary) = state.with_catalog_mut(|catalog| {
        let entry = catalog.add_component(computer_id, new)?;
        let summary = catalog.get_computer_data(computer_id).map(ComputerSummary::from)?;
        Ok::<_, shop_core::ShopError>((entry, summary))
    })?;

    Ok(Response::with_computer(
        format!(
            "Component {} with id {} added successfully in computer with id {}.",
            entry.kind, entry.id, entry.computer_id
        ),
        summary,
    ))
}

/// `RemoveComponent <kind> <computerId>`
pub fn remove_component(
    state: &CatalogState,
    kind: &str,
    computer_id: ProductId,
) -> Result<Response, CommandError> {
    debug!(computer_id = %computer_id, kind = %kind, "remove_component command");

    let (removed, summary) = state.with_catalog_mut(|catalog| {
        let removed = catalog.remove_component(kind, computer_id)?;
        let summary = catalog.get_computer_data(computer_id).map(ComputerSummary::from)?;
        Ok::<_, shop_core::ShopError>((removed, summary))
    })?;

    Ok(Response::with_computer(
        format!("Successfully removed {} with id {}.", removed.kind(), removed.id()),
        summary,
    ))
}
