//! # Catalog Controller
//!
//! Top-level registry of computers, components and peripherals.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog                                        │
//! │                                                                         │
//! │  computers: Vec<Computer>          (owns every record)                 │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │ Computer 1                   │  │ Computer 2                   │    │
//! │  │   components: [CPU#10, RAM#11]│  │   components: [CPU#12]       │    │
//! │  │   peripherals: [Mouse#20]    │  │   peripherals: []            │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  components:  [#10 CPU → 1] [#11 RAM → 1] [#12 CPU → 2]   (index only) │
//! │  peripherals: [#20 Mouse → 1]                              (index only) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The flat registries never hold a copy of an item, only where it lives.
//! Both views change together inside a single call, or not at all.
//!
//! ## Concurrency
//! Single writer. Callers that share a catalog across threads wrap it in a
//! lock (the CLI keeps it in `Arc<Mutex<Catalog>>`).

use serde::Serialize;
use tracing::{debug, info};

use crate::component::{Component, ComponentKind};
use crate::computer::{Computer, ComputerKind};
use crate::error::{Entity, ShopError, ShopResult};
use crate::money::Money;
use crate::peripheral::{Peripheral, PeripheralKind};
use crate::product::{parse_kind, Kind, Product, ProductId};
use crate::validation::validate_product_fields;

// =============================================================================
// Registry Entry
// =============================================================================

/// Where a registered component or peripheral lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry<K> {
    pub id: ProductId,
    pub kind: K,
    pub computer_id: ProductId,
}

// =============================================================================
// Requests
// =============================================================================

/// Arguments for [`Catalog::add_component`].
#[derive(Debug, Clone, Copy)]
pub struct NewComponent<'a> {
    pub id: ProductId,
    pub kind: &'a str,
    pub manufacturer: &'a str,
    pub model: &'a str,
    pub price: Money,
    pub overall_performance: f64,
    pub generation: u32,
}

/// Arguments for [`Catalog::add_peripheral`].
#[derive(Debug, Clone, Copy)]
pub struct NewPeripheral<'a> {
    pub id: ProductId,
    pub kind: &'a str,
    pub manufacturer: &'a str,
    pub model: &'a str,
    pub price: Money,
    pub overall_performance: f64,
    pub connection_type: &'a str,
}

// =============================================================================
// Catalog
// =============================================================================

/// The shop's in-memory catalog.
///
/// ## Example
/// ```rust
/// use shop_core::{Catalog, Money, NewComponent};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .add_computer_rated("DesktopComputer", 1, "Asus", "X", Money::from_cents(50_000), 10.0)
///     .unwrap();
/// catalog
///     .add_component(1, NewComponent {
///         id: 10,
///         kind: "CentralProcessingUnit",
///         manufacturer: "Intel",
///         model: "i9",
///         price: Money::from_cents(20_000),
///         overall_performance: 5.0,
///         generation: 9,
///     })
///     .unwrap();
///
/// let computer = catalog.get_computer_data(1).unwrap();
/// assert_eq!(computer.price(), Money::from_cents(70_000));
/// assert_eq!(computer.overall_performance(), 15.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    computers: Vec<Computer>,
    components: Vec<RegistryEntry<ComponentKind>>,
    peripherals: Vec<RegistryEntry<PeripheralKind>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    // -------------------------------------------------------------------------
    // Computers
    // -------------------------------------------------------------------------

    /// Registers a computer with its kind's default base performance.
    ///
    /// ## Errors
    /// - `DuplicateId` if `id` is already a registered computer
    /// - `InvalidType` if `kind_tag` is not `DesktopComputer` or `Laptop`
    /// - `Validation` for a bad field
    pub fn add_computer(
        &mut self,
        kind_tag: &str,
        id: ProductId,
        manufacturer: &str,
        model: &str,
        price: Money,
    ) -> ShopResult<&Computer> {
        self.insert_computer(kind_tag, id, manufacturer, model, price, None)
    }

    /// Registers a computer with an explicit base performance.
    pub fn add_computer_rated(
        &mut self,
        kind_tag: &str,
        id: ProductId,
        manufacturer: &str,
        model: &str,
        price: Money,
        overall_performance: f64,
    ) -> ShopResult<&Computer> {
        self.insert_computer(
            kind_tag,
            id,
            manufacturer,
            model,
            price,
            Some(overall_performance),
        )
    }

    fn insert_computer(
        &mut self,
        kind_tag: &str,
        id: ProductId,
        manufacturer: &str,
        model: &str,
        price: Money,
        overall_performance: Option<f64>,
    ) -> ShopResult<&Computer> {
        if self.computer(id).is_some() {
            return Err(ShopError::DuplicateId {
                entity: Entity::Computer,
                id,
            });
        }

        let kind: ComputerKind = parse_kind(kind_tag)?;
        let overall_performance = overall_performance.unwrap_or_else(|| kind.base_performance());
        validate_product_fields(id, manufacturer, model, price, overall_performance)?;

        debug!(id = %id, kind = %kind, price = %price, "Adding computer");
        self.computers.push(Computer::new(
            kind,
            Product::new(id, manufacturer, model, price, overall_performance),
        ));

        Ok(&self.computers[self.computers.len() - 1])
    }

    /// Removes a computer and everything attached to it.
    ///
    /// The attached components and peripherals leave their registries too,
    /// so their ids become free again.
    pub fn buy_computer(&mut self, id: ProductId) -> ShopResult<Computer> {
        let index = self.computer_index(id)?;

        let computer = self.computers.remove(index);
        self.components.retain(|entry| entry.computer_id != id);
        self.peripherals.retain(|entry| entry.computer_id != id);

        info!(
            id = %id,
            price = %computer.price(),
            components = computer.components().len(),
            peripherals = computer.peripherals().len(),
            "Computer purchased"
        );
        Ok(computer)
    }

    /// Best-performing computer priced within `budget`.
    ///
    /// Ties go to the computer registered first. Query only: the computer
    /// stays in the catalog.
    ///
    /// ## Errors
    /// `BudgetExceeded` if no computer costs `budget` or less.
    pub fn buy_best_computer(&self, budget: Money) -> ShopResult<&Computer> {
        let mut best: Option<&Computer> = None;

        for computer in self.computers.iter().filter(|c| c.price() <= budget) {
            match best {
                Some(current) if computer.overall_performance() <= current.overall_performance() => {}
                _ => best = Some(computer),
            }
        }

        debug!(budget = %budget, found = best.map(Computer::id), "Best computer lookup");
        best.ok_or(ShopError::BudgetExceeded { budget })
    }

    /// The registered computer `id`.
    ///
    /// ## Errors
    /// `UnknownComputer` if `id` is not registered.
    pub fn get_computer_data(&self, id: ProductId) -> ShopResult<&Computer> {
        self.computer(id).ok_or(ShopError::UnknownComputer(id))
    }

    pub fn computer(&self, id: ProductId) -> Option<&Computer> {
        self.computers.iter().find(|c| c.id() == id)
    }

    /// Registered computers in registration order.
    pub fn computers(&self) -> &[Computer] {
        &self.computers
    }

    fn computer_index(&self, id: ProductId) -> ShopResult<usize> {
        self.computers
            .iter()
            .position(|c| c.id() == id)
            .ok_or(ShopError::UnknownComputer(id))
    }

    // -------------------------------------------------------------------------
    // Components
    // -------------------------------------------------------------------------

    /// Builds a component and attaches it to computer `computer_id`.
    ///
    /// ## Errors (checked in this order)
    /// 1. `UnknownComputer`
    /// 2. `DuplicateId` (ids are unique across all computers)
    /// 3. `InvalidType`
    /// 4. `Validation`
    /// 5. `DuplicateType` (the computer already has this kind)
    ///
    /// The component is registered only after the attach succeeds.
    pub fn add_component(
        &mut self,
        computer_id: ProductId,
        new: NewComponent<'_>,
    ) -> ShopResult<RegistryEntry<ComponentKind>> {
        let index = self.computer_index(computer_id)?;

        if self.components.iter().any(|entry| entry.id == new.id) {
            return Err(ShopError::DuplicateId {
                entity: Entity::Component,
                id: new.id,
            });
        }

        let kind: ComponentKind = parse_kind(new.kind)?;
        validate_product_fields(
            new.id,
            new.manufacturer,
            new.model,
            new.price,
            new.overall_performance,
        )?;

        let component = Component::new(
            kind,
            Product::new(
                new.id,
                new.manufacturer,
                new.model,
                new.price,
                new.overall_performance,
            ),
            new.generation,
        );
        self.computers[index].add_component(component)?;

        let entry = RegistryEntry {
            id: new.id,
            kind,
            computer_id,
        };
        self.components.push(entry);

        debug!(id = %new.id, kind = %kind, computer_id = %computer_id, "Component attached");
        Ok(entry)
    }

    /// Detaches the component of `kind_tag` from computer `computer_id`.
    ///
    /// ## Errors
    /// - `UnknownComputer`
    /// - `InvalidType`
    /// - `NotFound` if the computer has no component of that kind
    /// - `RegistryOutOfSync` if the attached component is missing from the
    ///   registry (nothing is detached in that case)
    pub fn remove_component(&mut self, kind_tag: &str, computer_id: ProductId) -> ShopResult<Component> {
        let index = self.computer_index(computer_id)?;
        let kind: ComponentKind = parse_kind(kind_tag)?;

        let computer = &self.computers[index];
        let id = computer
            .component(kind)
            .map(Component::id)
            .ok_or_else(|| computer.not_found(Entity::Component, kind.tag()))?;

        let slot = self
            .components
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ShopError::RegistryOutOfSync {
                entity: Entity::Component,
                id,
            })?;

        let removed = self.computers[index].remove_component(kind)?;
        self.components.remove(slot);

        debug!(id = %id, kind = %kind, computer_id = %computer_id, "Component detached");
        Ok(removed)
    }

    /// Registered components in registration order.
    pub fn components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.components.iter().filter_map(move |entry| {
            self.computer(entry.computer_id)
                .and_then(|computer| computer.component(entry.kind))
        })
    }

    pub fn component(&self, id: ProductId) -> Option<&Component> {
        let entry = self.components.iter().find(|entry| entry.id == id)?;
        self.computer(entry.computer_id)?.component(entry.kind)
    }

    pub fn component_entries(&self) -> &[RegistryEntry<ComponentKind>] {
        &self.components
    }

    // -------------------------------------------------------------------------
    // Peripherals
    // -------------------------------------------------------------------------

    /// Builds a peripheral and attaches it to computer `computer_id`.
    ///
    /// Same error order as [`Catalog::add_component`].
    pub fn add_peripheral(
        &mut self,
        computer_id: ProductId,
        new: NewPeripheral<'_>,
    ) -> ShopResult<RegistryEntry<PeripheralKind>> {
        let index = self.computer_index(computer_id)?;

        if self.peripherals.iter().any(|entry| entry.id == new.id) {
            return Err(ShopError::DuplicateId {
                entity: Entity::Peripheral,
                id: new.id,
            });
        }

        let kind: PeripheralKind = parse_kind(new.kind)?;
        validate_product_fields(
            new.id,
            new.manufacturer,
            new.model,
            new.price,
            new.overall_performance,
        )?;

        let peripheral = Peripheral::new(
            kind,
            Product::new(
                new.id,
                new.manufacturer,
                new.model,
                new.price,
                new.overall_performance,
            ),
            new.connection_type,
        );
        self.computers[index].add_peripheral(peripheral)?;

        let entry = RegistryEntry {
            id: new.id,
            kind,
            computer_id,
        };
        self.peripherals.push(entry);

        debug!(id = %new.id, kind = %kind, computer_id = %computer_id, "Peripheral attached");
        Ok(entry)
    }

    /// Detaches the peripheral of `kind_tag` from computer `computer_id`.
    ///
    /// Same errors as [`Catalog::remove_component`].
    pub fn remove_peripheral(&mut self, kind_tag: &str, computer_id: ProductId) -> ShopResult<Peripheral> {
        let index = self.computer_index(computer_id)?;
        let kind: PeripheralKind = parse_kind(kind_tag)?;

        let computer = &self.computers[index];
        let id = computer
            .peripheral(kind)
            .map(Peripheral::id)
            .ok_or_else(|| computer.not_found(Entity::Peripheral, kind.tag()))?;

        let slot = self
            .peripherals
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ShopError::RegistryOutOfSync {
                entity: Entity::Peripheral,
                id,
            })?;

        let removed = self.computers[index].remove_peripheral(kind)?;
        self.peripherals.remove(slot);

        debug!(id = %id, kind = %kind, computer_id = %computer_id, "Peripheral detached");
        Ok(removed)
    }

    /// Registered peripherals in registration order.
    pub fn peripherals(&self) -> impl Iterator<Item = &Peripheral> + '_ {
        self.peripherals.iter().filter_map(move |entry| {
            self.computer(entry.computer_id)
                .and_then(|computer| computer.peripheral(entry.kind))
        })
    }

    pub fn peripheral(&self, id: ProductId) -> Option<&Peripheral> {
        let entry = self.peripherals.iter().find(|entry| entry.id == id)?;
        self.computer(entry.computer_id)?.peripheral(entry.kind)
    }

    pub fn peripheral_entries(&self) -> &[RegistryEntry<PeripheralKind>] {
        &self.peripherals
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::validation::MAX_PRICE;
    use proptest::prelude::*;

    fn money(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    fn cpu(id: ProductId) -> NewComponent<'static> {
        NewComponent {
            id,
            kind: "CentralProcessingUnit",
            manufacturer: "Intel",
            model: "i9",
            price: money(20_000),
            overall_performance: 5.0,
            generation: 9,
        }
    }

    fn mouse(id: ProductId) -> NewPeripheral<'static> {
        NewPeripheral {
            id,
            kind: "Mouse",
            manufacturer: "Logitech",
            model: "MX",
            price: money(5_000),
            overall_performance: 2.0,
            connection_type: "USB",
        }
    }

    fn catalog_with_desktop() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_computer_rated("DesktopComputer", 1, "Asus", "X", money(50_000), 10.0)
            .unwrap();
        catalog
    }

    // -------------------------------------------------------------------------
    // Computers
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_computer_uses_kind_default_performance() {
        let mut catalog = Catalog::new();
        let desktop = catalog
            .add_computer("DesktopComputer", 1, "Asus", "X", money(50_000))
            .unwrap();
        assert_eq!(desktop.overall_performance(), 15.0);

        let laptop = catalog.add_computer("Laptop", 2, "Dell", "XPS", money(30_000)).unwrap();
        assert_eq!(laptop.overall_performance(), 10.0);
        assert_eq!(catalog.computers().len(), 2);
    }

    #[test]
    fn test_duplicate_computer_id_is_reported_before_bad_type() {
        let mut catalog = catalog_with_desktop();
        let err = catalog
            .add_computer("Tablet", 1, "Apple", "iPad", money(1))
            .unwrap_err();
        assert!(matches!(err, ShopError::DuplicateId { entity: Entity::Computer, id: 1 }));

        let err = catalog
            .add_computer("Tablet", 2, "Apple", "iPad", money(1))
            .unwrap_err();
        assert!(matches!(err, ShopError::InvalidType { entity: Entity::Computer, .. }));
        assert_eq!(err.to_string(), "Computer type is invalid.");
    }

    #[test]
    fn test_computer_fields_are_validated() {
        let mut catalog = Catalog::new();
        let err = catalog.add_computer("Laptop", 0, "Dell", "XPS", money(1)).unwrap_err();
        assert!(matches!(err, ShopError::Validation(ValidationError::MustBePositive { .. })));

        let err = catalog.add_computer("Laptop", 1, " ", "XPS", money(1)).unwrap_err();
        assert_eq!(err.to_string(), "Manufacturer can not be empty.");

        let err = catalog.add_computer("Laptop", 1, "Dell", "XPS", money(-1)).unwrap_err();
        assert!(matches!(err, ShopError::Validation(ValidationError::OutOfRange { .. })));

        assert!(catalog.computers().is_empty());
    }

    #[test]
    fn test_get_computer_data_of_unknown_id_fails() {
        let catalog = catalog_with_desktop();
        assert!(catalog.get_computer_data(1).is_ok());
        let err = catalog.get_computer_data(9).unwrap_err();
        assert!(matches!(err, ShopError::UnknownComputer(9)));
        assert_eq!(err.to_string(), "Computer with this id does not exist.");
    }

    // -------------------------------------------------------------------------
    // Components
    // -------------------------------------------------------------------------

    #[test]
    fn test_cpu_scenario_price_and_performance() {
        let mut catalog = catalog_with_desktop();
        let entry = catalog.add_component(1, cpu(10)).unwrap();
        assert_eq!(entry.kind, ComponentKind::CentralProcessingUnit);
        assert_eq!(entry.computer_id, 1);

        let computer = catalog.get_computer_data(1).unwrap();
        assert_eq!(computer.price(), money(70_000));
        assert_eq!(computer.overall_performance(), 15.0);
    }

    #[test]
    fn test_add_component_error_precedence() {
        let mut catalog = catalog_with_desktop();
        catalog.add_component(1, cpu(10)).unwrap();

        let unknown = NewComponent { kind: "Toaster", ..cpu(10) };
        assert!(matches!(
            catalog.add_component(7, unknown),
            Err(ShopError::UnknownComputer(7))
        ));
        assert!(matches!(
            catalog.add_component(1, unknown),
            Err(ShopError::DuplicateId { entity: Entity::Component, id: 10 })
        ));

        let unknown = NewComponent { id: 11, ..unknown };
        let err = catalog.add_component(1, unknown).unwrap_err();
        assert_eq!(err.to_string(), "Component type is invalid.");

        let bad_model = NewComponent { id: 11, model: "", ..cpu(11) };
        assert!(matches!(
            catalog.add_component(1, bad_model),
            Err(ShopError::Validation(_))
        ));

        assert!(matches!(
            catalog.add_component(1, cpu(11)),
            Err(ShopError::DuplicateType { .. })
        ));
        assert_eq!(catalog.component_entries().len(), 1);
    }

    #[test]
    fn test_component_ids_are_unique_across_computers() {
        let mut catalog = catalog_with_desktop();
        catalog.add_computer("Laptop", 2, "Dell", "XPS", money(1)).unwrap();
        catalog.add_component(1, cpu(10)).unwrap();

        let err = catalog.add_component(2, cpu(10)).unwrap_err();
        assert_eq!(err.to_string(), "Component with this id already exists.");
    }

    #[test]
    fn test_rejected_attach_is_not_registered() {
        let mut catalog = catalog_with_desktop();
        catalog.add_component(1, cpu(10)).unwrap();
        assert!(catalog.add_component(1, cpu(11)).is_err());

        assert!(catalog.component(11).is_none());
        // The id stays free because the attach never happened.
        catalog.add_computer("Laptop", 2, "Dell", "XPS", money(1)).unwrap();
        assert!(catalog.add_component(2, cpu(11)).is_ok());
    }

    #[test]
    fn test_remove_missing_motherboard_is_not_found() {
        let mut catalog = catalog_with_desktop();
        let err = catalog.remove_component("Motherboard", 1).unwrap_err();
        assert!(matches!(err, ShopError::NotFound { entity: Entity::Component, .. }));

        catalog.add_component(1, cpu(10)).unwrap();
        let err = catalog.remove_component("Motherboard", 1).unwrap_err();
        assert!(matches!(err, ShopError::NotFound { .. }));
        assert_eq!(catalog.component_entries().len(), 1);
    }

    #[test]
    fn test_remove_component_checks_computer_then_type() {
        let mut catalog = catalog_with_desktop();
        assert!(matches!(
            catalog.remove_component("Toaster", 5),
            Err(ShopError::UnknownComputer(5))
        ));
        assert!(matches!(
            catalog.remove_component("Toaster", 1),
            Err(ShopError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_remove_component_only_touches_target_computer() {
        let mut catalog = catalog_with_desktop();
        catalog.add_computer("Laptop", 2, "Dell", "XPS", money(1)).unwrap();
        catalog.add_component(1, cpu(10)).unwrap();
        catalog
            .add_component(1, NewComponent { id: 11, kind: "VideoCard", ..cpu(11) })
            .unwrap();
        catalog.add_component(2, cpu(12)).unwrap();

        let removed = catalog.remove_component("CentralProcessingUnit", 1).unwrap();
        assert_eq!(removed.id(), 10);

        let ids: Vec<_> = catalog.component_entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(catalog.component(12).map(Component::id), Some(12));
        assert_eq!(catalog.get_computer_data(1).unwrap().components().len(), 1);
        assert_eq!(catalog.get_computer_data(2).unwrap().components().len(), 1);
    }

    #[test]
    fn test_components_iterate_in_registration_order() {
        let mut catalog = catalog_with_desktop();
        catalog.add_computer("Laptop", 2, "Dell", "XPS", money(1)).unwrap();
        catalog.add_component(2, cpu(30)).unwrap();
        catalog.add_component(1, cpu(20)).unwrap();

        let ids: Vec<_> = catalog.components().map(Component::id).collect();
        assert_eq!(ids, vec![30, 20]);
    }

    // -------------------------------------------------------------------------
    // Peripherals
    // -------------------------------------------------------------------------

    #[test]
    fn test_peripherals_add_to_price_only() {
        let mut catalog = catalog_with_desktop();
        catalog.add_peripheral(1, mouse(20)).unwrap();

        let computer = catalog.get_computer_data(1).unwrap();
        assert_eq!(computer.price(), money(55_000));
        assert_eq!(computer.overall_performance(), 10.0);
        assert_eq!(catalog.peripheral(20).map(Peripheral::connection_type), Some("USB"));
    }

    #[test]
    fn test_add_peripheral_error_precedence() {
        let mut catalog = catalog_with_desktop();
        catalog.add_peripheral(1, mouse(20)).unwrap();

        assert!(matches!(
            catalog.add_peripheral(3, mouse(20)),
            Err(ShopError::UnknownComputer(3))
        ));
        assert!(matches!(
            catalog.add_peripheral(1, mouse(20)),
            Err(ShopError::DuplicateId { entity: Entity::Peripheral, .. })
        ));
        let err = catalog
            .add_peripheral(1, NewPeripheral { kind: "Webcam", ..mouse(21) })
            .unwrap_err();
        assert_eq!(err.to_string(), "Peripheral type is invalid.");

        let err = catalog.add_peripheral(1, mouse(21)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Peripheral Mouse already exists in DesktopComputer with Id 1."
        );
        assert_eq!(catalog.peripheral_entries().len(), 1);
    }

    #[test]
    fn test_remove_peripheral_detaches_from_both_views() {
        let mut catalog = catalog_with_desktop();
        catalog.add_peripheral(1, mouse(20)).unwrap();
        catalog
            .add_peripheral(1, NewPeripheral { kind: "Monitor", ..mouse(21) })
            .unwrap();

        let removed = catalog.remove_peripheral("Mouse", 1).unwrap();
        assert_eq!(removed.id(), 20);
        assert!(catalog.peripheral(20).is_none());
        assert_eq!(catalog.peripherals().count(), 1);
        assert_eq!(catalog.get_computer_data(1).unwrap().peripherals().len(), 1);

        assert!(matches!(
            catalog.remove_peripheral("Mouse", 1),
            Err(ShopError::NotFound { entity: Entity::Peripheral, .. })
        ));
    }

    // -------------------------------------------------------------------------
    // Purchases
    // -------------------------------------------------------------------------

    #[test]
    fn test_buy_computer_removes_it_and_its_parts() {
        let mut catalog = catalog_with_desktop();
        catalog.add_component(1, cpu(10)).unwrap();
        catalog.add_peripheral(1, mouse(20)).unwrap();

        let bought = catalog.buy_computer(1).unwrap();
        assert_eq!(bought.price(), money(75_000));
        assert!(bought.describe().contains("Components (1):"));

        assert!(matches!(catalog.get_computer_data(1), Err(ShopError::UnknownComputer(1))));
        assert!(matches!(catalog.buy_computer(1), Err(ShopError::UnknownComputer(1))));
        assert!(catalog.component_entries().is_empty());
        assert!(catalog.peripheral_entries().is_empty());

        // Ids held by the bought computer are free again.
        catalog.add_computer("Laptop", 2, "Dell", "XPS", money(1)).unwrap();
        assert!(catalog.add_component(2, cpu(10)).is_ok());
    }

    #[test]
    fn test_buy_best_picks_highest_performance_within_budget() {
        let mut catalog = Catalog::new();
        catalog
            .add_computer_rated("DesktopComputer", 1, "Asus", "X", money(50_000), 10.0)
            .unwrap();
        catalog
            .add_computer_rated("Laptop", 2, "Dell", "Y", money(30_000), 20.0)
            .unwrap();

        let best = catalog.buy_best_computer(money(60_000)).unwrap();
        assert_eq!(best.id(), 2);
        // Query only.
        assert_eq!(catalog.computers().len(), 2);

        let best = catalog.buy_best_computer(money(40_000)).unwrap();
        assert_eq!(best.id(), 2);
    }

    #[test]
    fn test_buy_best_counts_attached_prices_against_budget() {
        let mut catalog = Catalog::new();
        catalog
            .add_computer_rated("DesktopComputer", 1, "Asus", "X", money(50_000), 10.0)
            .unwrap();
        catalog
            .add_computer_rated("Laptop", 2, "Dell", "Y", money(30_000), 20.0)
            .unwrap();
        catalog.add_component(2, cpu(10)).unwrap();

        // Laptop now costs 500.00, desktop 500.00; laptop still wins on rating.
        assert_eq!(catalog.buy_best_computer(money(50_000)).unwrap().id(), 2);
        // Below both totals.
        let err = catalog.buy_best_computer(money(49_999)).unwrap_err();
        assert!(matches!(err, ShopError::BudgetExceeded { .. }));
        assert_eq!(err.to_string(), "Can't buy a computer with a budget of $499.99.");
    }

    #[test]
    fn test_buy_best_ties_go_to_first_registered() {
        let mut catalog = Catalog::new();
        catalog
            .add_computer_rated("Laptop", 5, "A", "A", money(100), 12.0)
            .unwrap();
        catalog
            .add_computer_rated("Laptop", 3, "B", "B", money(100), 12.0)
            .unwrap();

        assert_eq!(catalog.buy_best_computer(money(100)).unwrap().id(), 5);
    }

    #[test]
    fn test_prices_above_cap_are_rejected_before_mutation() {
        let mut catalog = Catalog::new();
        let huge: Money = "92233720368547758.07".parse().unwrap();
        let err = catalog.add_computer("Laptop", 1, "Dell", "XPS", huge).unwrap_err();
        assert!(matches!(err, ShopError::Validation(ValidationError::OutOfRange { .. })));
        assert!(catalog.computers().is_empty());

        catalog.add_computer("Laptop", 1, "Dell", "XPS", MAX_PRICE).unwrap();
        let over = NewComponent {
            price: Money::from_cents(MAX_PRICE.cents() + 1),
            ..cpu(10)
        };
        let err = catalog.add_component(1, over).unwrap_err();
        assert!(matches!(err, ShopError::Validation(ValidationError::OutOfRange { .. })));
        assert!(catalog.component_entries().is_empty());
        assert!(catalog.get_computer_data(1).unwrap().components().is_empty());
    }

    #[test]
    fn test_max_priced_parts_sum_without_overflow() {
        let mut catalog = Catalog::new();
        catalog.add_computer("Laptop", 1, "Dell", "XPS", MAX_PRICE).unwrap();
        for (i, kind) in ComponentKind::ALL.iter().enumerate() {
            let part = NewComponent {
                id: i as u32 + 10,
                kind: kind.tag(),
                price: MAX_PRICE,
                ..cpu(0)
            };
            catalog.add_component(1, part).unwrap();
        }
        for (i, kind) in PeripheralKind::ALL.iter().enumerate() {
            let part = NewPeripheral {
                id: i as u32 + 20,
                kind: kind.tag(),
                price: MAX_PRICE,
                ..mouse(0)
            };
            catalog.add_peripheral(1, part).unwrap();
        }

        let expected = Money::from_cents(MAX_PRICE.cents() * 11);
        assert_eq!(catalog.get_computer_data(1).unwrap().price(), expected);
        assert!(matches!(
            catalog.buy_best_computer(Money::zero()),
            Err(ShopError::BudgetExceeded { .. })
        ));
        assert_eq!(catalog.buy_best_computer(expected).unwrap().id(), 1);
    }

    #[test]
    fn test_buy_best_on_empty_catalog_fails() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.buy_best_computer(money(1_000_000)),
            Err(ShopError::BudgetExceeded { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the pick is within budget, has the top rating among
        /// qualifying computers, and is the first registered with that rating.
        #[test]
        fn test_buy_best_respects_budget_and_order(
            computers in prop::collection::vec((0i64..100_000, 1u32..20), 0..12),
            budget in 0i64..100_000,
        ) {
            let mut catalog = Catalog::new();
            for (i, (price, rating)) in computers.iter().enumerate() {
                catalog
                    .add_computer_rated("Laptop", i as u32 + 1, "M", "N", money(*price), *rating as f64)
                    .unwrap();
            }

            let qualifying: Vec<_> = computers
                .iter()
                .enumerate()
                .filter(|(_, (price, _))| *price <= budget)
                .collect();

            match catalog.buy_best_computer(money(budget)) {
                Ok(best) => {
                    prop_assert!(best.price() <= money(budget));
                    let top = qualifying.iter().map(|(_, (_, r))| *r).max().unwrap();
                    let first = qualifying.iter().find(|(_, (_, r))| *r == top).unwrap().0;
                    prop_assert_eq!(best.id(), first as u32 + 1);
                }
                Err(err) => {
                    prop_assert!(qualifying.is_empty());
                    let is_budget = matches!(err, ShopError::BudgetExceeded { .. });
                    prop_assert!(is_budget);
                }
            }
        }

        /// Property: a bought computer can never be looked up again.
        #[test]
        fn test_bought_computer_is_gone(count in 1u32..8, pick in 0u32..8) {
            let mut catalog = Catalog::new();
            for id in 1..=count {
                catalog.add_computer("DesktopComputer", id, "M", "N", money(100)).unwrap();
            }
            let id = pick % count + 1;

            prop_assert!(catalog.buy_computer(id).is_ok());
            let unknown = matches!(catalog.get_computer_data(id), Err(ShopError::UnknownComputer(_)));
            prop_assert!(unknown);
            prop_assert_eq!(catalog.computers().len() as u32, count - 1);
        }
    }
}
