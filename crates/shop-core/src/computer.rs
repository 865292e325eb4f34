//! # Computer Aggregate
//!
//! A computer owns the components and peripherals attached to it.
//!
//! ## Derived Values
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Computer (id 1, DesktopComputer)                     │
//! │                                                                         │
//! │  base price 500.00 ─┐                                                  │
//! │  CPU        200.00 ─┼──► price() = 500 + 200 + 80 = 780.00            │
//! │  Mouse       80.00 ─┘                                                  │
//! │                                                                         │
//! │  base perf  10.0 ───┐                                                  │
//! │  CPU         5.0 ───┴──► overall_performance() = 10 + avg(5) = 15.0    │
//! │  Mouse       2.0  (peripherals never count toward performance)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both values are recomputed on every call; nothing is cached, so attach
//! and detach never need to keep a running total in sync.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::component::{Component, ComponentKind};
use crate::error::{Entity, ShopError, ShopResult};
use crate::money::Money;
use crate::peripheral::{Peripheral, PeripheralKind};
use crate::product::{parse_kind, write_product_line, Kind, Product, ProductId};

// =============================================================================
// Computer Kind
// =============================================================================

/// Desktop or laptop. Behavior is identical; only the tag and the default
/// base performance differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComputerKind {
    DesktopComputer,
    Laptop,
}

impl ComputerKind {
    /// Base performance used when a computer is added without a rating.
    pub const fn base_performance(self) -> f64 {
        match self {
            ComputerKind::DesktopComputer => 15.0,
            ComputerKind::Laptop => 10.0,
        }
    }
}

impl Kind for ComputerKind {
    const ENTITY: Entity = Entity::Computer;

    const ALL: &'static [Self] = &[ComputerKind::DesktopComputer, ComputerKind::Laptop];

    fn tag(self) -> &'static str {
        match self {
            ComputerKind::DesktopComputer => "DesktopComputer",
            ComputerKind::Laptop => "Laptop",
        }
    }
}

impl fmt::Display for ComputerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ComputerKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(s)
    }
}

// =============================================================================
// Computer
// =============================================================================

/// A sellable computer and everything attached to it.
///
/// ## Invariants
/// - At most one component of each [`ComponentKind`]
/// - At most one peripheral of each [`PeripheralKind`]
/// - Collections keep insertion order (rendering depends on it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Computer {
    kind: ComputerKind,
    product: Product,
    components: Vec<Component>,
    peripherals: Vec<Peripheral>,
}

impl Computer {
    pub fn new(kind: ComputerKind, product: Product) -> Self {
        Computer {
            kind,
            product,
            components: Vec::new(),
            peripherals: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ComputerKind {
        self.kind
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// The stored base product (base price, base performance).
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn peripherals(&self) -> &[Peripheral] {
        &self.peripherals
    }

    /// The attached component of `kind`, if any.
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind() == kind)
    }

    /// The attached peripheral of `kind`, if any.
    pub fn peripheral(&self, kind: PeripheralKind) -> Option<&Peripheral> {
        self.peripherals.iter().find(|p| p.kind() == kind)
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Base price plus every attached component and peripheral.
    pub fn price(&self) -> Money {
        let components: Money = self.components.iter().map(Component::price).sum();
        let peripherals: Money = self.peripherals.iter().map(Peripheral::price).sum();
        self.product.price + components + peripherals
    }

    /// Base performance plus the mean of attached components.
    ///
    /// With no components this is exactly the base performance.
    pub fn overall_performance(&self) -> f64 {
        if self.components.is_empty() {
            return self.product.overall_performance;
        }

        let total: f64 = self
            .components
            .iter()
            .map(Component::overall_performance)
            .sum();
        self.product.overall_performance + total / self.components.len() as f64
    }

    /// Mean performance of attached peripherals, 0 when none are attached.
    pub fn peripheral_average_performance(&self) -> f64 {
        if self.peripherals.is_empty() {
            return 0.0;
        }

        let total: f64 = self
            .peripherals
            .iter()
            .map(Peripheral::overall_performance)
            .sum();
        total / self.peripherals.len() as f64
    }

    // -------------------------------------------------------------------------
    // Attach / detach
    // -------------------------------------------------------------------------

    /// Attaches a component.
    ///
    /// ## Errors
    /// `DuplicateType` if a component of the same kind is already attached;
    /// the collection is left unchanged.
    pub fn add_component(&mut self, component: Component) -> ShopResult<()> {
        if self.component(component.kind()).is_some() {
            return Err(self.duplicate_type(Entity::Component, component.kind().tag()));
        }

        self.components.push(component);
        Ok(())
    }

    /// Detaches and returns the component of `kind`.
    ///
    /// ## Errors
    /// `NotFound` if nothing is attached or no component has that kind.
    pub fn remove_component(&mut self, kind: ComponentKind) -> ShopResult<Component> {
        let index = self
            .components
            .iter()
            .position(|c| c.kind() == kind)
            .ok_or_else(|| self.not_found(Entity::Component, kind.tag()))?;

        Ok(self.components.remove(index))
    }

    /// Attaches a peripheral. Same rules as [`Computer::add_component`].
    pub fn add_peripheral(&mut self, peripheral: Peripheral) -> ShopResult<()> {
        if self.peripheral(peripheral.kind()).is_some() {
            return Err(self.duplicate_type(Entity::Peripheral, peripheral.kind().tag()));
        }

        self.peripherals.push(peripheral);
        Ok(())
    }

    /// Detaches and returns the peripheral of `kind`.
    pub fn remove_peripheral(&mut self, kind: PeripheralKind) -> ShopResult<Peripheral> {
        let index = self
            .peripherals
            .iter()
            .position(|p| p.kind() == kind)
            .ok_or_else(|| self.not_found(Entity::Peripheral, kind.tag()))?;

        Ok(self.peripherals.remove(index))
    }

    pub(crate) fn duplicate_type(&self, entity: Entity, kind: &str) -> ShopError {
        ShopError::DuplicateType {
            entity,
            kind: kind.to_string(),
            computer_kind: self.kind.tag().to_string(),
            computer_id: self.id(),
        }
    }

    pub(crate) fn not_found(&self, entity: Entity, kind: &str) -> ShopError {
        ShopError::NotFound {
            entity,
            kind: kind.to_string(),
            computer_kind: self.kind.tag().to_string(),
            computer_id: self.id(),
        }
    }

    /// Full multi-line description (same as `to_string()`).
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Renders the computer with derived price and performance:
///
/// ```text
/// Overall Performance: 15.00. Price: 700.00 - DesktopComputer: Asus X (Id: 1)
///  Components (1):
///   Overall Performance: 5.00. Price: 200.00 - CentralProcessingUnit: Intel i9 (Id: 10) Generation: 9
///  Peripherals (0); Average Overall Performance (0.00):
/// ```
impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_product_line(
            f,
            self.kind.tag(),
            &self.product,
            self.overall_performance(),
            self.price(),
        )?;

        write!(f, "\n Components ({}):", self.components.len())?;
        for component in &self.components {
            write!(f, "\n  {}", component)?;
        }

        write!(
            f,
            "\n Peripherals ({}); Average Overall Performance ({:.2}):",
            self.peripherals.len(),
            self.peripheral_average_performance()
        )?;
        for peripheral in &self.peripherals {
            write!(f, "\n  {}", peripheral)?;
        }

        Ok(())
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Structured view of a computer for the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputerSummary {
    pub id: ProductId,
    pub kind: ComputerKind,
    pub manufacturer: String,
    pub model: String,
    pub price_cents: i64,
    pub overall_performance: f64,
    pub component_count: usize,
    pub peripheral_count: usize,
    pub peripheral_average_performance: f64,
}

impl From<&Computer> for ComputerSummary {
    fn from(computer: &Computer) -> Self {
        ComputerSummary {
            id: computer.id(),
            kind: computer.kind(),
            manufacturer: computer.product.manufacturer.clone(),
            model: computer.product.model.clone(),
            price_cents: computer.price().cents(),
            overall_performance: computer.overall_performance(),
            component_count: computer.components.len(),
            peripheral_count: computer.peripherals.len(),
            peripheral_average_performance: computer.peripheral_average_performance(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
