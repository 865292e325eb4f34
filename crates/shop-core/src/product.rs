//! # Product Value Model
//!
//! Identity and pricing fields shared by every sellable item.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Sellable Items                                  │
//! │                                                                         │
//! │                      ┌─────────────────────┐                           │
//! │                      │      Product        │                           │
//! │                      │  ─────────────────  │                           │
//! │                      │  id                 │                           │
//! │                      │  manufacturer       │                           │
//! │                      │  model              │                           │
//! │                      │  price (Money)      │                           │
//! │                      │  overall_performance│                           │
//! │                      └──────────┬──────────┘                           │
//! │             ┌───────────────────┼───────────────────┐                  │
//! │             ▼                   ▼                   ▼                  │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────┐       │
//! │  │    Component     │ │    Peripheral    │ │     Computer     │       │
//! │  │  + generation    │ │  + connection    │ │  + components    │       │
//! │  │  ComponentKind   │ │  PeripheralKind  │ │  + peripherals   │       │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Composition, not inheritance: each item embeds a [`Product`] and a kind
//! enum. The kind enums share the [`Kind`] trait so tag parsing and
//! registry bookkeeping are written once.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Entity, ShopError, ShopResult};
use crate::money::Money;

/// Product identifier, unique within one kind registry.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// The common fields of a sellable item.
///
/// Stores what it is given. Uniqueness and field rules are the catalog's
/// job (see [`crate::validation`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub manufacturer: String,
    pub model: String,
    pub price: Money,
    pub overall_performance: f64,
}

impl Product {
    pub fn new(
        id: ProductId,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        price: Money,
        overall_performance: f64,
    ) -> Self {
        Product {
            id,
            manufacturer: manufacturer.into(),
            model: model.into(),
            price,
            overall_performance,
        }
    }
}

/// Writes the shared product line:
/// `Overall Performance: 15.00. Price: 700.00 - DesktopComputer: Asus X (Id: 1)`
///
/// Price and performance are passed in because a computer reports derived
/// values rather than its stored base.
pub(crate) fn write_product_line(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    product: &Product,
    overall_performance: f64,
    price: Money,
) -> fmt::Result {
    write!(
        f,
        "Overall Performance: {:.2}. Price: {} - {}: {} {} (Id: {})",
        overall_performance, price, kind, product.manufacturer, product.model, product.id
    )
}

// =============================================================================
// Kind
// =============================================================================

/// A closed set of type tags.
///
/// Implemented by [`crate::ComputerKind`], [`crate::ComponentKind`] and
/// [`crate::PeripheralKind`].
pub trait Kind: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Registry the kind belongs to, used in error messages.
    const ENTITY: Entity;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The text tag used by the command language.
    fn tag(self) -> &'static str;
}

/// Parses a text tag into a kind.
///
/// ## Example
/// ```rust
/// use shop_core::{parse_kind, ComponentKind, ShopError};
///
/// let kind: ComponentKind = parse_kind("VideoCard").unwrap();
/// assert_eq!(kind, ComponentKind::VideoCard);
///
/// let err = parse_kind::<ComponentKind>("Toaster").unwrap_err();
/// assert!(matches!(err, ShopError::InvalidType { .. }));
/// ```
pub fn parse_kind<K: Kind>(tag: &str) -> ShopResult<K> {
    K::ALL
        .iter()
        .copied()
        .find(|kind| kind.tag() == tag)
        .ok_or_else(|| ShopError::InvalidType {
            entity: K::ENTITY,
            tag: tag.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
