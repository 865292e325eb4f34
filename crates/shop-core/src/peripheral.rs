//! # Peripherals
//!
//! External accessories. Four kinds; a peripheral adds to a computer's
//! price but never to its reported performance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Entity, ShopError};
use crate::money::Money;
use crate::product::{parse_kind, write_product_line, Kind, Product, ProductId};

// =============================================================================
// Peripheral Kind
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeripheralKind {
    Headset,
    Keyboard,
    Monitor,
    Mouse,
}

impl Kind for PeripheralKind {
    const ENTITY: Entity = Entity::Peripheral;

    const ALL: &'static [Self] = &[
        PeripheralKind::Headset,
        PeripheralKind::Keyboard,
        PeripheralKind::Monitor,
        PeripheralKind::Mouse,
    ];

    fn tag(self) -> &'static str {
        match self {
            PeripheralKind::Headset => "Headset",
            PeripheralKind::Keyboard => "Keyboard",
            PeripheralKind::Monitor => "Monitor",
            PeripheralKind::Mouse => "Mouse",
        }
    }
}

impl fmt::Display for PeripheralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PeripheralKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(s)
    }
}

// =============================================================================
// Peripheral
// =============================================================================

/// An accessory attached to exactly one computer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peripheral {
    kind: PeripheralKind,
    product: Product,
    /// Free text: "USB", "Bluetooth", "HDMI", ...
    connection_type: String,
}

impl Peripheral {
    pub fn new(kind: PeripheralKind, product: Product, connection_type: impl Into<String>) -> Self {
        Peripheral {
            kind,
            product,
            connection_type: connection_type.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> PeripheralKind {
        self.kind
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.product.price
    }

    #[inline]
    pub fn overall_performance(&self) -> f64 {
        self.product.overall_performance
    }

    pub fn connection_type(&self) -> &str {
        &self.connection_type
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_product_line(
            f,
            self.kind.tag(),
            &self.product,
            self.overall_performance(),
            self.price(),
        )?;
        write!(f, " Connection Type: {}", self.connection_type)
    }
}
