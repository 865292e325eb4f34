//! # Components
//!
//! Internal parts a computer is built from. Six kinds, identical behavior;
//! the kind only matters for the one-of-each-kind rule on a computer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Entity, ShopError};
use crate::money::Money;
use crate::product::{parse_kind, write_product_line, Kind, Product, ProductId};

// =============================================================================
// Component Kind
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    CentralProcessingUnit,
    Motherboard,
    PowerSupply,
    RandomAccessMemory,
    SolidStateDrive,
    VideoCard,
}

impl Kind for ComponentKind {
    const ENTITY: Entity = Entity::Component;

    const ALL: &'static [Self] = &[
        ComponentKind::CentralProcessingUnit,
        ComponentKind::Motherboard,
        ComponentKind::PowerSupply,
        ComponentKind::RandomAccessMemory,
        ComponentKind::SolidStateDrive,
        ComponentKind::VideoCard,
    ];

    fn tag(self) -> &'static str {
        match self {
            ComponentKind::CentralProcessingUnit => "CentralProcessingUnit",
            ComponentKind::Motherboard => "Motherboard",
            ComponentKind::PowerSupply => "PowerSupply",
            ComponentKind::RandomAccessMemory => "RandomAccessMemory",
            ComponentKind::SolidStateDrive => "SolidStateDrive",
            ComponentKind::VideoCard => "VideoCard",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ComponentKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(s)
    }
}

// =============================================================================
// Component
// =============================================================================

/// A part attached to exactly one computer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    kind: ComponentKind,
    product: Product,
    generation: u32,
}

impl Component {
    pub fn new(kind: ComponentKind, product: Product, generation: u32) -> Self {
        Component {
            kind,
            product,
            generation,
        }
    }

    #[inline]
    pub fn kind(&self) -> ComponentKind {
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

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_product_line(
            f,
            self.kind.tag(),
            &self.product,
            self.overall_performance(),
            self.price(),
        )?;
        write!(f, " Generation: {}", self.generation)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
