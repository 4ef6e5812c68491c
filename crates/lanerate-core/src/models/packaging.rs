//! Packaging SKU model
//!
//! Purchasable packaging options resolved by ID from an external catalog.
//! The engine only needs the internal cost of each selected SKU.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Packaging category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackagingCategory {
    /// Shipping barrel
    Barrel,
    /// Cardboard box
    #[default]
    Box,
    /// Padded mailer
    Mailer,
}

impl fmt::Display for PackagingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackagingCategory::Barrel => write!(f, "barrel"),
            PackagingCategory::Box => write!(f, "box"),
            PackagingCategory::Mailer => write!(f, "mailer"),
        }
    }
}

/// Physical specifications of a packaging SKU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackagingSpecs {
    /// Maximum load the packaging is rated for
    pub max_weight_kg: Decimal,
}

/// Packaging SKU entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingSku {
    /// Catalog identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Packaging category
    pub category: PackagingCategory,

    /// Internal cost (what we pay for it)
    pub cost_usd: Decimal,

    /// Physical specifications
    pub specifications: PackagingSpecs,
}
