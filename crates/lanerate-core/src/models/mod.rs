//! Domain models for LaneRate
//!
//! This module contains all the core domain models used by the pricing engine.

pub mod breakdown;
pub mod input;
pub mod packaging;
pub mod piece;
pub mod policy;
pub mod tariff;

pub use breakdown::{CalculationDetails, ComponentAmounts, CostBreakdown, SellBreakdown};
pub use input::CostCalculationInput;
pub use packaging::{PackagingCategory, PackagingSku, PackagingSpecs};
pub use piece::{Dimensions, Piece, PieceType};
pub use policy::{
    ComponentPricing, ComponentTable, CostComponent, GlobalRules, OutsideUsaSurcharge,
    PricingPolicy, RoundRule, SurchargeRules,
};
pub use tariff::{ServiceLevel, Tariff, TariffBand, TierCaps};
