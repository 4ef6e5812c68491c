//! Cost and sell breakdown models
//!
//! Pure output values, created fresh per pricing request. The engine holds
//! no cross-request state and never mutates a breakdown after producing it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::packaging::PackagingSku;
use super::policy::CostComponent;
use super::tariff::TariffBand;

/// One amount per cost component
///
/// Reused for cost amounts, sell amounts, and applied markup multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ComponentAmounts {
    pub freight: Decimal,
    pub overweight: Decimal,
    pub packaging: Decimal,
    pub storage: Decimal,
    pub pickup: Decimal,
    pub delivery: Decimal,
}

impl ComponentAmounts {
    /// Sum across all six components
    pub fn total(&self) -> Decimal {
        self.freight + self.overweight + self.packaging + self.storage + self.pickup + self.delivery
    }

    /// Amount for one component
    pub fn get(&self, component: CostComponent) -> Decimal {
        match component {
            CostComponent::Freight => self.freight,
            CostComponent::Overweight => self.overweight,
            CostComponent::Packaging => self.packaging,
            CostComponent::Storage => self.storage,
            CostComponent::Pickup => self.pickup,
            CostComponent::Delivery => self.delivery,
        }
    }

    /// Set the amount for one component
    pub fn set(&mut self, component: CostComponent, amount: Decimal) {
        match component {
            CostComponent::Freight => self.freight = amount,
            CostComponent::Overweight => self.overweight = amount,
            CostComponent::Packaging => self.packaging = amount,
            CostComponent::Storage => self.storage = amount,
            CostComponent::Pickup => self.pickup = amount,
            CostComponent::Delivery => self.delivery = amount,
        }
    }
}

/// Intermediate figures from the cost calculation, kept for audit display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// Sum of actual piece weights
    pub total_weight_kg: Decimal,

    /// Sum of piece volumes in cubic meters (pieces without dimensions
    /// contribute zero)
    pub total_volume_m3: Decimal,

    /// Whether the shipment exceeded the tariff's top band
    pub is_overweight: bool,

    /// Kilograms billed at the overweight rate
    pub overweight_kg: Decimal,

    /// The band whose flat rate priced the shipment
    pub applied_band: TariffBand,

    /// Packaging SKUs that resolved from the catalog
    pub packaging_skus: Vec<PackagingSku>,
}

/// Output of the cost calculation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Internal (carrier) cost per component
    pub costs: ComponentAmounts,

    /// Sum of all component costs
    pub subtotal: Decimal,

    /// Shipment chargeable weight (max of actual and dimensional, summed)
    pub chargeable_weight_kg: Decimal,

    /// Audit detail
    pub calculations: CalculationDetails,
}

/// Output of the markup stage: the customer-facing price with margin metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellBreakdown {
    /// The cost breakdown this sell price was derived from
    pub cost: CostBreakdown,

    /// Post-markup sell price per component
    pub sell: ComponentAmounts,

    /// Outside-USA payment surcharge (zero when not applicable)
    pub surcharge: Decimal,

    /// Final customer price
    pub total: Decimal,

    /// `total - cost.subtotal`
    pub margin: Decimal,

    /// Margin as a percentage of cost (zero when cost is zero)
    pub margin_percentage: Decimal,

    /// Markup multipliers actually used (1.0 for pass-through or zero-cost
    /// components)
    pub applied_markups: ComponentAmounts,

    /// Version label of the policy that produced this price
    pub policy_version: String,
}
