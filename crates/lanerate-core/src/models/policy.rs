//! Pricing policy model
//!
//! Versioned markup configuration: per-component markup/rounding/floors, a
//! conditional surcharge for payments collected outside the USA, and global
//! minimum/rounding rules. Treated as an immutable snapshot per calculation;
//! policy versioning and storage are external concerns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PricingError;

/// Cost component enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostComponent {
    Freight,
    Overweight,
    Packaging,
    Storage,
    Pickup,
    Delivery,
}

impl CostComponent {
    /// All components, in breakdown order
    pub const ALL: [CostComponent; 6] = [
        CostComponent::Freight,
        CostComponent::Overweight,
        CostComponent::Packaging,
        CostComponent::Storage,
        CostComponent::Pickup,
        CostComponent::Delivery,
    ];
}

impl fmt::Display for CostComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostComponent::Freight => write!(f, "freight"),
            CostComponent::Overweight => write!(f, "overweight"),
            CostComponent::Packaging => write!(f, "packaging"),
            CostComponent::Storage => write!(f, "storage"),
            CostComponent::Pickup => write!(f, "pickup"),
            CostComponent::Delivery => write!(f, "delivery"),
        }
    }
}

/// Rounding rule for sell prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundRule {
    /// Round up (ceiling)
    #[default]
    Up,
    /// Round down (floor)
    Down,
    /// Round to nearest, midpoint away from zero
    Nearest,
}

impl fmt::Display for RoundRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundRule::Up => write!(f, "up"),
            RoundRule::Down => write!(f, "down"),
            RoundRule::Nearest => write!(f, "nearest"),
        }
    }
}

/// Markup configuration for one cost component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentPricing {
    /// Sell multiplier, >= 1.0 (1.80 = 80% margin)
    pub markup: Decimal,

    /// How to round the marked-up amount to the nearest $1
    pub round_rule: RoundRule,

    /// Minimum sell price for this component after rounding
    pub min_floor: Decimal,

    /// Sell at cost, skipping markup, rounding, and floor
    pub pass_through: bool,
}

/// Per-component markup table, one entry per cost component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTable {
    pub freight: ComponentPricing,
    pub overweight: ComponentPricing,
    pub packaging: ComponentPricing,
    pub storage: ComponentPricing,
    pub pickup: ComponentPricing,
    pub delivery: ComponentPricing,
}

impl ComponentTable {
    /// Look up the pricing config for a component
    pub fn get(&self, component: CostComponent) -> &ComponentPricing {
        match component {
            CostComponent::Freight => &self.freight,
            CostComponent::Overweight => &self.overweight,
            CostComponent::Packaging => &self.packaging,
            CostComponent::Storage => &self.storage,
            CostComponent::Pickup => &self.pickup,
            CostComponent::Delivery => &self.delivery,
        }
    }
}

/// Surcharge for quotes paid outside the USA
///
/// Threshold-based step function, not a blended formula: below the
/// threshold a flat fee applies, at or above it a percentage of the
/// post-markup subtotal. The discontinuity at the threshold is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutsideUsaSurcharge {
    pub enabled: bool,

    /// Subtotals below this get the flat fee; at or above, the percentage
    pub threshold_usd: Decimal,

    /// Flat fee below the threshold
    pub flat_fee_usd: Decimal,

    /// Percentage applied at or above the threshold (e.g. 10 = 10%)
    pub percentage_rate: Decimal,
}

/// Conditional surcharge rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurchargeRules {
    pub paid_outside_usa: OutsideUsaSurcharge,
}

/// Global finalization rules applied after all component markups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalRules {
    /// Absolute floor on the final customer price, applied after rounding
    pub min_sell_price: Decimal,

    /// Rounding rule for the final total
    pub default_round_rule: RoundRule,

    /// Rounding increment for the final total (e.g. 1 = whole dollars)
    pub round_to_nearest: Decimal,
}

/// Versioned markup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Policy version label, echoed into every SellBreakdown
    pub version: String,

    /// Per-component markup table
    pub components: ComponentTable,

    /// Conditional surcharge rules
    pub surcharge_rules: SurchargeRules,

    /// Global minimum and rounding
    pub global_rules: GlobalRules,
}

impl PricingPolicy {
    /// Baseline policy usable when no stored policy exists yet
    ///
    /// Markup 1.80 on every component, round up to $1, no component
    /// floors, global minimum $35, outside-USA surcharge $100 threshold /
    /// $10 flat / 10%.
    pub fn baseline() -> Self {
        let component = ComponentPricing {
            markup: Decimal::new(180, 2),
            round_rule: RoundRule::Up,
            min_floor: Decimal::ZERO,
            pass_through: false,
        };

        Self {
            version: "baseline-1.80".to_string(),
            components: ComponentTable {
                freight: component,
                overweight: component,
                packaging: component,
                storage: component,
                pickup: component,
                delivery: component,
            },
            surcharge_rules: SurchargeRules {
                paid_outside_usa: OutsideUsaSurcharge {
                    enabled: true,
                    threshold_usd: Decimal::from(100),
                    flat_fee_usd: Decimal::from(10),
                    percentage_rate: Decimal::from(10),
                },
            },
            global_rules: GlobalRules {
                min_sell_price: Decimal::from(35),
                default_round_rule: RoundRule::Up,
                round_to_nearest: Decimal::ONE,
            },
        }
    }

    /// Structural validation, run at policy-load time
    ///
    /// The engine itself assumes a valid policy and never re-checks these;
    /// a markup below 1.0 would propagate sell < cost rather than fail.
    pub fn validate_structure(&self) -> Result<(), PricingError> {
        for component in CostComponent::ALL {
            let cfg = self.components.get(component);
            if cfg.markup < Decimal::ONE {
                return Err(PricingError::InvalidPolicy(format!(
                    "{} markup {} is below 1.0",
                    component, cfg.markup
                )));
            }
            if cfg.min_floor < Decimal::ZERO {
                return Err(PricingError::InvalidPolicy(format!(
                    "{} floor {} is negative",
                    component, cfg.min_floor
                )));
            }
        }

        let surcharge = &self.surcharge_rules.paid_outside_usa;
        if surcharge.threshold_usd < Decimal::ZERO
            || surcharge.flat_fee_usd < Decimal::ZERO
            || surcharge.percentage_rate < Decimal::ZERO
            || surcharge.percentage_rate > Decimal::from(100)
        {
            return Err(PricingError::InvalidPolicy(
                "outside-USA surcharge values out of range".to_string(),
            ));
        }

        let global = &self.global_rules;
        if global.min_sell_price < Decimal::ZERO {
            return Err(PricingError::InvalidPolicy(
                "global minimum sell price is negative".to_string(),
            ));
        }
        if global.round_to_nearest <= Decimal::ZERO {
            return Err(PricingError::InvalidPolicy(
                "global rounding increment must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_baseline_policy() {
        let policy = PricingPolicy::baseline();
        assert_eq!(policy.components.freight.markup, dec!(1.80));
        assert_eq!(policy.components.freight.round_rule, RoundRule::Up);
        assert_eq!(policy.global_rules.min_sell_price, dec!(35));
        assert_eq!(policy.surcharge_rules.paid_outside_usa.threshold_usd, dec!(100));
        assert!(policy.validate_structure().is_ok());
    }

    #[test]
    fn test_validate_rejects_markup_below_one() {
        let mut policy = PricingPolicy::baseline();
        policy.components.storage.markup = dec!(0.95);

        let err = policy.validate_structure().unwrap_err();
        assert_eq!(err.error_code(), "invalid_policy");
        assert!(err.to_string().contains("storage"));
    }

    #[test]
    fn test_validate_rejects_negative_floor() {
        let mut policy = PricingPolicy::baseline();
        policy.components.packaging.min_floor = dec!(-5);
        assert!(policy.validate_structure().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_percentage() {
        let mut policy = PricingPolicy::baseline();
        policy.surcharge_rules.paid_outside_usa.percentage_rate = dec!(150);
        assert!(policy.validate_structure().is_err());
    }

    #[test]
    fn test_component_table_lookup() {
        let mut policy = PricingPolicy::baseline();
        policy.components.pickup.pass_through = true;

        assert!(policy.components.get(CostComponent::Pickup).pass_through);
        assert!(!policy.components.get(CostComponent::Freight).pass_through);
    }
}
