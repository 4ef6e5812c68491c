//! Markup stage
//!
//! Applies per-component markup, rounding, and price floors to a cost
//! breakdown, then the outside-USA surcharge, global rounding, and the
//! absolute minimum sell price. Purely arithmetic: given a well-formed
//! cost breakdown and policy this stage cannot fail.

use lanerate_core::models::{
    ComponentAmounts, ComponentPricing, CostBreakdown, CostComponent, OutsideUsaSurcharge,
    PricingPolicy, SellBreakdown,
};
use rust_decimal::Decimal;
use tracing::debug;

use crate::constants::COMPONENT_ROUND_INCREMENT;
use crate::rounding::round_to_increment;

/// Apply a pricing policy to a cost breakdown, producing the sell price
pub fn apply_markup(
    cost: &CostBreakdown,
    paid_outside_usa: bool,
    policy: &PricingPolicy,
) -> SellBreakdown {
    let mut sell = ComponentAmounts::default();
    let mut applied_markups = ComponentAmounts::default();

    for component in CostComponent::ALL {
        let amount = cost.costs.get(component);
        let cfg = policy.components.get(component);
        let (sell_price, markup_used) = component_sell(amount, cfg);
        sell.set(component, sell_price);
        applied_markups.set(component, markup_used);
    }

    let subtotal = sell.total();
    let surcharge = if paid_outside_usa {
        outside_usa_surcharge(subtotal, &policy.surcharge_rules.paid_outside_usa)
    } else {
        Decimal::ZERO
    };

    let rounded = round_to_increment(
        subtotal + surcharge,
        policy.global_rules.default_round_rule,
        policy.global_rules.round_to_nearest,
    );
    let total = rounded.max(policy.global_rules.min_sell_price);

    let margin = total - cost.subtotal;
    let margin_percentage = if cost.subtotal > Decimal::ZERO {
        (margin / cost.subtotal * Decimal::from(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    debug!(
        subtotal = %subtotal,
        surcharge = %surcharge,
        total = %total,
        margin = %margin,
        policy = %policy.version,
        "markup applied"
    );

    SellBreakdown {
        cost: cost.clone(),
        sell,
        surcharge,
        total,
        margin,
        margin_percentage,
        applied_markups,
        policy_version: policy.version.clone(),
    }
}

/// Sell price for one component, plus the markup multiplier actually used
///
/// Pass-through and zero-cost components sell at cost unchanged: no
/// markup, no rounding, no floor. A zero-cost line must never be inflated
/// to a floor price.
fn component_sell(cost: Decimal, cfg: &ComponentPricing) -> (Decimal, Decimal) {
    if cfg.pass_through || cost == Decimal::ZERO {
        return (cost, Decimal::ONE);
    }

    let marked_up = cost * cfg.markup;
    let rounded = round_to_increment(marked_up, cfg.round_rule, COMPONENT_ROUND_INCREMENT);
    let sell = rounded.max(cfg.min_floor);

    (sell, cfg.markup)
}

/// Threshold step function for quotes paid outside the USA
///
/// Below the threshold: flat fee. At or above it: a percentage of the
/// post-markup subtotal. A $99 subtotal pays the flat $10; a $100 subtotal
/// pays 10% ($10); a $200 subtotal pays $20. The discontinuity at the
/// threshold is intentional.
fn outside_usa_surcharge(subtotal: Decimal, rules: &OutsideUsaSurcharge) -> Decimal {
    if !rules.enabled {
        return Decimal::ZERO;
    }

    if subtotal < rules.threshold_usd {
        rules.flat_fee_usd
    } else {
        subtotal * rules.percentage_rate / Decimal::from(100)
    }
}
