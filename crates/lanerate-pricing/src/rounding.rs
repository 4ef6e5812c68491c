//! Sell-price rounding
//!
//! All rounding in the markup stage funnels through one helper so every
//! component and the global total agree on semantics. `Nearest` rounds
//! midpoints away from zero, not banker's rounding.

use lanerate_core::models::RoundRule;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to the nearest `increment` per `rule`
///
/// The increment must be positive; policy load validation guarantees it.
pub fn round_to_increment(value: Decimal, rule: RoundRule, increment: Decimal) -> Decimal {
    let quotient = value / increment;
    let rounded = match rule {
        RoundRule::Up => quotient.ceil(),
        RoundRule::Down => quotient.floor(),
        RoundRule::Nearest => {
            quotient.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
    };
    rounded * increment
}
