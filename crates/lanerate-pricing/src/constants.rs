//! Pricing constants

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Days of storage included free of charge
pub const STORAGE_FREE_DAYS: u32 = 7;

/// Storage rate per day per piece beyond the free window
pub const STORAGE_RATE_PER_PIECE_DAY: Decimal = dec!(2.50);

/// Component sell prices round to this increment (whole dollars)
pub const COMPONENT_ROUND_INCREMENT: Decimal = dec!(1);
