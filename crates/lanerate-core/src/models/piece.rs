//! Piece model
//!
//! Represents one physical item in a shipment. Chargeable weight follows
//! air-freight practice: the greater of actual and dimensional weight.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Standard air-freight volumetric divisor (cm^3 per kg)
const VOLUMETRIC_DIVISOR: i64 = 6000;

/// Piece type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    /// Shipping barrel
    Barrel,
    /// Cardboard box or crate
    #[default]
    Box,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Barrel => write!(f, "barrel"),
            PieceType::Box => write!(f, "box"),
        }
    }
}

/// Physical dimensions of a piece in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Dimensions {
    #[validate(custom(function = "validate_positive"))]
    pub length_cm: Decimal,

    #[validate(custom(function = "validate_positive"))]
    pub width_cm: Decimal,

    #[validate(custom(function = "validate_positive"))]
    pub height_cm: Decimal,
}

impl Dimensions {
    pub fn new(length_cm: Decimal, width_cm: Decimal, height_cm: Decimal) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
        }
    }

    /// Sum of the three dimensions, used for linear-size eligibility caps
    #[inline]
    pub fn linear_cm(&self) -> Decimal {
        self.length_cm + self.width_cm + self.height_cm
    }

    /// Volume in cubic centimeters
    #[inline]
    pub fn volume_cm3(&self) -> Decimal {
        self.length_cm * self.width_cm * self.height_cm
    }
}

/// One physical item to ship
///
/// Immutable input value: pieces are never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Piece {
    /// Actual weight in kilograms
    #[validate(custom(function = "validate_positive"))]
    pub weight_kg: Decimal,

    /// Physical dimensions, if measured
    #[validate(nested)]
    pub dimensions: Option<Dimensions>,

    /// Piece type
    #[serde(default)]
    pub piece_type: PieceType,
}

impl Piece {
    /// Dimensional (volumetric) weight in kilograms
    ///
    /// `(L x W x H in cm) / 6000`. Pieces without dimensions have no
    /// dimensional weight.
    pub fn dimensional_weight_kg(&self) -> Option<Decimal> {
        self.dimensions
            .map(|d| d.volume_cm3() / Decimal::from(VOLUMETRIC_DIVISOR))
    }

    /// Chargeable weight in kilograms
    ///
    /// Carriers bill by whichever is larger: physical heft or space
    /// consumed. Pieces without dimensions use actual weight only.
    pub fn chargeable_weight_kg(&self) -> Decimal {
        match self.dimensional_weight_kg() {
            Some(dim) => self.weight_kg.max(dim),
            None => self.weight_kg,
        }
    }
}

fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("must_be_positive"));
    }
    Ok(())
}
