//! Cost calculation input
//!
//! The caller-facing request shape for one pricing run. Origin and
//! destination are used to resolve the tariff externally; the calculator
//! itself takes a pre-resolved tariff.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::piece::Piece;
use super::tariff::ServiceLevel;

/// Input for one cost calculation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CostCalculationInput {
    /// Pieces to ship (at least one)
    #[validate(length(min = 1, message = "at least one piece is required"), nested)]
    pub pieces: Vec<Piece>,

    /// Origin location code
    #[validate(length(min = 1, message = "origin is required"))]
    pub origin: String,

    /// Destination location code
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,

    /// Product tier to quote under
    pub service_level: ServiceLevel,

    /// Selected packaging SKU IDs, if any
    #[serde(default)]
    pub packaging: Option<Vec<String>>,

    /// Days the shipment will sit in storage before uplift
    #[serde(default)]
    pub storage_days: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn one_piece() -> Piece {
        Piece {
            weight_kg: dec!(5),
            dimensions: None,
            piece_type: Default::default(),
        }
    }

    #[test]
    fn test_valid_input() {
        let input = CostCalculationInput {
            pieces: vec![one_piece()],
            origin: "JFK".to_string(),
            destination: "KIN".to_string(),
            service_level: ServiceLevel::JetPak,
            packaging: None,
            storage_days: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_pieces_rejected() {
        let input = CostCalculationInput {
            pieces: vec![],
            origin: "JFK".to_string(),
            destination: "KIN".to_string(),
            service_level: ServiceLevel::JetPak,
            packaging: None,
            storage_days: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_nested_piece_validation() {
        let input = CostCalculationInput {
            pieces: vec![Piece {
                weight_kg: dec!(-2),
                dimensions: None,
                piece_type: Default::default(),
            }],
            origin: "JFK".to_string(),
            destination: "KIN".to_string(),
            service_level: ServiceLevel::JetPak,
            packaging: None,
            storage_days: None,
        };
        assert!(input.validate().is_err());
    }
}
