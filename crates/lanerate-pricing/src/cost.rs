//! Cost calculation stage
//!
//! Converts shipment pieces plus a resolved tariff into a `CostBreakdown`:
//! chargeable weight (volumetric vs actual), weight-band rate, overweight
//! surcharge, packaging and storage costs. Pure function of its inputs; no
//! side effects beyond logging.

use lanerate_core::models::{
    CalculationDetails, ComponentAmounts, CostBreakdown, CostCalculationInput, PackagingSku,
    Tariff, TariffBand,
};
use lanerate_core::traits::PackagingCatalog;
use lanerate_core::{PricingError, PricingResult};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use validator::Validate;

use crate::constants::{STORAGE_FREE_DAYS, STORAGE_RATE_PER_PIECE_DAY};

/// Cubic centimeters per cubic meter
const CM3_PER_M3: i64 = 1_000_000;

/// Calculate the internal cost of a shipment against one resolved tariff
///
/// Fails fast on eligibility before any cost math: a shipment too big or
/// heavy for the product tier must be quoted under a different tariff
/// entirely, never silently reclassified.
pub fn calculate_cost(
    input: &CostCalculationInput,
    tariff: &Tariff,
    catalog: &dyn PackagingCatalog,
) -> PricingResult<CostBreakdown> {
    input.validate()?;
    check_eligibility(input, tariff)?;

    let total_weight_kg: Decimal = input.pieces.iter().map(|p| p.weight_kg).sum();
    let total_volume_m3: Decimal = input
        .pieces
        .iter()
        .filter_map(|p| p.dimensions)
        .map(|d| d.volume_cm3())
        .sum::<Decimal>()
        / Decimal::from(CM3_PER_M3);
    let chargeable_weight_kg: Decimal = input
        .pieces
        .iter()
        .map(|p| p.chargeable_weight_kg())
        .sum();

    let (applied_band, overweight_kg) = select_band(tariff, chargeable_weight_kg)?;
    let freight = applied_band.rate_usd;
    let overweight = match tariff.overweight_rate_per_kg {
        Some(rate) if overweight_kg > Decimal::ZERO => overweight_kg * rate,
        _ => Decimal::ZERO,
    };

    let (packaging, packaging_skus) = packaging_cost(input, catalog);
    let storage = storage_cost(input.storage_days, input.pieces.len());

    let costs = ComponentAmounts {
        freight,
        overweight,
        packaging,
        storage,
        // reserved for future ground-leg pricing
        pickup: Decimal::ZERO,
        delivery: Decimal::ZERO,
    };
    let subtotal = costs.total();

    debug!(
        chargeable_kg = %chargeable_weight_kg,
        freight = %freight,
        overweight = %overweight,
        subtotal = %subtotal,
        "cost calculated"
    );

    Ok(CostBreakdown {
        costs,
        subtotal,
        chargeable_weight_kg,
        calculations: CalculationDetails {
            total_weight_kg,
            total_volume_m3,
            is_overweight: overweight_kg > Decimal::ZERO,
            overweight_kg,
            applied_band: *applied_band,
            packaging_skus,
        },
    })
}

/// Enforce the product tier's hard acceptance limits
///
/// Exactly at a cap passes; strictly beyond it fails. Checks actual piece
/// weight, not chargeable weight: acceptance is about what the carrier
/// will physically take.
fn check_eligibility(input: &CostCalculationInput, tariff: &Tariff) -> PricingResult<()> {
    let caps = &tariff.caps;

    for piece in &input.pieces {
        if piece.weight_kg > caps.max_piece_weight_kg {
            return Err(PricingError::PieceOverweight {
                service_level: tariff.service_level.to_string(),
                weight_kg: piece.weight_kg,
                limit_kg: caps.max_piece_weight_kg,
            });
        }

        if let Some(dims) = piece.dimensions {
            let total_cm = dims.linear_cm();
            if total_cm > caps.max_linear_cm {
                return Err(PricingError::PieceOversized {
                    service_level: tariff.service_level.to_string(),
                    total_cm,
                    limit_cm: caps.max_linear_cm,
                });
            }
        }
    }

    Ok(())
}

/// Match the chargeable weight to a tariff band
///
/// Weight beyond the top band still prices against the top band, with the
/// excess returned for overweight billing — unless the tariff defines no
/// overweight rate, in which case there is nowhere to put the excess and
/// the lookup fails.
fn select_band(
    tariff: &Tariff,
    chargeable_kg: Decimal,
) -> PricingResult<(&TariffBand, Decimal)> {
    if let Some(band) = tariff.band_for(chargeable_kg) {
        return Ok((band, Decimal::ZERO));
    }

    if let Some(top) = tariff.top_band() {
        if chargeable_kg > top.max_weight_kg && tariff.overweight_rate_per_kg.is_some() {
            return Ok((top, chargeable_kg - top.max_weight_kg));
        }
    }

    Err(PricingError::NoTariffBand {
        chargeable_kg,
    })
}

/// Sum the cost of every packaging SKU that resolves from the catalog
///
/// Unresolvable SKU IDs are skipped, not surfaced: packaging selection
/// robustness is a product choice.
fn packaging_cost(
    input: &CostCalculationInput,
    catalog: &dyn PackagingCatalog,
) -> (Decimal, Vec<PackagingSku>) {
    let mut cost = Decimal::ZERO;
    let mut resolved = Vec::new();

    if let Some(sku_ids) = &input.packaging {
        for sku_id in sku_ids {
            match catalog.find_sku(sku_id) {
                Some(sku) => {
                    cost += sku.cost_usd;
                    resolved.push(sku);
                }
                None => {
                    warn!(sku_id = %sku_id, "packaging SKU not found, skipping");
                }
            }
        }
    }

    (cost, resolved)
}

/// Storage cost: first `STORAGE_FREE_DAYS` days free, then a flat daily
/// rate per piece
fn storage_cost(storage_days: Option<u32>, piece_count: usize) -> Decimal {
    match storage_days {
        Some(days) if days > STORAGE_FREE_DAYS => {
            Decimal::from(days - STORAGE_FREE_DAYS)
                * STORAGE_RATE_PER_PIECE_DAY
                * Decimal::from(piece_count as u64)
        }
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lanerate_core::models::{
        Dimensions, PackagingCategory, PackagingSku, PackagingSpecs, Piece, PieceType,
        ServiceLevel, TierCaps,
    };
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use uuid::Uuid;

    struct MapCatalog(HashMap<String, PackagingSku>);

    impl PackagingCatalog for MapCatalog {
        fn find_sku(&self, sku_id: &str) -> Option<PackagingSku> {
            self.0.get(sku_id).cloned()
        }
    }

    fn empty_catalog() -> MapCatalog {
        MapCatalog(HashMap::new())
    }

    fn jetpak_tariff() -> Tariff {
        Tariff {
            id: Uuid::new_v4(),
            origin: "JFK".to_string(),
            destination: "KIN".to_string(),
            service_level: ServiceLevel::JetPak,
            bands: vec![
                TariffBand {
                    min_weight_kg: dec!(0),
                    max_weight_kg: dec!(10),
                    rate_usd: dec!(27.34),
                },
                TariffBand {
                    min_weight_kg: dec!(10.01),
                    max_weight_kg: dec!(20),
                    rate_usd: dec!(66.15),
                },
                TariffBand {
                    min_weight_kg: dec!(20.01),
                    max_weight_kg: dec!(30),
                    rate_usd: dec!(120.28),
                },
            ],
            overweight_rate_per_kg: Some(dec!(4.74)),
            caps: TierCaps {
                max_piece_weight_kg: dec!(23),
                max_linear_cm: dec!(157),
            },
            version: "2024-Q3".to_string(),
            effective_start: Utc::now() - chrono::Duration::days(1),
            effective_end: None,
        }
    }

    fn piece(weight: Decimal) -> Piece {
        Piece {
            weight_kg: weight,
            dimensions: None,
            piece_type: PieceType::Box,
        }
    }

    fn input_with_pieces(pieces: Vec<Piece>) -> CostCalculationInput {
        CostCalculationInput {
            pieces,
            origin: "JFK".to_string(),
            destination: "KIN".to_string(),
            service_level: ServiceLevel::JetPak,
            packaging: None,
            storage_days: None,
        }
    }

    #[test]
    fn test_band_rate_is_flat_for_shipment() {
        let input = input_with_pieces(vec![piece(dec!(14)), piece(dec!(14))]);
        let cost = calculate_cost(&input, &jetpak_tariff(), &empty_catalog()).unwrap();

        assert_eq!(cost.chargeable_weight_kg, dec!(28));
        assert_eq!(cost.costs.freight, dec!(120.28));
        assert_eq!(cost.costs.overweight, dec!(0));
        assert_eq!(cost.subtotal, dec!(120.28));
        assert!(!cost.calculations.is_overweight);
    }

    #[test]
    fn test_band_independent_of_piece_split() {
        let single = input_with_pieces(vec![piece(dec!(18))]);
        let split = input_with_pieces(vec![piece(dec!(9)), piece(dec!(9))]);

        let tariff = jetpak_tariff();
        let a = calculate_cost(&single, &tariff, &empty_catalog()).unwrap();
        let b = calculate_cost(&split, &tariff, &empty_catalog()).unwrap();

        assert_eq!(a.costs.freight, b.costs.freight);
        assert_eq!(a.costs.freight, dec!(66.15));
    }

    #[test]
    fn test_dimensional_weight_dominates() {
        let input = input_with_pieces(vec![Piece {
            weight_kg: dec!(1),
            dimensions: Some(Dimensions::new(dec!(50), dec!(50), dec!(50))),
            piece_type: PieceType::Box,
        }]);
        let cost = calculate_cost(&input, &jetpak_tariff(), &empty_catalog()).unwrap();

        // 125000 / 6000 = 20.83... kg chargeable, lands in the 20.01-30 band
        assert_eq!(cost.costs.freight, dec!(120.28));
        assert_eq!(cost.calculations.total_weight_kg, dec!(1));
        assert_eq!(cost.calculations.total_volume_m3, dec!(0.125));
    }

    #[test]
    fn test_overweight_linearity() {
        let input = input_with_pieces(vec![piece(dec!(17)), piece(dec!(17))]);
        let cost = calculate_cost(&input, &jetpak_tariff(), &empty_catalog()).unwrap();

        assert_eq!(cost.chargeable_weight_kg, dec!(34));
        assert_eq!(cost.costs.freight, dec!(120.28));
        assert_eq!(cost.costs.overweight, dec!(18.96));
        assert_eq!(cost.subtotal, dec!(139.24));
        assert!(cost.calculations.is_overweight);
        assert_eq!(cost.calculations.overweight_kg, dec!(4));
    }

    #[test]
    fn test_no_overweight_rate_means_no_band() {
        let mut tariff = jetpak_tariff();
        tariff.overweight_rate_per_kg = None;

        let input = input_with_pieces(vec![piece(dec!(17)), piece(dec!(17))]);
        let err = calculate_cost(&input, &tariff, &empty_catalog()).unwrap_err();
        assert_eq!(err.error_code(), "no_tariff_band");
    }

    #[test]
    fn test_band_gap_is_distinct_error() {
        let mut tariff = jetpak_tariff();
        tariff.bands.remove(1); // leaves a hole between 10 and 20.01 kg

        let input = input_with_pieces(vec![piece(dec!(15))]);
        let err = calculate_cost(&input, &tariff, &empty_catalog()).unwrap_err();
        assert_eq!(
            err,
            PricingError::NoTariffBand {
                chargeable_kg: dec!(15)
            }
        );
    }

    #[test]
    fn test_eligibility_weight_boundary() {
        let tariff = jetpak_tariff();

        // exactly at the cap passes
        let at_cap = input_with_pieces(vec![piece(dec!(23))]);
        assert!(calculate_cost(&at_cap, &tariff, &empty_catalog()).is_ok());

        // 10 grams over fails, naming the limit
        let over = input_with_pieces(vec![piece(dec!(23.01))]);
        let err = calculate_cost(&over, &tariff, &empty_catalog()).unwrap_err();
        assert_eq!(
            err,
            PricingError::PieceOverweight {
                service_level: "JetPak".to_string(),
                weight_kg: dec!(23.01),
                limit_kg: dec!(23),
            }
        );
    }

    #[test]
    fn test_eligibility_dimension_boundary() {
        let tariff = jetpak_tariff();

        let at_cap = input_with_pieces(vec![Piece {
            weight_kg: dec!(5),
            dimensions: Some(Dimensions::new(dec!(52), dec!(52), dec!(53))),
            piece_type: PieceType::Box,
        }]);
        assert!(calculate_cost(&at_cap, &tariff, &empty_catalog()).is_ok());

        let over = input_with_pieces(vec![Piece {
            weight_kg: dec!(5),
            dimensions: Some(Dimensions::new(dec!(52), dec!(52), dec!(53.01))),
            piece_type: PieceType::Box,
        }]);
        let err = calculate_cost(&over, &tariff, &empty_catalog()).unwrap_err();
        assert_eq!(err.error_code(), "piece_oversized");
        assert!(err.is_user_actionable());
    }

    #[test]
    fn test_packaging_cost_skips_unknown_skus() {
        let mut skus = HashMap::new();
        skus.insert(
            "BARREL-120".to_string(),
            PackagingSku {
                id: "BARREL-120".to_string(),
                name: "120L shipping barrel".to_string(),
                category: PackagingCategory::Barrel,
                cost_usd: dec!(42.50),
                specifications: PackagingSpecs {
                    max_weight_kg: dec!(80),
                },
            },
        );
        let catalog = MapCatalog(skus);

        let mut input = input_with_pieces(vec![piece(dec!(5))]);
        input.packaging = Some(vec![
            "BARREL-120".to_string(),
            "GHOST-SKU".to_string(),
        ]);

        let cost = calculate_cost(&input, &jetpak_tariff(), &catalog).unwrap();
        assert_eq!(cost.costs.packaging, dec!(42.50));
        assert_eq!(cost.calculations.packaging_skus.len(), 1);
        assert_eq!(cost.subtotal, dec!(27.34) + dec!(42.50));
    }

    #[test]
    fn test_storage_first_seven_days_free() {
        let tariff = jetpak_tariff();

        let mut input = input_with_pieces(vec![piece(dec!(5))]);
        input.storage_days = Some(7);
        let cost = calculate_cost(&input, &tariff, &empty_catalog()).unwrap();
        assert_eq!(cost.costs.storage, dec!(0));

        input.storage_days = Some(10);
        let cost = calculate_cost(&input, &tariff, &empty_catalog()).unwrap();
        // 3 billable days * $2.50 * 1 piece
        assert_eq!(cost.costs.storage, dec!(7.50));
    }

    #[test]
    fn test_storage_scales_with_piece_count() {
        let mut input = input_with_pieces(vec![piece(dec!(5)), piece(dec!(5)), piece(dec!(5))]);
        input.storage_days = Some(9);

        let cost = calculate_cost(&input, &jetpak_tariff(), &empty_catalog()).unwrap();
        // 2 billable days * $2.50 * 3 pieces
        assert_eq!(cost.costs.storage, dec!(15));
    }

    #[test]
    fn test_pickup_and_delivery_always_zero() {
        let input = input_with_pieces(vec![piece(dec!(5))]);
        let cost = calculate_cost(&input, &jetpak_tariff(), &empty_catalog()).unwrap();
        assert_eq!(cost.costs.pickup, dec!(0));
        assert_eq!(cost.costs.delivery, dec!(0));
    }

    #[test]
    fn test_empty_shipment_rejected() {
        let input = input_with_pieces(vec![]);
        let err = calculate_cost(&input, &jetpak_tariff(), &empty_catalog()).unwrap_err();
        assert_eq!(err.error_code(), "validation_error");
    }
}
