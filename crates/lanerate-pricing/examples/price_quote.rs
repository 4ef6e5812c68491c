//! Price a sample shipment against an in-memory tariff and print the
//! cost/sell breakdown.
//!
//! Run with: `cargo run --example price_quote`

use chrono::Utc;
use lanerate_core::models::{
    CostCalculationInput, PackagingCategory, PackagingSku, PackagingSpecs, Piece, PieceType,
    PricingPolicy, ServiceLevel, Tariff, TariffBand, TierCaps,
};
use lanerate_pricing::memory::{
    InMemoryPackagingCatalog, InMemoryTariffResolver, StaticPolicySource,
};
use lanerate_pricing::QuoteService;
use rust_decimal_macros::dec;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let tariff = Tariff {
        id: uuid::Uuid::new_v4(),
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
        effective_start: Utc::now() - chrono::Duration::days(30),
        effective_end: None,
    };

    let catalog = InMemoryPackagingCatalog::new(vec![PackagingSku {
        id: "BOX-M".to_string(),
        name: "Medium box".to_string(),
        category: PackagingCategory::Box,
        cost_usd: dec!(6.25),
        specifications: PackagingSpecs {
            max_weight_kg: dec!(25),
        },
    }]);

    let service = QuoteService::new(
        Arc::new(InMemoryTariffResolver::new(vec![tariff])?),
        Arc::new(catalog),
        Arc::new(StaticPolicySource::new(PricingPolicy::baseline())),
    );

    let input = CostCalculationInput {
        pieces: vec![
            Piece {
                weight_kg: dec!(14),
                dimensions: None,
                piece_type: PieceType::Box,
            },
            Piece {
                weight_kg: dec!(14),
                dimensions: None,
                piece_type: PieceType::Box,
            },
        ],
        origin: "JFK".to_string(),
        destination: "KIN".to_string(),
        service_level: ServiceLevel::JetPak,
        packaging: Some(vec!["BOX-M".to_string()]),
        storage_days: None,
    };

    let sell = service.quote(&input, true).await?;

    println!("chargeable weight: {} kg", sell.cost.chargeable_weight_kg);
    println!("cost subtotal:     ${}", sell.cost.subtotal);
    println!("sell subtotal:     ${}", sell.sell.total());
    println!("surcharge:         ${}", sell.surcharge);
    println!("total:             ${}", sell.total);
    println!(
        "margin:            ${} ({}%)",
        sell.margin, sell.margin_percentage
    );

    Ok(())
}
