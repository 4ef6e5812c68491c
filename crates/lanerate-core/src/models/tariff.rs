//! Tariff model
//!
//! A carrier's rate card for one origin-destination lane and one product
//! tier. Freight pricing is banded (tiered), not linear: the matched band's
//! flat rate covers the whole shipment.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::PricingError;

/// Product tier / service level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceLevel {
    /// Compact air-parcel product with tight weight/size acceptance limits
    #[default]
    JetPak,
    /// General air cargo
    AirCargo,
    /// Ocean freight
    Ocean,
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceLevel::JetPak => write!(f, "JetPak"),
            ServiceLevel::AirCargo => write!(f, "AirCargo"),
            ServiceLevel::Ocean => write!(f, "Ocean"),
        }
    }
}

impl ServiceLevel {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "JETPAK" => Some(ServiceLevel::JetPak),
            "AIRCARGO" | "AIR" => Some(ServiceLevel::AirCargo),
            "OCEAN" | "SEA" => Some(ServiceLevel::Ocean),
            _ => None,
        }
    }
}

/// One weight band of a tariff
///
/// The inclusive `[min_weight_kg, max_weight_kg]` range maps to a flat
/// rate for the entire shipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffBand {
    pub min_weight_kg: Decimal,
    pub max_weight_kg: Decimal,
    pub rate_usd: Decimal,
}

impl TariffBand {
    /// Whether a chargeable weight falls inside this band (inclusive)
    #[inline]
    pub fn contains(&self, weight_kg: Decimal) -> bool {
        weight_kg >= self.min_weight_kg && weight_kg <= self.max_weight_kg
    }
}

/// Hard acceptance limits for a product tier
///
/// A piece beyond either cap cannot be quoted under this tariff at all;
/// the engine never silently reclassifies to another tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCaps {
    /// Per-piece weight ceiling
    pub max_piece_weight_kg: Decimal,

    /// Per-piece ceiling on the sum of the three dimensions
    pub max_linear_cm: Decimal,
}

/// Tariff entity
///
/// Externally sourced and versioned; the engine treats one resolved tariff
/// as an immutable snapshot for the duration of a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tariff {
    /// Unique identifier
    pub id: Uuid,

    /// Origin location code
    pub origin: String,

    /// Destination location code
    pub destination: String,

    /// Product tier this rate card belongs to
    pub service_level: ServiceLevel,

    /// Weight bands, contiguous and ascending by weight
    pub bands: Vec<TariffBand>,

    /// Per-kg rate for weight beyond the last band's ceiling
    ///
    /// `None` means the tariff defines no overweight headroom: weight past
    /// the top band is a band-lookup failure, not billable excess.
    pub overweight_rate_per_kg: Option<Decimal>,

    /// Hard acceptance limits for this tier
    pub caps: TierCaps,

    /// Tariff version label
    pub version: String,

    /// When this tariff becomes effective
    pub effective_start: DateTime<Utc>,

    /// When this tariff expires (None = no expiry)
    pub effective_end: Option<DateTime<Utc>>,
}

impl Tariff {
    /// Find the band containing a chargeable weight
    ///
    /// Bands are checked in ascending order; the first inclusive match wins.
    pub fn band_for(&self, weight_kg: Decimal) -> Option<&TariffBand> {
        self.bands.iter().find(|b| b.contains(weight_kg))
    }

    /// Topmost band (highest weight range)
    pub fn top_band(&self) -> Option<&TariffBand> {
        self.bands.last()
    }

    /// Check if the tariff is currently effective
    pub fn is_effective(&self) -> bool {
        let now = Utc::now();
        now >= self.effective_start && self.effective_end.map_or(true, |end| now < end)
    }

    /// Validate band structure: non-empty, ascending, non-overlapping
    ///
    /// Resolver implementations should run this at load time so a
    /// malformed rate card is caught before any quote touches it.
    pub fn validate_bands(&self) -> Result<(), PricingError> {
        if self.bands.is_empty() {
            return Err(PricingError::Validation(format!(
                "tariff {} has no weight bands",
                self.version
            )));
        }

        for band in &self.bands {
            if band.min_weight_kg > band.max_weight_kg {
                return Err(PricingError::Validation(format!(
                    "tariff {} band [{}, {}] is inverted",
                    self.version, band.min_weight_kg, band.max_weight_kg
                )));
            }
        }

        for pair in self.bands.windows(2) {
            if pair[1].min_weight_kg <= pair[0].max_weight_kg {
                return Err(PricingError::Validation(format!(
                    "tariff {} bands overlap or are out of order at {} kg",
                    self.version, pair[1].min_weight_kg
                )));
            }
        }

        Ok(())
    }
}
