//! Unified error handling for LaneRate
//!
//! This module provides a single error type covering every failure mode of
//! the pricing engine. Callers branch on the variant, never on message text.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main pricing error type
///
/// All errors raised by the engine or its collaborators are converted to
/// this type. Eligibility variants carry the measured value and the limit
/// so callers can show the shipper exactly what to change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    // ==================== Eligibility Errors ====================
    #[error(
        "piece weight {weight_kg} kg exceeds the {limit_kg} kg per-piece limit for {service_level}"
    )]
    PieceOverweight {
        service_level: String,
        weight_kg: Decimal,
        limit_kg: Decimal,
    },

    #[error(
        "piece dimensions total {total_cm} cm exceeds the {limit_cm} cm limit for {service_level}"
    )]
    PieceOversized {
        service_level: String,
        total_cm: Decimal,
        limit_cm: Decimal,
    },

    // ==================== Tariff Errors ====================
    #[error("no tariff band covers chargeable weight {chargeable_kg} kg")]
    NoTariffBand { chargeable_kg: Decimal },

    #[error("no tariff found for route {origin} -> {destination} ({service_level})")]
    NoTariffFound {
        origin: String,
        destination: String,
        service_level: String,
    },

    #[error("tariff {version} is not effective for this request")]
    TariffInactive { version: String },

    // ==================== Policy Errors ====================
    #[error("invalid pricing policy: {0}")]
    InvalidPolicy(String),

    // ==================== Validation Errors ====================
    #[error("validation error: {0}")]
    Validation(String),

    // ==================== Internal Errors ====================
    #[error("configuration error: {0}")]
    Config(String),
}

impl PricingError {
    /// Returns the error code for API responses and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            PricingError::PieceOverweight { .. } => "piece_overweight",
            PricingError::PieceOversized { .. } => "piece_oversized",
            PricingError::NoTariffBand { .. } => "no_tariff_band",
            PricingError::NoTariffFound { .. } => "no_tariff_found",
            PricingError::TariffInactive { .. } => "tariff_inactive",
            PricingError::InvalidPolicy(_) => "invalid_policy",
            PricingError::Validation(_) => "validation_error",
            PricingError::Config(_) => "config_error",
        }
    }

    /// Whether the shipper can act on this error themselves
    ///
    /// Eligibility and validation failures are fixable by changing the
    /// shipment (split pieces, pick another service level). Tariff and
    /// policy problems are operator-side data issues.
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            PricingError::PieceOverweight { .. }
                | PricingError::PieceOversized { .. }
                | PricingError::Validation(_)
        )
    }

    /// End-user-safe message
    ///
    /// Eligibility errors are surfaced verbatim (the limit and measured
    /// value are exactly what the shipper needs). Data and configuration
    /// problems collapse to a generic message; the full detail stays in
    /// the operator logs via `Display`.
    pub fn user_message(&self) -> String {
        if self.is_user_actionable() {
            self.to_string()
        } else {
            "pricing is unavailable for this route".to_string()
        }
    }
}

// ==================== From implementations ====================

impl From<validator::ValidationErrors> for PricingError {
    fn from(err: validator::ValidationErrors) -> Self {
        PricingError::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for PricingError {
    fn from(err: config::ConfigError) -> Self {
        PricingError::Config(err.to_string())
    }
}
