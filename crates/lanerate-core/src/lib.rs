//! LaneRate Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the LaneRate shipping rate pricing engine. It includes:
//!
//! - Domain models (Piece, Tariff, PricingPolicy, CostBreakdown, etc.)
//! - Collaborator traits for tariff resolution and packaging lookup
//! - Unified error handling with operator/end-user message split

pub mod error;
pub mod models;
pub mod traits;

pub use error::PricingError;

/// Result type alias using PricingError
pub type PricingResult<T> = Result<T, PricingError>;
