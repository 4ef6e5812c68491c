//! Collaborator traits for the pricing engine
//!
//! The engine has zero knowledge of how tariffs, packaging catalogs, or
//! policies are stored. Callers inject implementations of these traits;
//! storage-backed ones are expected, in-memory ones ship with the pricing
//! crate for tests and bootstrapping.

use async_trait::async_trait;

use crate::error::PricingError;
use crate::models::{PackagingSku, PricingPolicy, ServiceLevel, Tariff};

/// Resolves the active tariff for a lane and product tier
///
/// Must return an active, versioned tariff or signal "no route" via
/// `PricingError::NoTariffFound`. The engine surfaces that as a terminal
/// error; it is never retried with the same inputs.
#[async_trait]
pub trait TariffResolver: Send + Sync {
    async fn resolve(
        &self,
        origin: &str,
        destination: &str,
        service_level: ServiceLevel,
    ) -> Result<Tariff, PricingError>;
}

/// Looks up packaging SKUs by catalog ID
///
/// Synchronous because the cost calculator is a pure function; callers
/// backed by remote catalogs should prefetch into a map first.
pub trait PackagingCatalog: Send + Sync {
    /// Find a SKU by ID; `None` when the ID does not resolve
    fn find_sku(&self, sku_id: &str) -> Option<PackagingSku>;
}

/// Supplies the pricing policy to pin for a calculation
///
/// The engine accepts one pinned policy per call; it does not poll or
/// subscribe to policy changes.
#[async_trait]
pub trait PolicySource: Send + Sync {
    async fn current(&self) -> Result<PricingPolicy, PricingError>;
}
