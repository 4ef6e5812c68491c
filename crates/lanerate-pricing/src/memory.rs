//! In-memory collaborator implementations
//!
//! Map-backed tariff resolution and packaging lookup, for tests,
//! bootstrapping, and callers that preload their data. Storage-backed
//! implementations live with the persistence layer.

use async_trait::async_trait;
use lanerate_core::models::{PackagingSku, PricingPolicy, ServiceLevel, Tariff};
use lanerate_core::traits::{PackagingCatalog, PolicySource, TariffResolver};
use lanerate_core::{PricingError, PricingResult};
use std::collections::HashMap;
use tracing::warn;

/// Tariff resolver over a preloaded list
pub struct InMemoryTariffResolver {
    tariffs: Vec<Tariff>,
}

impl InMemoryTariffResolver {
    /// Build a resolver, validating every tariff's band structure up front
    pub fn new(tariffs: Vec<Tariff>) -> PricingResult<Self> {
        for tariff in &tariffs {
            tariff.validate_bands()?;
        }
        Ok(Self { tariffs })
    }
}

#[async_trait]
impl TariffResolver for InMemoryTariffResolver {
    async fn resolve(
        &self,
        origin: &str,
        destination: &str,
        service_level: ServiceLevel,
    ) -> PricingResult<Tariff> {
        let found = self.tariffs.iter().find(|t| {
            t.origin == origin
                && t.destination == destination
                && t.service_level == service_level
                && t.is_effective()
        });

        match found {
            Some(tariff) => Ok(tariff.clone()),
            None => {
                warn!(origin, destination, %service_level, "no tariff for route");
                Err(PricingError::NoTariffFound {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    service_level: service_level.to_string(),
                })
            }
        }
    }
}

/// Packaging catalog over a preloaded SKU map
pub struct InMemoryPackagingCatalog {
    skus: HashMap<String, PackagingSku>,
}

impl InMemoryPackagingCatalog {
    pub fn new(skus: Vec<PackagingSku>) -> Self {
        Self {
            skus: skus.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }
}

impl PackagingCatalog for InMemoryPackagingCatalog {
    fn find_sku(&self, sku_id: &str) -> Option<PackagingSku> {
        self.skus.get(sku_id).cloned()
    }
}

/// Policy source that always returns one pinned policy
pub struct StaticPolicySource {
    policy: PricingPolicy,
}

impl StaticPolicySource {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl PolicySource for StaticPolicySource {
    async fn current(&self) -> PricingResult<PricingPolicy> {
        Ok(self.policy.clone())
    }
}
