//! Config-backed policy loading
//!
//! Builds a `PricingPolicy` by layering the baseline defaults, an optional
//! config file, and `LANERATE__`-prefixed environment variables. Structural
//! validation (markup >= 1.0, non-negative floors) happens here, at load
//! time; the engine itself assumes a valid policy and never re-checks.

use async_trait::async_trait;
use config::{Config, Environment, File};
use lanerate_core::models::PricingPolicy;
use lanerate_core::traits::PolicySource;
use lanerate_core::PricingResult;
use tracing::debug;

/// Policy source that loads once at construction and pins the result
#[derive(Debug)]
pub struct ConfigPolicySource {
    policy: PricingPolicy,
}

impl ConfigPolicySource {
    /// Load from `config/pricing.*` (if present) and the environment,
    /// on top of the baseline policy
    pub fn load() -> PricingResult<Self> {
        Self::build(File::with_name("config/pricing").required(false))
    }

    /// Load from a specific config file on top of the baseline policy
    pub fn from_file(path: &str) -> PricingResult<Self> {
        Self::build(File::with_name(path).required(true))
    }

    fn build(file: File<config::FileSourceFile, config::FileFormat>) -> PricingResult<Self> {
        let defaults = Config::try_from(&PricingPolicy::baseline())?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(file)
            // e.g. LANERATE__COMPONENTS__FREIGHT__MARKUP=2.0
            .add_source(
                Environment::with_prefix("LANERATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let policy: PricingPolicy = config.try_deserialize()?;
        policy.validate_structure()?;

        debug!(version = %policy.version, "pricing policy loaded");
        Ok(Self { policy })
    }

    /// The pinned policy
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }
}

#[async_trait]
impl PolicySource for ConfigPolicySource {
    async fn current(&self) -> PricingResult<PricingPolicy> {
        Ok(self.policy.clone())
    }
}
