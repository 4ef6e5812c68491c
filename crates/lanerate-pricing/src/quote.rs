//! Quote service
//!
//! Composes the two calculation stages behind injected collaborators:
//! resolve the tariff, pin the policy, run the pure cost and markup
//! functions. Holds no cross-request state; concurrent callers need no
//! coordination.

use lanerate_core::models::{CostBreakdown, CostCalculationInput, SellBreakdown};
use lanerate_core::traits::{PackagingCatalog, PolicySource, TariffResolver};
use lanerate_core::{PricingError, PricingResult};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::cost::calculate_cost;
use crate::markup::apply_markup;

/// Pricing entry point for quote requests
pub struct QuoteService<R, C, P>
where
    R: TariffResolver,
    C: PackagingCatalog,
    P: PolicySource,
{
    resolver: Arc<R>,
    catalog: Arc<C>,
    policy_source: Arc<P>,
}

impl<R, C, P> QuoteService<R, C, P>
where
    R: TariffResolver,
    C: PackagingCatalog,
    P: PolicySource,
{
    /// Create a new quote service
    pub fn new(resolver: Arc<R>, catalog: Arc<C>, policy_source: Arc<P>) -> Self {
        Self {
            resolver,
            catalog,
            policy_source,
        }
    }

    /// Price a shipment end to end
    ///
    /// Any error means "no price available": no partial breakdown is ever
    /// returned, and retrying with the same inputs cannot succeed.
    #[instrument(skip(self, input), fields(
        origin = %input.origin,
        destination = %input.destination,
        service_level = %input.service_level,
    ))]
    pub async fn quote(
        &self,
        input: &CostCalculationInput,
        paid_outside_usa: bool,
    ) -> PricingResult<SellBreakdown> {
        let tariff = self.resolve_tariff(input).await?;
        let policy = self.policy_source.current().await?;

        let cost = calculate_cost(input, &tariff, self.catalog.as_ref())?;
        let sell = apply_markup(&cost, paid_outside_usa, &policy);

        debug!(
            cost_subtotal = %cost.subtotal,
            total = %sell.total,
            margin = %sell.margin,
            "quote priced"
        );
        Ok(sell)
    }

    /// Cost-only calculation, for callers that apply markup separately
    pub async fn estimate_cost(
        &self,
        input: &CostCalculationInput,
    ) -> PricingResult<CostBreakdown> {
        let tariff = self.resolve_tariff(input).await?;
        calculate_cost(input, &tariff, self.catalog.as_ref())
    }

    async fn resolve_tariff(
        &self,
        input: &CostCalculationInput,
    ) -> PricingResult<lanerate_core::models::Tariff> {
        let tariff = self
            .resolver
            .resolve(&input.origin, &input.destination, input.service_level)
            .await?;

        if !tariff.is_effective() {
            error!(version = %tariff.version, "resolver returned an inactive tariff");
            return Err(PricingError::TariffInactive {
                version: tariff.version,
            });
        }

        Ok(tariff)
    }
}
