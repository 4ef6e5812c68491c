//! LaneRate Pricing Engine
//!
//! Converts a shipment's physical characteristics into a customer-facing
//! sell price while tracking carrier cost, applied markup, and margin.
//!
//! Two pure calculation stages, invoked synchronously per quote:
//!
//! - [`cost::calculate_cost`] — chargeable weight, tariff band selection,
//!   overweight, packaging, and storage costs
//! - [`markup::apply_markup`] — per-component markup/rounding/floors, the
//!   outside-USA surcharge, global minimum, and margin metrics
//!
//! [`quote::QuoteService`] composes the two behind injected collaborators
//! for callers that want a single entry point.

pub mod constants;
pub mod cost;
pub mod markup;
pub mod memory;
pub mod policy_loader;
pub mod quote;
pub mod rounding;

pub use cost::calculate_cost;
pub use markup::apply_markup;
pub use quote::QuoteService;
