//! Service abstractions over the remote APIs
//!
//! Domains hold `Arc<dyn Trait>` handles so tests can substitute mocks.

pub mod branding;
pub mod personalization;

pub use branding::{BrandingApiAdapter, BrandingService};
pub use personalization::{PersonalizationApiAdapter, PersonalizationService};
