//! Settings sub-domains
//!
//! Each section has its own isolated state, messages, and update handlers.

pub mod personalization;

pub use personalization::PersonalizationSection;
