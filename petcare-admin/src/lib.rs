//! Pet-care business admin library
//!
//! Client-side pieces of the admin console: the authenticated API client,
//! the branding preference gateway and the settings sections built on it.
//! The `petcare-admin` binary in `src/main.rs` is a thin driver over these.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
