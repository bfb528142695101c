//! Infrastructure: HTTP transport, remote services, theme state and config.

pub mod api_client;
pub mod config;
pub mod errors;
pub mod services;
pub mod theme;
