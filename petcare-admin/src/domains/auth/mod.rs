//! Authentication domain
//!
//! Sign-in happens at the identity provider; this crate only consumes the
//! resulting session.

pub mod session;

pub use session::Session;
