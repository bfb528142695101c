//! Error types for the branding services
//!
//! One variant per remote call kind so the settings screen can raise a
//! distinct notice for each failure.

use petcare_model::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandingError {
    /// Reading the branding preference failed
    #[error("Failed to load branding preference: {0}")]
    RemoteFetch(String),

    /// Writing the branding preference failed
    #[error("Failed to update branding preference: {0}")]
    RemoteUpdate(String),

    /// Persisting the personalization record failed
    #[error("Failed to save personalization: {0}")]
    SecondaryWrite(String),

    /// The document does not have the expected shape
    #[error("Unexpected branding preference shape: {0}")]
    Contract(#[from] ModelError),
}

impl BrandingError {
    /// Short heading for a user-facing notice.
    pub fn title(&self) -> &'static str {
        match self {
            Self::RemoteFetch(_) => "Could not load branding",
            Self::RemoteUpdate(_) => "Branding update failed",
            Self::SecondaryWrite(_) => "Personalization not saved",
            Self::Contract(_) => "Invalid branding preference",
        }
    }
}

pub type BrandingResult<T> = Result<T, BrandingError>;
