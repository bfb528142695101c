//! Personalization section messages

use petcare_model::BrandingPreference;

use super::pipeline::SubmitReport;
use crate::infra::errors::BrandingError;

/// Messages for the personalization settings section
#[derive(Debug, Clone)]
pub enum PersonalizationMessage {
    /// Fetch the branding document (section mounted or session changed)
    Load,
    /// Fetch result, tagged with the session generation that issued it
    Loaded {
        generation: u64,
        result: Result<BrandingPreference, BrandingError>,
    },

    // Form inputs
    LogoUrlChanged(String),
    LogoAltTextChanged(String),
    FaviconUrlChanged(String),
    PrimaryColorChanged(String),

    Submit,
    SubmitFinished {
        generation: u64,
        report: Box<SubmitReport>,
    },

    DismissToast(u64),
}

impl PersonalizationMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "Personalization::Load",
            Self::Loaded { .. } => "Personalization::Loaded",
            Self::LogoUrlChanged(_) => "Personalization::LogoUrlChanged",
            Self::LogoAltTextChanged(_) => "Personalization::LogoAltTextChanged",
            Self::FaviconUrlChanged(_) => "Personalization::FaviconUrlChanged",
            Self::PrimaryColorChanged(_) => {
                "Personalization::PrimaryColorChanged"
            }
            Self::Submit => "Personalization::Submit",
            Self::SubmitFinished { .. } => "Personalization::SubmitFinished",
            Self::DismissToast(_) => "Personalization::DismissToast",
        }
    }
}
