//! Personalization settings sub-domain
//!
//! Edits the organization's branding: logo, logo alt text, favicon and
//! primary color of the active theme.

pub mod fields;
pub mod messages;
pub mod pipeline;
pub mod state;
pub mod update;

pub use fields::{FIELDS, FieldError, FormField, InputKind};
pub use messages::PersonalizationMessage;
pub use pipeline::{SubmitPipeline, SubmitReport, SubmitStage};
pub use state::{FormPhase, PersonalizationState, Toast, ToastLevel};

use crate::common::DomainUpdateResult;
use crate::domains::settings::SettingsDomain;

/// Personalization section marker for type-safe section identification
#[derive(Debug)]
pub struct PersonalizationSection;

/// Update personalization settings state
pub fn update(
    settings: &mut SettingsDomain,
    message: PersonalizationMessage,
) -> DomainUpdateResult<PersonalizationMessage> {
    update::handle_message(settings, message)
}

/// Reset the section for a replaced session and reload its document
pub fn session_changed(
    settings: &mut SettingsDomain,
) -> DomainUpdateResult<PersonalizationMessage> {
    update::session_changed(settings)
}
