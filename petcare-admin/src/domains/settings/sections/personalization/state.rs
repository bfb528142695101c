//! Personalization section state
//!
//! Holds the fetched branding document, the form's initial and current
//! values, validation results and pending notices.

use petcare_model::{BrandingPreference, BrandingValues};

use super::fields::{FieldError, validate};
use crate::infra::errors::BrandingError;

/// Lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Nothing fetched yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// A submit pipeline is in flight
    Submitting,
    /// The initial load failed; there is no document to edit
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct PersonalizationState {
    pub phase: FormPhase,
    pub document: Option<BrandingPreference>,
    pub active_theme: Option<String>,
    /// Values the form was last (re)started with
    pub initial: BrandingValues,
    /// Values currently in the inputs
    pub values: BrandingValues,
    pub errors: Vec<FieldError>,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl PersonalizationState {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the loading indicator should be shown
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Loading | FormPhase::Submitting)
    }

    pub fn is_pristine(&self) -> bool {
        self.values == self.initial
    }

    /// Submit is enabled only for a loaded, edited, valid form.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Loaded
            && self.document.is_some()
            && !self.is_pristine()
            && self.errors.is_empty()
    }

    /// Reset the form so `values` become both the initial and current values.
    pub fn restart(&mut self, values: BrandingValues) {
        self.initial = values.clone();
        self.values = values;
        self.revalidate();
    }

    pub fn revalidate(&mut self) {
        self.errors = validate(&self.values);
    }

    pub fn push_toast(
        &mut self,
        level: ToastLevel,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            level,
            title: title.into(),
            body: body.into(),
        });
        id
    }

    pub fn push_error(&mut self, error: &BrandingError) -> u64 {
        self.push_toast(ToastLevel::Error, error.title(), error.to_string())
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drop everything tied to the previous session's document.
    ///
    /// Notices are kept so earlier failures stay visible.
    pub fn forget_document(&mut self) {
        self.phase = FormPhase::Idle;
        self.document = None;
        self.active_theme = None;
        self.initial = BrandingValues::default();
        self.values = BrandingValues::default();
        self.errors.clear();
    }

    pub fn has_errors(&self) -> bool {
        self.toasts
            .iter()
            .any(|toast| toast.level == ToastLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petcare_model::BrandingField;
    use serde_json::json;

    fn loaded_state() -> PersonalizationState {
        let mut state = PersonalizationState {
            phase: FormPhase::Loaded,
            document: Some(BrandingPreference::from_value(json!({}))),
            ..Default::default()
        };
        state.restart(BrandingValues {
            logo_url: "a.png".into(),
            logo_alt_text: "Logo".into(),
            favicon_url: "f.ico".into(),
            primary_color: "#000".into(),
        });
        state
    }

    #[test]
    fn pristine_form_cannot_submit() {
        let state = loaded_state();
        assert!(state.is_pristine());
        assert!(!state.can_submit());
    }

    #[test]
    fn edited_valid_form_can_submit() {
        let mut state = loaded_state();
        state.values.set(BrandingField::PrimaryColor, "#fff".into());
        state.revalidate();
        assert!(state.can_submit());
    }

    #[test]
    fn validation_errors_block_submit() {
        let mut state = loaded_state();
        state.values.set(BrandingField::FaviconUrl, "bad icon".into());
        state.revalidate();
        assert!(!state.errors.is_empty());
        assert!(!state.can_submit());
    }

    #[test]
    fn submitting_blocks_second_submit() {
        let mut state = loaded_state();
        state.values.set(BrandingField::LogoAltText, "New".into());
        state.phase = FormPhase::Submitting;
        assert!(state.is_busy());
        assert!(!state.can_submit());
    }

    #[test]
    fn toasts_get_unique_ids_and_can_be_dismissed() {
        let mut state = PersonalizationState::default();
        let first = state.push_toast(ToastLevel::Success, "a", "b");
        let second = state.push_error(&BrandingError::RemoteFetch("down".into()));
        assert_ne!(first, second);
        assert!(state.has_errors());
        state.dismiss_toast(second);
        assert_eq!(state.toasts.len(), 1);
        assert!(!state.has_errors());
    }

    #[test]
    fn forget_document_keeps_notices() {
        let mut state = loaded_state();
        state.values.set(BrandingField::LogoUrl, "b.png".into());
        state.push_toast(ToastLevel::Error, "Branding update failed", "boom");

        state.forget_document();

        assert_eq!(state.phase, FormPhase::Idle);
        assert!(state.document.is_none());
        assert_eq!(state.values, BrandingValues::default());
        assert!(state.is_pristine());
        assert_eq!(state.toasts.len(), 1);
    }
}
