//! Personalization section update handlers

use petcare_model::{BrandingField, BrandingPreference, BrandingValues, Personalization};

use super::messages::PersonalizationMessage;
use super::pipeline::{SubmitPipeline, SubmitReport};
use super::state::{FormPhase, PersonalizationState, ToastLevel};
use crate::common::{CrossDomainEvent, DomainUpdateResult, Task};
use crate::domains::settings::SettingsDomain;
use crate::infra::errors::{BrandingError, BrandingResult};

type UpdateResult = DomainUpdateResult<PersonalizationMessage>;

/// Main message handler for the personalization section
pub fn handle_message(
    settings: &mut SettingsDomain,
    message: PersonalizationMessage,
) -> UpdateResult {
    log::debug!("[Personalization] {}", message.name());
    match message {
        PersonalizationMessage::Load => load(settings),
        PersonalizationMessage::Loaded { generation, result } => {
            if generation != settings.session_generation {
                log::debug!(
                    "[Personalization] Dropping branding fetched for a previous session"
                );
                return UpdateResult::none();
            }
            loaded(&mut settings.personalization, result)
        }
        PersonalizationMessage::LogoUrlChanged(value) => {
            edit(&mut settings.personalization, BrandingField::LogoUrl, value)
        }
        PersonalizationMessage::LogoAltTextChanged(value) => edit(
            &mut settings.personalization,
            BrandingField::LogoAltText,
            value,
        ),
        PersonalizationMessage::FaviconUrlChanged(value) => edit(
            &mut settings.personalization,
            BrandingField::FaviconUrl,
            value,
        ),
        PersonalizationMessage::PrimaryColorChanged(value) => edit(
            &mut settings.personalization,
            BrandingField::PrimaryColor,
            value,
        ),
        PersonalizationMessage::Submit => submit(settings),
        PersonalizationMessage::SubmitFinished { generation, report } => {
            submit_finished(settings, generation, *report)
        }
        PersonalizationMessage::DismissToast(id) => {
            settings.personalization.dismiss_toast(id);
            UpdateResult::none()
        }
    }
}

/// The session was replaced; the held document belongs to the old one.
///
/// While a submit is in flight the reload waits for `SubmitFinished`, which
/// sees the generation mismatch and reloads then.
pub fn session_changed(settings: &mut SettingsDomain) -> UpdateResult {
    let state = &mut settings.personalization;
    if state.is_submitting() {
        log::info!("[Personalization] Session changed during submit; reload deferred");
        return UpdateResult::none();
    }
    state.forget_document();
    load(settings)
}

fn load(settings: &mut SettingsDomain) -> UpdateResult {
    let state = &mut settings.personalization;
    if state.is_submitting() {
        // The pipeline re-fetches on its own once the writes settle.
        log::debug!("[Personalization] Load ignored while submitting");
        return UpdateResult::none();
    }
    state.phase = FormPhase::Loading;

    let service = settings.services.branding.clone();
    let session = settings.session.clone();
    let generation = settings.session_generation;
    UpdateResult::task(Task::perform(
        async move { service.fetch_preference(&session).await },
        move |result| PersonalizationMessage::Loaded { generation, result },
    ))
}

/// Split a fetched document into what the form displays.
fn extract(
    document: BrandingPreference,
) -> BrandingResult<(BrandingPreference, String, BrandingValues)> {
    let theme = document.active_theme()?.to_owned();
    let values = document.branding()?;
    Ok((document, theme, values))
}

fn loaded(
    state: &mut PersonalizationState,
    result: BrandingResult<BrandingPreference>,
) -> UpdateResult {
    match result.and_then(extract) {
        Ok((document, theme, values)) => {
            log::info!(
                "[Personalization] Loaded branding for theme '{}'",
                theme
            );
            state.document = Some(document);
            state.active_theme = Some(theme.clone());
            state.restart(values);
            state.phase = FormPhase::Loaded;
            UpdateResult::none().add_event(CrossDomainEvent::BrandingLoaded {
                active_theme: theme,
            })
        }
        Err(e) => {
            log::error!("[Personalization] {}", e);
            state.push_error(&e);
            state.phase = if state.document.is_some() {
                FormPhase::Loaded
            } else {
                FormPhase::Failed
            };
            UpdateResult::none()
        }
    }
}

fn edit(
    state: &mut PersonalizationState,
    field: BrandingField,
    value: String,
) -> UpdateResult {
    if state.is_submitting() {
        return UpdateResult::none();
    }
    state.values.set(field, value);
    state.revalidate();
    UpdateResult::none()
}

fn submit(settings: &mut SettingsDomain) -> UpdateResult {
    let state = &mut settings.personalization;
    if !state.can_submit() {
        log::debug!(
            "[Personalization] Submit suppressed (phase {:?}, pristine {}, {} field errors)",
            state.phase,
            state.is_pristine(),
            state.errors.len()
        );
        return UpdateResult::none();
    }
    let Some(document) = state.document.as_ref() else {
        return UpdateResult::none();
    };

    let derived = match document.with_branding(&state.values) {
        Ok(derived) => derived,
        Err(e) => {
            let e = BrandingError::from(e);
            log::error!("[Personalization] {}", e);
            state.push_error(&e);
            return UpdateResult::none();
        }
    };
    state.phase = FormPhase::Submitting;

    let pipeline = SubmitPipeline::new(
        settings.services.branding.clone(),
        settings.services.personalization.clone(),
        settings.services.theme.clone(),
    );
    let session = settings.session.clone();
    let values = state.values.clone();
    let generation = settings.session_generation;
    UpdateResult::task(Task::perform(
        pipeline.run(session, derived, values),
        move |report| PersonalizationMessage::SubmitFinished {
            generation,
            report: Box::new(report),
        },
    ))
}

/// Raise notices for the two writes and collect the events they warrant.
fn report_writes(
    state: &mut PersonalizationState,
    primary: &BrandingResult<()>,
    secondary: Option<BrandingResult<Personalization>>,
    theme_applied: bool,
) -> Vec<CrossDomainEvent> {
    let mut events = Vec::new();
    if let Err(e) = primary {
        state.push_error(e);
    }
    match secondary {
        Some(Ok(personalization)) => {
            state.push_toast(
                ToastLevel::Success,
                "Personalization updated",
                "Your branding changes have been saved.",
            );
            if theme_applied {
                events.push(CrossDomainEvent::PersonalizationApplied(
                    personalization,
                ));
            }
        }
        Some(Err(e)) => {
            state.push_error(&e);
        }
        None => {}
    }
    events
}

fn submit_finished(
    settings: &mut SettingsDomain,
    generation: u64,
    report: SubmitReport,
) -> UpdateResult {
    let SubmitReport {
        submitted,
        document,
        primary,
        secondary,
        theme_applied,
        refetch,
        stages,
    } = report;
    log::debug!("[Personalization] Submit stages: {:?}", stages);

    let state = &mut settings.personalization;
    let events = report_writes(state, &primary, secondary, theme_applied);

    if generation != settings.session_generation {
        // The re-fetch ran with the old session; load the new one instead.
        log::info!(
            "[Personalization] Session changed during submit; reloading for org {}",
            settings.session.org_id()
        );
        state.forget_document();
        let mut result = load(settings);
        result.events.extend(events);
        return result;
    }

    match refetch.and_then(extract) {
        Ok((fresh, theme, values)) => {
            state.document = Some(fresh);
            state.active_theme = Some(theme);
            if primary.is_ok() {
                state.restart(values);
            } else {
                // Keep the unsaved edits on screen so they can be resubmitted.
                state.initial = values;
                state.revalidate();
            }
        }
        Err(e) => {
            log::error!("[Personalization] Re-fetch failed: {}", e);
            state.push_error(&e);
            if primary.is_ok() {
                state.document = Some(document);
                state.restart(submitted);
            }
        }
    }

    state.phase = FormPhase::Loaded;
    let mut result = UpdateResult::none();
    result.events = events;
    result
}
