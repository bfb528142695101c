//! Settings management domain
//!
//! Owns the session, the remote service handles and the state of every
//! settings section. One instance per mounted settings screen; it is the
//! only writer of the branding document it holds.

pub mod messages;
pub mod sections;

use std::sync::Arc;

pub use messages::SettingsMessage;
use sections::personalization::{self, PersonalizationState};

use crate::common::{CrossDomainEvent, DomainUpdateResult};
use crate::domains::auth::Session;
use crate::infra::services::{BrandingService, PersonalizationService};
use crate::infra::theme::ThemeApplier;

/// Remote collaborators used by the settings sections
#[derive(Clone)]
pub struct SettingsServices {
    pub branding: Arc<dyn BrandingService>,
    pub personalization: Arc<dyn PersonalizationService>,
    pub theme: Arc<dyn ThemeApplier>,
}

impl std::fmt::Debug for SettingsServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsServices")
            .field("branding", &"BrandingService(..)")
            .field("personalization", &"PersonalizationService(..)")
            .field("theme", &"ThemeApplier(..)")
            .finish()
    }
}

#[derive(Debug)]
pub struct SettingsDomain {
    pub session: Session,
    /// Bumped on every session change; async replies carry the value they
    /// were issued under and are dropped when it no longer matches.
    session_generation: u64,
    pub services: SettingsServices,
    pub personalization: PersonalizationState,
}

impl SettingsDomain {
    pub fn new(session: Session, services: SettingsServices) -> Self {
        Self {
            session,
            session_generation: 0,
            services,
            personalization: PersonalizationState::default(),
        }
    }

    pub fn session_generation(&self) -> u64 {
        self.session_generation
    }

    pub fn update(
        &mut self,
        message: SettingsMessage,
    ) -> DomainUpdateResult<SettingsMessage> {
        match message {
            SettingsMessage::SessionChanged(session) => {
                log::info!(
                    "[Settings] Session changed to org {}",
                    session.org_id()
                );
                self.session = session;
                self.session_generation += 1;
                personalization::session_changed(self)
                    .map(SettingsMessage::Personalization)
            }
            SettingsMessage::Personalization(message) => {
                personalization::update(self, message)
                    .map(SettingsMessage::Personalization)
            }
        }
    }

    /// Drive `message` and every follow-up task to completion, in order.
    ///
    /// Returns the events broadcast along the way.
    pub async fn run_to_idle(
        &mut self,
        message: impl Into<SettingsMessage>,
    ) -> Vec<CrossDomainEvent> {
        let mut events = Vec::new();
        let mut next = Some(message.into());
        while let Some(message) = next {
            let result = self.update(message);
            events.extend(result.events);
            next = result.task.resolve().await;
        }
        events
    }
}
