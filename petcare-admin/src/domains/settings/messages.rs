use super::sections::personalization::PersonalizationMessage;
use crate::domains::auth::Session;

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    /// A new session replaced the current one; sections reload.
    SessionChanged(Session),
    Personalization(PersonalizationMessage),
}

impl SettingsMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionChanged(_) => "Settings::SessionChanged",
            Self::Personalization(message) => message.name(),
        }
    }
}

impl From<PersonalizationMessage> for SettingsMessage {
    fn from(message: PersonalizationMessage) -> Self {
        Self::Personalization(message)
    }
}
