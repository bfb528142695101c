#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use petcare_admin::domains::auth::Session;
use petcare_admin::domains::settings::{SettingsDomain, SettingsServices};
use petcare_admin::infra::errors::{BrandingError, BrandingResult};
use petcare_admin::infra::services::{BrandingService, PersonalizationService};
use petcare_admin::infra::theme::ThemeApplier;
use petcare_model::{BrandingPreference, Personalization};
use serde_json::{Value, json};

/// Every remote call and side effect, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch { org: String },
    Update,
    Post(Personalization),
    Apply(Personalization),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// A second org's document: same shape, different leaves.
pub fn dark_document() -> Value {
    json!({
        "preference": {
            "theme": {
                "activeTheme": "dark",
                "dark": {
                    "images": {
                        "logo": { "imgURL": "org2.png", "altText": "Org two" },
                        "favicon": { "imgURL": "org2.ico" }
                    },
                    "colors": { "primary": { "main": "#123456" } }
                }
            }
        }
    })
}

pub fn light_document() -> Value {
    json!({
        "preference": {
            "theme": {
                "activeTheme": "light",
                "light": {
                    "images": {
                        "logo": { "imgURL": "a.png", "altText": "Logo" },
                        "favicon": { "imgURL": "f.ico" }
                    },
                    "colors": { "primary": { "main": "#000" } }
                }
            }
        }
    })
}

/// In-memory preference service: updates replace the stored document.
///
/// Orgs without an entry in `org_docs` share `server_doc`.
#[derive(Debug)]
pub struct MockBranding {
    pub log: CallLog,
    pub server_doc: Mutex<Value>,
    pub org_docs: Mutex<HashMap<String, Value>>,
    pub updates: Mutex<Vec<BrandingPreference>>,
    pub fail_update: bool,
    /// Fetches numbered from this index on (0-based) fail
    pub fail_fetch_from: Option<usize>,
    fetches: Mutex<usize>,
}

impl MockBranding {
    pub fn new(log: CallLog, doc: Value) -> Self {
        Self {
            log,
            server_doc: Mutex::new(doc),
            org_docs: Mutex::new(HashMap::new()),
            updates: Mutex::new(Vec::new()),
            fail_update: false,
            fail_fetch_from: None,
            fetches: Mutex::new(0),
        }
    }
}

#[async_trait::async_trait]
impl BrandingService for MockBranding {
    async fn fetch_preference(
        &self,
        session: &Session,
    ) -> BrandingResult<BrandingPreference> {
        self.log.lock().unwrap().push(Call::Fetch {
            org: session.org_id().to_string(),
        });
        let index = {
            let mut fetches = self.fetches.lock().unwrap();
            *fetches += 1;
            *fetches - 1
        };
        if self.fail_fetch_from.is_some_and(|from| index >= from) {
            return Err(BrandingError::RemoteFetch("service unavailable".into()));
        }
        let doc = self
            .org_docs
            .lock()
            .unwrap()
            .get(session.org_id())
            .cloned()
            .unwrap_or_else(|| self.server_doc.lock().unwrap().clone());
        Ok(BrandingPreference::from_value(doc))
    }

    async fn update_preference(
        &self,
        session: &Session,
        document: &BrandingPreference,
    ) -> BrandingResult<()> {
        self.log.lock().unwrap().push(Call::Update);
        if self.fail_update {
            return Err(BrandingError::RemoteUpdate("validation failed".into()));
        }
        self.updates.lock().unwrap().push(document.clone());
        let mut org_docs = self.org_docs.lock().unwrap();
        match org_docs.get_mut(session.org_id()) {
            Some(doc) => *doc = document.as_value().clone(),
            None => *self.server_doc.lock().unwrap() = document.as_value().clone(),
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockPersonalization {
    pub log: CallLog,
    pub fail: bool,
}

#[async_trait::async_trait]
impl PersonalizationService for MockPersonalization {
    async fn post_personalization(
        &self,
        _session: &Session,
        personalization: &Personalization,
    ) -> BrandingResult<()> {
        self.log
            .lock()
            .unwrap()
            .push(Call::Post(personalization.clone()));
        if self.fail {
            return Err(BrandingError::SecondaryWrite("backend down".into()));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct RecordingTheme {
    pub log: CallLog,
}

impl ThemeApplier for RecordingTheme {
    fn apply(&self, personalization: &Personalization) {
        self.log
            .lock()
            .unwrap()
            .push(Call::Apply(personalization.clone()));
    }
}

pub struct Harness {
    pub log: CallLog,
    pub branding: Arc<MockBranding>,
    pub settings: SettingsDomain,
}

impl Harness {
    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }
}

/// Build a settings domain over mocks; `tweak` adjusts the branding mock.
pub fn harness(
    doc: Value,
    fail_secondary: bool,
    tweak: impl FnOnce(&mut MockBranding),
) -> Harness {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let mut branding = MockBranding::new(log.clone(), doc);
    tweak(&mut branding);
    let branding = Arc::new(branding);

    let services = SettingsServices {
        branding: branding.clone(),
        personalization: Arc::new(MockPersonalization {
            log: log.clone(),
            fail: fail_secondary,
        }),
        theme: Arc::new(RecordingTheme { log: log.clone() }),
    };

    Harness {
        log,
        branding,
        settings: SettingsDomain::new(Session::new("token-1", "org-1"), services),
    }
}
