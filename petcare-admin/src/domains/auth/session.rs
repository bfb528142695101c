//! Authenticated session handed over by the identity provider.

use zeroize::Zeroizing;

/// Access token plus the organization the admin is acting for.
///
/// The token is wiped from memory on drop and never printed.
#[derive(Clone)]
pub struct Session {
    access_token: Zeroizing<String>,
    org_id: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self {
            access_token: Zeroizing::new(access_token.into()),
            org_id: org_id.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// A session needs both a token and an organization to reach the APIs.
    pub fn is_valid(&self) -> bool {
        !self.access_token.trim().is_empty() && !self.org_id.trim().is_empty()
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.as_str())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("org_id", &self.org_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
