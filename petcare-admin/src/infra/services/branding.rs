//! Branding preference gateway
//!
//! Reads and replaces an organization's branding preference document on the
//! remote preference service. One round trip per call, no caching.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use petcare_model::BrandingPreference;
use serde_json::Value;

use crate::domains::auth::Session;
use crate::infra::api_client::ApiClient;
use crate::infra::errors::{BrandingError, BrandingResult};

/// Path of the branding preference resource on the preference service
pub const BRANDING_PREFERENCE_PATH: &str = "api/server/v1/branding-preference";

#[async_trait]
pub trait BrandingService: Send + Sync + Debug {
    /// Fetch the organization's full branding preference document
    async fn fetch_preference(
        &self,
        session: &Session,
    ) -> BrandingResult<BrandingPreference>;

    /// Replace the organization's branding preference document as a whole
    async fn update_preference(
        &self,
        session: &Session,
        document: &BrandingPreference,
    ) -> BrandingResult<()>;
}

#[derive(Debug, Clone)]
pub struct BrandingApiAdapter {
    client: Arc<ApiClient>,
}

impl BrandingApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BrandingService for BrandingApiAdapter {
    async fn fetch_preference(
        &self,
        session: &Session,
    ) -> BrandingResult<BrandingPreference> {
        let value: Value = self
            .client
            .get(session, BRANDING_PREFERENCE_PATH, &[("type", "ORG")])
            .await
            .map_err(|e| BrandingError::RemoteFetch(format!("{e:#}")))?;
        log::debug!(
            "[Branding] Fetched preference for org {}",
            session.org_id()
        );
        Ok(BrandingPreference::from_value(value))
    }

    async fn update_preference(
        &self,
        session: &Session,
        document: &BrandingPreference,
    ) -> BrandingResult<()> {
        self.client
            .put_no_content(session, BRANDING_PREFERENCE_PATH, document)
            .await
            .map_err(|e| BrandingError::RemoteUpdate(format!("{e:#}")))?;
        log::info!(
            "[Branding] Updated preference for org {}",
            session.org_id()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::api_client::DEFAULT_TIMEOUT;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn document() -> Value {
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

    fn adapter(server: &MockServer) -> BrandingApiAdapter {
        BrandingApiAdapter::new(Arc::new(
            ApiClient::new(server.uri(), DEFAULT_TIMEOUT).unwrap(),
        ))
    }

    #[tokio::test]
    async fn fetch_returns_raw_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/server/v1/branding-preference"))
            .and(query_param("type", "ORG"))
            .and(header("authorization", "Bearer t"))
            .respond_with(ResponseTemplate::new(200).set_body_json(document()))
            .mount(&server)
            .await;

        let doc = adapter(&server)
            .fetch_preference(&Session::new("t", "org-1"))
            .await
            .unwrap();
        assert_eq!(doc.as_value(), &document());
    }

    #[tokio::test]
    async fn fetch_failure_is_remote_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .fetch_preference(&Session::new("t", "org-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, BrandingError::RemoteFetch(_)));
    }

    #[tokio::test]
    async fn update_puts_whole_document() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/server/v1/branding-preference"))
            .and(body_json(document()))
            .respond_with(ResponseTemplate::new(200).set_body_json(document()))
            .expect(1)
            .mount(&server)
            .await;

        adapter(&server)
            .update_preference(
                &Session::new("t", "org-1"),
                &BrandingPreference::from_value(document()),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_with_invalid_session_is_remote_update_error() {
        let server = MockServer::start().await;
        let err = adapter(&server)
            .update_preference(
                &Session::new("", ""),
                &BrandingPreference::from_value(document()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BrandingError::RemoteUpdate(_)));
    }
}
