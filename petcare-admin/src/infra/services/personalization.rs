//! Personalization record persistence on the pet-care backend.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use petcare_model::Personalization;

use crate::domains::auth::Session;
use crate::infra::api_client::ApiClient;
use crate::infra::errors::{BrandingError, BrandingResult};

pub const PERSONALIZATION_PATH: &str = "personalization";

/// Header naming the organization a personalization record belongs to
pub const ORG_ID_HEADER: &str = "org-id";

#[async_trait]
pub trait PersonalizationService: Send + Sync + Debug {
    async fn post_personalization(
        &self,
        session: &Session,
        personalization: &Personalization,
    ) -> BrandingResult<()>;
}

#[derive(Debug, Clone)]
pub struct PersonalizationApiAdapter {
    client: Arc<ApiClient>,
}

impl PersonalizationApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PersonalizationService for PersonalizationApiAdapter {
    async fn post_personalization(
        &self,
        session: &Session,
        personalization: &Personalization,
    ) -> BrandingResult<()> {
        self.client
            .post_no_content(
                session,
                PERSONALIZATION_PATH,
                personalization,
                &[(ORG_ID_HEADER, session.org_id())],
            )
            .await
            .map_err(|e| BrandingError::SecondaryWrite(format!("{e:#}")))?;
        log::info!(
            "[Personalization] Saved personalization for org {}",
            session.org_id()
        );
        Ok(())
    }
}
