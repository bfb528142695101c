//! Submit pipeline for the personalization section
//!
//! Stages run strictly in order, and a failed primary write skips the
//! stages that depend on it:
//!
//! 1. primary write of the derived branding document
//! 2. secondary write of the flattened personalization record
//! 3. theme application (only after the secondary write succeeds)
//! 4. re-fetch of the document, always, once the writes have settled

use std::sync::Arc;

use petcare_model::{BrandingPreference, BrandingValues, Personalization};

use crate::domains::auth::Session;
use crate::infra::errors::BrandingResult;
use crate::infra::services::{BrandingService, PersonalizationService};
use crate::infra::theme::ThemeApplier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStage {
    PrimaryWrite,
    SecondaryWrite,
    ApplyTheme,
    Refetch,
}

/// Outcome of every stage of one submit
#[derive(Debug, Clone)]
pub struct SubmitReport {
    pub submitted: BrandingValues,
    /// The document sent in the primary write
    pub document: BrandingPreference,
    pub primary: BrandingResult<()>,
    /// `None` when the primary write failed and the stage was skipped
    pub secondary: Option<BrandingResult<Personalization>>,
    pub theme_applied: bool,
    pub refetch: BrandingResult<BrandingPreference>,
    /// Stages in the order they ran
    pub stages: Vec<SubmitStage>,
}

#[derive(Debug, Clone)]
pub struct SubmitPipeline {
    branding: Arc<dyn BrandingService>,
    personalization: Arc<dyn PersonalizationService>,
    theme: Arc<dyn ThemeApplier>,
}

impl SubmitPipeline {
    pub fn new(
        branding: Arc<dyn BrandingService>,
        personalization: Arc<dyn PersonalizationService>,
        theme: Arc<dyn ThemeApplier>,
    ) -> Self {
        Self {
            branding,
            personalization,
            theme,
        }
    }

    pub async fn run(
        self,
        session: Session,
        document: BrandingPreference,
        submitted: BrandingValues,
    ) -> SubmitReport {
        let mut stages = vec![SubmitStage::PrimaryWrite];
        let primary = self.branding.update_preference(&session, &document).await;

        let mut theme_applied = false;
        let secondary = match &primary {
            Ok(()) => {
                stages.push(SubmitStage::SecondaryWrite);
                let record =
                    Personalization::from_branding(session.org_id(), &submitted);
                let result = self
                    .personalization
                    .post_personalization(&session, &record)
                    .await
                    .map(|()| record);

                if let Ok(record) = &result {
                    stages.push(SubmitStage::ApplyTheme);
                    self.theme.apply(record);
                    theme_applied = true;
                }
                Some(result)
            }
            Err(e) => {
                log::warn!(
                    "[Personalization] Primary write failed, skipping personalization: {}",
                    e
                );
                None
            }
        };

        stages.push(SubmitStage::Refetch);
        let refetch = self.branding.fetch_preference(&session).await;

        SubmitReport {
            submitted,
            document,
            primary,
            secondary,
            theme_applied,
            refetch,
            stages,
        }
    }
}
