//! Application bootstrap: wires config, HTTP clients and services together.

use std::sync::Arc;

use anyhow::Result;

use crate::domains::auth::Session;
use crate::domains::settings::{SettingsDomain, SettingsServices};
use crate::infra::api_client::ApiClient;
use crate::infra::config::AdminConfig;
use crate::infra::services::{BrandingApiAdapter, PersonalizationApiAdapter};
use crate::infra::theme::ThemeStore;

/// Build production services for `config`, sharing `theme` with renderers.
pub fn services(config: &AdminConfig, theme: ThemeStore) -> Result<SettingsServices> {
    let timeout = config.request_timeout();
    let branding_client = Arc::new(ApiClient::new(&config.branding_api_url, timeout)?);
    let personalization_client =
        Arc::new(ApiClient::new(&config.personalization_api_url, timeout)?);

    Ok(SettingsServices {
        branding: Arc::new(BrandingApiAdapter::new(branding_client)),
        personalization: Arc::new(PersonalizationApiAdapter::new(personalization_client)),
        theme: Arc::new(theme),
    })
}

pub fn settings_domain(
    config: &AdminConfig,
    session: Session,
    theme: ThemeStore,
) -> Result<SettingsDomain> {
    Ok(SettingsDomain::new(session, services(config, theme)?))
}
