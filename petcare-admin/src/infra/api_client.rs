use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::domains::auth::Session;

/// Default per-request timeout when the config does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON API client that authenticates every call with the caller's session
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into());
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL for `path`
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Start a request with the session's bearer token attached
    fn authorized(
        &self,
        method: Method,
        path: &str,
        session: &Session,
    ) -> Result<RequestBuilder> {
        if !session.is_valid() {
            return Err(anyhow!(
                "Session is missing an access token or organization"
            ));
        }
        let url = self.build_url(path);
        debug!("[ApiClient] {} {}", method, url);
        Ok(self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, session.bearer()))
    }

    /// GET a JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.authorized(Method::GET, path, session)?.query(query);
        let response = Self::check_status(request.send().await?).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Err(anyhow!("Empty response from server (204 No Content)"));
        }
        response
            .json::<T>()
            .await
            .context("Failed to decode response body")
    }

    /// PUT a JSON body; any response payload is discarded
    pub async fn put_no_content<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        path: &str,
        body: &T,
    ) -> Result<()> {
        let request = self.authorized(Method::PUT, path, session)?.json(body);
        Self::check_status(request.send().await?).await?;
        Ok(())
    }

    /// POST a JSON body with extra headers; any response payload is discarded
    pub async fn post_no_content<T: Serialize + ?Sized>(
        &self,
        session: &Session,
        path: &str,
        body: &T,
        headers: &[(&str, &str)],
    ) -> Result<()> {
        let mut request =
            self.authorized(Method::POST, path, session)?.json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        Self::check_status(request.send().await?).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => {
                warn!("[ApiClient] Request rejected: session expired");
                Err(anyhow!("Unauthorized - please sign in again"))
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!(
                    "Request failed with status {}: {}",
                    status,
                    error_text
                ))
            }
        }
    }
}

// Many operators paste "localhost:9443", which reqwest rejects.
fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed
        } else {
            format!("https://{}", trimmed)
        };
    if with_scheme != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}
