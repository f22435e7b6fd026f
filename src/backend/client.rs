//! HTTP client for the configuration admin backend

use super::error::UpdateError;
use super::traits::BackendApi;
use crate::state::{EnvironmentEntry, SubmitPayload};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

/// Resource path of the configuration-creation wizard on the author instance
const WIZARD_PATH: &str = "/apps/confadmin/content/configurations/createwizard";

static ERROR_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").expect("valid regex"));

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Client for the author instance, created once at startup
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("confadmin-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a resource path against the configured author instance
    fn externalize(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Extract the first `<h1>` title from an HTML error body.
/// Empty bodies and bodies without a heading fall back to a generic message.
fn extract_error_title(body: &str) -> String {
    ERROR_TITLE
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn fetch_environments(
        &self,
        ims_configuration_id: &str,
        property_id: &str,
    ) -> Result<Vec<EnvironmentEntry>> {
        let url = self.externalize(&format!("{WIZARD_PATH}/environmentsData"));
        let response = self
            .http
            .get(&url)
            .query(&[
                ("imsConfigurationId", ims_configuration_id),
                ("propertyId", property_id),
            ])
            .send()
            .await
            .context("environment lookup request failed")?;

        if !response.status().is_success() {
            bail!("environment lookup returned {}", response.status());
        }
        response
            .json::<Vec<EnvironmentEntry>>()
            .await
            .context("malformed environment data")
    }

    async fn update_environments(&self, payload: &SubmitPayload) -> Result<(), UpdateError> {
        let url = self.externalize(&format!("{WIZARD_PATH}/jcr:content.updateEnvironments.html"));
        let response = self.http.post(&url).form(payload).send().await?;

        if response.status().is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(UpdateError::from_title(extract_error_title(&body)))
    }

    async fn create_configuration(&self, fields: &[(String, String)]) -> Result<()> {
        let url = self.externalize(&format!("{WIZARD_PATH}/jcr:content.createConfiguration.html"));
        let response = self
            .http
            .post(&url)
            .form(fields)
            .send()
            .await
            .context("configuration creation request failed")?;

        if !response.status().is_success() {
            bail!("configuration creation returned {}", response.status());
        }
        Ok(())
    }
}
