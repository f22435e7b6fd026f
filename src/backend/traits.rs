//! Trait abstraction for the backend client to enable mocking in tests

use super::error::UpdateError;
use crate::state::{EnvironmentEntry, SubmitPayload};
use anyhow::Result;
use async_trait::async_trait;

/// Operations against the configuration admin backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Fetch the environments provisioned for a configuration/property pair
    async fn fetch_environments(
        &self,
        ims_configuration_id: &str,
        property_id: &str,
    ) -> Result<Vec<EnvironmentEntry>>;

    /// Persist archive settings ahead of configuration creation
    async fn update_environments(&self, payload: &SubmitPayload) -> Result<(), UpdateError>;

    /// Submit the completed wizard form
    async fn create_configuration(&self, fields: &[(String, String)]) -> Result<()>;
}
