//! Health and settings endpoints.

use cashflow_core::{AppSettings, HealthStatus};
use cashflow_shared::ClientResult;
use reqwest::Method;

use crate::client::{ApiClient, RequestOptions};

/// Backend health and public settings.
#[derive(Debug, Clone, Copy)]
pub struct SystemApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET `/health` on the backend root. Not under the API prefix.
    pub async fn health(self) -> ClientResult<HealthStatus> {
        self.client
            .request_unprefixed(Method::GET, "/health", RequestOptions::new())
            .await
    }

    /// GET `/settings`.
    pub async fn settings(self) -> ClientResult<AppSettings> {
        self.client
            .request(Method::GET, "/settings", RequestOptions::new())
            .await
    }
}
