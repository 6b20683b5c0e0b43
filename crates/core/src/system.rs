//! Health and settings records.

use serde::{Deserialize, Serialize};

/// Liveness answer from the backend root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" when healthy.
    pub status: String,
    /// Service name.
    pub service: String,
}

impl HealthStatus {
    /// True when the backend reports itself healthy.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Public, read-only application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Display name.
    pub app_name: String,
    /// Backend version.
    pub version: String,
    /// One-line description.
    pub description: String,
    /// Where payments come from: "sample", "stripe" or "stripe_seed".
    pub datasource: String,
    /// Stripe mock URL when a Stripe datasource is active.
    #[serde(default)]
    pub stripe_mock_url: Option<String>,
    /// Whether the copilot is usable.
    pub copilot_configured: bool,
    /// Copilot model when configured.
    #[serde(default)]
    pub copilot_model: Option<String>,
    /// Path to the backend's API docs.
    pub api_docs_url: String,
}
