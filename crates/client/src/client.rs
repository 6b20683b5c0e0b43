//! The HTTP choke point every backend call goes through.

use std::time::Duration;

use cashflow_shared::{ClientConfig, ClientError, ClientResult};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::resources::{CashflowApi, CopilotApi, InventoryApi, PaymentsApi, SystemApi};

/// Per-call request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header. Caller headers win over the client's defaults.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets a JSON body. Fails with `ClientError::Encode` when `body` has no
    /// JSON form.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        let encoded = serde_json::to_vec(body)
            .map_err(|e| ClientError::Encode(format!("failed to encode request body: {e}")))?;
        self.body = Some(encoded);
        Ok(self)
    }
}

/// Typed client for the cash flow backend.
///
/// Holds no state between calls; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_root: String,
}

impl ApiClient {
    /// Builds a client from configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {e}", config.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_root: config.api_root(),
        })
    }

    /// Payment endpoints.
    #[must_use]
    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi::new(self)
    }

    /// Cash flow endpoints.
    #[must_use]
    pub fn cashflow(&self) -> CashflowApi<'_> {
        CashflowApi::new(self)
    }

    /// Copilot endpoints.
    #[must_use]
    pub fn copilot(&self) -> CopilotApi<'_> {
        CopilotApi::new(self)
    }

    /// Inventory endpoints.
    #[must_use]
    pub fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi::new(self)
    }

    /// Health and settings endpoints.
    #[must_use]
    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Returns the URL a prefixed API path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    /// Issues a request against an API path (prefix prepended) and decodes
    /// the success body as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        self.execute(method, self.url_for(path), options).await
    }

    /// Issues a request against a path on the backend root, outside the API
    /// prefix.
    pub(crate) async fn request_unprefixed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        self.execute(method, format!("{}{path}", self.base_url), options)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        options: RequestOptions,
    ) -> ClientResult<T> {
        debug!(method = %method, url = %url, "Sending request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .headers(merge_headers(&options.headers));
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            let err = http_error(status, &body);
            warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                message = err.message(),
                "Request failed"
            );
            return Err(err);
        }

        serde_json::from_slice(&body).map_err(|e| {
            debug!(url = %url, error = %e, "Failed to decode response body");
            ClientError::Decode(e.to_string())
        })
    }
}

/// Default `Content-Type: application/json`, overridden by any caller header
/// of the same name.
fn merge_headers(caller: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for name in caller.keys() {
        headers.remove(name);
    }
    for (name, value) in caller {
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Normalizes a non-success response into `ClientError::Http`.
///
/// Uses the body's `detail` field when it is present and non-empty, and the
/// status's reason phrase otherwise.
fn http_error(status: StatusCode, body: &[u8]) -> ClientError {
    let detail = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            None | Some(serde_json::Value::Null | serde_json::Value::String(_)) => None,
            Some(other) => Some(other.to_string()),
        });

    let message = detail.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), str::to_string)
    });

    ClientError::Http {
        status: status.as_u16(),
        message,
    }
}
