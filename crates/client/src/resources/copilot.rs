//! Copilot endpoints.

use cashflow_core::{CopilotAskRequest, CopilotContext, CopilotResponse, CopilotStatus};
use cashflow_shared::ClientResult;
use reqwest::Method;

use crate::client::{ApiClient, RequestOptions};

/// `/copilot` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CopilotApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CopilotApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET `/copilot/status`.
    pub async fn status(self) -> ClientResult<CopilotStatus> {
        self.client
            .request(Method::GET, "/copilot/status", RequestOptions::new())
            .await
    }

    /// POST `/copilot/ask` with `{question, context}`. `context` is sent
    /// verbatim and left out of the body when `None`.
    pub async fn ask(
        self,
        question: &str,
        context: Option<CopilotContext>,
    ) -> ClientResult<CopilotResponse> {
        let body = CopilotAskRequest {
            question: question.to_string(),
            context,
        };
        self.client
            .request(Method::POST, "/copilot/ask", RequestOptions::new().json(&body)?)
            .await
    }
}
