//! Copilot question/answer records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open, string-keyed context passed through to the copilot untouched.
pub type CopilotContext = Map<String, Value>;

/// Body of a copilot question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopilotAskRequest {
    /// Natural language question.
    pub question: String,
    /// Extra context such as a date range. Omitted from the body when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CopilotContext>,
}

impl CopilotAskRequest {
    /// Creates a request without context.
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
        }
    }

    /// Attaches context.
    #[must_use]
    pub fn with_context(mut self, context: CopilotContext) -> Self {
        self.context = Some(context);
        self
    }
}

/// The copilot's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopilotResponse {
    /// Answer text.
    pub answer: String,
    /// Data or tools used to produce the answer, in order.
    #[serde(default)]
    pub sources_used: Vec<String>,
}

/// Whether the copilot integration is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopilotStatus {
    /// True when the backend has a model configured.
    pub configured: bool,
    /// Why the copilot is unavailable, when it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CopilotStatus {
    /// Returns the explanation to show when the copilot is unavailable.
    ///
    /// `None` when configured.
    #[must_use]
    pub fn unavailable_reason(&self) -> Option<&str> {
        if self.configured {
            None
        } else {
            Some(
                self.message
                    .as_deref()
                    .unwrap_or("Copilot is not configured."),
            )
        }
    }
}
