use serde::Deserialize;
use thiserror::Error;

/// Status the server reports for an applied toggle
pub const STATUS_OK: &str = "ok";

/// Identity of the form instance a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(pub u64);

/// Which way the toggle goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Subscribe,
    Unsubscribe,
}

impl ToggleAction {
    /// Unsubscribe when currently subscribed, subscribe otherwise
    pub fn for_current(subscribed: bool) -> Self {
        if subscribed {
            ToggleAction::Unsubscribe
        } else {
            ToggleAction::Subscribe
        }
    }

    pub fn field(self) -> &'static str {
        match self {
            ToggleAction::Subscribe => "subscribe",
            ToggleAction::Unsubscribe => "unsubscribe",
        }
    }
}

/// Form-encoded POST body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleBody {
    pub session_id: String,
    pub action: ToggleAction,
}

impl ToggleBody {
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [
            ("_session_id", self.session_id.as_str()),
            (self.action.field(), "true"),
        ]
    }
}

/// A toggle request as queued for the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub form_id: FormId,
    pub request_id: u64,
    pub url: String,
    pub body: ToggleBody,
}

/// JSON reply from the subscribe endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleReply {
    pub status: String,
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub subscribed_to_tool: bool,
}

impl ToggleReply {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Errors that can occur while sending a toggle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// HTTP client could not be built
    #[error("HTTP client not configured: {0}")]
    NotConfigured(String),

    /// Toggle url could not be resolved to an absolute url
    #[error("Invalid toggle url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Reply body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type ToggleOutcome = Result<ToggleReply, ToggleError>;

/// Settled request, routed back to the originating form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResponse {
    pub form_id: FormId,
    pub request_id: u64,
    pub outcome: ToggleOutcome,
}

#[cfg(test)]
#[path = "toggle_types_tests.rs"]
mod toggle_types_tests;
