//! Failure type shared by every endpoint.

use serde::Deserialize;

/// Message shown for failures that never reached the server.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// The `detail` field of an error response.
///
/// Backends send either one message or a list of field-level validation
/// errors (`[{"loc": [...], "msg": "...", "type": "..."}]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDetail")]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<String>),
}

impl ErrorDetail {
    /// Collapse the detail into one displayable string.
    pub fn flatten(&self) -> String {
        match self {
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Fields(messages) => messages.join(". "),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDetail {
    Message(String),
    Fields(Vec<FieldMessage>),
}

#[derive(Deserialize)]
struct FieldMessage {
    msg: String,
}

impl From<RawDetail> for ErrorDetail {
    fn from(raw: RawDetail) -> Self {
        match raw {
            RawDetail::Message(message) => ErrorDetail::Message(message),
            RawDetail::Fields(fields) => {
                ErrorDetail::Fields(fields.into_iter().map(|f| f.msg).collect())
            }
        }
    }
}

/// Body of a non-2xx response.
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) detail: Option<ErrorDetail>,
}

/// Errors returned by [`crate::ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        detail: Option<ErrorDetail>,
    },
    /// No usable response: connection failure, or a body that did not decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status of a rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Flattened server detail, if the server sent a non-empty one.
    pub fn detail_message(&self) -> Option<String> {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => Some(detail.flatten()).filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Page-facing message: the server detail, `fallback` for a rejection
    /// without one, or [`UNEXPECTED_ERROR`] when the server was never reached.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { .. } => self
                .detail_message()
                .unwrap_or_else(|| fallback.to_string()),
            ApiError::Transport(_) => UNEXPECTED_ERROR.to_string(),
        }
    }
}
