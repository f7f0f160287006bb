use reqwest::StatusCode;
use thiserror::Error;

/// Longest slice of a non-JSON body quoted back to the user.
pub(super) const BODY_SNIPPET_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL `{0}`")]
    InvalidBase(String),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("HTTP error! status: {}", .status.as_u16())]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("{}", .message.as_deref().unwrap_or("request was not successful"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Server returned {}: {detail}", .status.as_u16())]
    Parse { status: StatusCode, detail: String },
}

/// Coarse classification used by the interaction components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never completed.
    Network,
    /// Non-success status or a `success: false` body.
    Server,
    /// The response could not be decoded.
    Parse,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Server => "server",
            ErrorKind::Parse => "parse",
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidBase(_) | ApiError::Url(_) | ApiError::Network(_) => {
                ErrorKind::Network
            }
            ApiError::Status { .. } | ApiError::Rejected { .. } => ErrorKind::Server,
            ApiError::Parse { .. } => ErrorKind::Parse,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. }
            | ApiError::Rejected { status, .. }
            | ApiError::Parse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `message` the server put in its envelope, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message, .. } => {
                message.as_deref().filter(|text| !text.trim().is_empty())
            }
            _ => None,
        }
    }
}

pub(super) fn body_snippet(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .take(BODY_SNIPPET_CHARS)
        .collect()
}
