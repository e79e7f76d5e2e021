//! Failure modes of the Beacon API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured API origin is not an absolute URL
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never produced a response
    #[error("could not reach the API: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401/403: the session token or OAuth exchange was refused
    #[error("not authorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Any other 4xx
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// 5xx or an unexpected status
    #[error("API error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The body of a successful response did not have the expected shape
    #[error("unexpected response from {endpoint}: {source}")]
    UnexpectedBody {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Classify a non-success status together with the response body
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        let code = status.as_u16();
        match code {
            401 | 403 => Self::Unauthorized {
                status: code,
                message,
            },
            400..=499 => Self::Rejected {
                status: code,
                message,
            },
            _ => Self::Server {
                status: code,
                message,
            },
        }
    }

    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Rejected { status, .. }
            | Self::Server { status, .. } => Some(*status),
            Self::InvalidBaseUrl { .. } | Self::Transport(_) | Self::UnexpectedBody { .. } => None,
        }
    }

    /// Whether the API refused the request itself rather than failing
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::Rejected { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
