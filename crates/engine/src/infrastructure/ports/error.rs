//! Error types for port operations.

/// Why a single reference lookup failed.
///
/// Transport, status and decode failures stay distinct so callers can tell a
/// misspelled resource name (404) from an unreachable service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The service could not be reached.
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-success status.
    #[error("{url} returned {status} {reason}: {body}")]
    Status {
        url: String,
        status: u16,
        reason: String,
        body: String,
    },

    /// The body did not match the expected resource shape.
    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn status(
        url: impl Into<String>,
        status: u16,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::Status {
            url: url.into(),
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    pub fn decode(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Status code for [`FetchError::Status`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}
