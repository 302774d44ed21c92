//! Error types for moodlog

/// Result type alias using moodlog's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for moodlog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed service credential
    #[error("credential error: {0}")]
    Credential(String),

    /// The service rejected the credential (401)
    #[error("401 Unauthorized. Body: {body}")]
    Unauthorized { body: String },

    /// The model was still loading after the single retry (503)
    #[error("service unavailable at {url}: {body}")]
    ServiceUnavailable { url: String, body: String },

    /// The endpoint does not serve this resource (404/410)
    #[error("resource not found at {url}")]
    NotFound { url: String },

    /// Any other non-success status
    #[error("HF Error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure (connect, timeout, TLS)
    #[error("network error: {0}")]
    Network(String),

    /// A generation model answered without text
    #[error("empty generation from {model}")]
    EmptyGeneration { model: String },

    /// Every endpoint was tried without a recorded failure
    #[error("inference service unreachable")]
    Unreachable,

    /// Response body did not have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Caller-supplied input was rejected
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence errors
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How the endpoint fallback loop reacts to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Stop immediately and surface the error
    Fatal,
    /// Move to the next endpoint without recording the error
    Skip,
    /// Record the error and move to the next endpoint
    Advance,
}

impl Error {
    /// Create a new credential error
    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new invalid response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Map an HTTP status and body to the matching error
    pub fn from_status(status: u16, url: &str, body: String) -> Self {
        match status {
            401 => Self::Unauthorized { body },
            404 | 410 => Self::NotFound {
                url: url.to_string(),
            },
            503 => Self::ServiceUnavailable {
                url: url.to_string(),
                body,
            },
            _ => Self::Upstream { status, body },
        }
    }

    /// Classify the error for the endpoint fallback loop
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Credential(_) | Self::Unauthorized { .. } => Disposition::Fatal,
            Self::NotFound { .. } => Disposition::Skip,
            _ => Disposition::Advance,
        }
    }

    /// Whether no further calls can succeed with the current credential
    pub fn is_fatal(&self) -> bool {
        self.disposition() == Disposition::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            Error::from_status(401, "u", "nope".into()),
            Error::Unauthorized { .. }
        ));
        assert!(matches!(
            Error::from_status(404, "u", String::new()),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            Error::from_status(410, "u", String::new()),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            Error::from_status(503, "u", String::new()),
            Error::ServiceUnavailable { .. }
        ));
        assert!(matches!(
            Error::from_status(500, "u", String::new()),
            Error::Upstream { status: 500, .. }
        ));
    }

    #[test]
    fn test_dispositions() {
        assert_eq!(
            Error::Unauthorized { body: String::new() }.disposition(),
            Disposition::Fatal
        );
        assert_eq!(Error::credential("x").disposition(), Disposition::Fatal);
        assert_eq!(
            Error::NotFound { url: "u".into() }.disposition(),
            Disposition::Skip
        );
        assert_eq!(Error::network("reset").disposition(), Disposition::Advance);
        assert_eq!(
            Error::Upstream {
                status: 500,
                body: String::new()
            }
            .disposition(),
            Disposition::Advance
        );
    }

    #[test]
    fn test_upstream_message_carries_status_and_body() {
        let err = Error::from_status(502, "u", "bad gateway".into());
        assert_eq!(err.to_string(), "HF Error 502: bad gateway");
    }
}
