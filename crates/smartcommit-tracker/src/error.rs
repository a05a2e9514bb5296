//! Tracker error types.

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Tracker error types.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request did not complete (connection, TLS, timeout...).
    #[error("failed to fetch issue {key}")]
    Request {
        key: String,
        #[source]
        source: reqwest::Error,
    },

    /// The tracker answered with a non-2xx status.
    #[error("tracker returned HTTP {status} for issue {key}")]
    Status { key: String, status: u16 },

    /// The response body is not the expected issue document.
    #[error("unexpected tracker response for issue {key}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = TrackerError::Status {
            key: "PROJ-1".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "tracker returned HTTP 404 for issue PROJ-1");
    }

    #[test]
    fn test_decode_display_and_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TrackerError::Decode {
            key: "PROJ-1".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "unexpected tracker response for issue PROJ-1");
        assert!(std::error::Error::source(&err).is_some());
    }
}
