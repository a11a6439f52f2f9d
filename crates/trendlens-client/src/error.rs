use std::fmt;

/// Result type for trendlens-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the trends API
#[derive(Debug)]
pub enum Error {
    /// Connection, TLS or timeout failure before a response was read
    Transport(reqwest::Error),

    /// Server answered with a non-2xx status
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body was not the expected JSON shape
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    /// Request rejected locally before sending
    InvalidRequest(String),
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_timeout())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Request failed: {}", err),
            Error::Status {
                endpoint,
                status,
                body,
            } => {
                if body.is_empty() {
                    write!(f, "{} returned HTTP {}", endpoint, status)
                } else {
                    write!(f, "{} returned HTTP {}: {}", endpoint, status, body)
                }
            }
            Error::Decode { endpoint, source } => {
                write!(f, "Invalid response from {}: {}", endpoint, source)
            }
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Decode { source, .. } => Some(source),
            Error::Status { .. } | Error::InvalidRequest(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = Error::Status {
            endpoint: "/api/trends".to_string(),
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "/api/trends returned HTTP 500");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_decode_has_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Decode {
            endpoint: "/health".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Invalid response from /health"));
    }
}
