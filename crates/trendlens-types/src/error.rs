use std::fmt;

/// Result type for trendlens-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Timeframe string is not one of the supported lookback windows
    UnknownTimeframe(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTimeframe(value) => write!(
                f,
                "Unknown timeframe '{}' (expected one of: 1m, 3m, 12m, 5y)",
                value
            ),
        }
    }
}

impl std::error::Error for Error {}
