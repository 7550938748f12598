use std::fmt;

/// Result type for questdash-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a dashboard payload
#[derive(Debug)]
pub enum Error {
    /// Payload is not valid JSON or fails envelope validation.
    ///
    /// Parse failures and shape failures are deliberately collapsed
    /// into a single kind; callers surface one "invalid format"
    /// message for both.
    InvalidJson,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidJson => write!(f, "invalid dashboard payload"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Error::InvalidJson
    }
}
