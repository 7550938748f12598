use std::fmt;
use std::path::Path;

use questdash_types::DashboardPayload;

/// The two user-visible failure kinds. Everything the load path can
/// hit collapses into one of these; they differ only in banner text.
#[derive(Debug)]
pub enum LoadError {
    /// Payload file missing or unreadable (the original's fetch_failure)
    Unavailable(std::io::Error),
    /// Payload text is not valid JSON or fails envelope validation
    InvalidFormat(questdash_types::Error),
}

impl LoadError {
    /// Fixed banner message for this failure kind.
    pub fn banner_message(&self) -> &'static str {
        match self {
            LoadError::Unavailable(_) => {
                "Dashboard data unavailable. Ensure dashboard-data.json exists and is readable."
            }
            LoadError::InvalidFormat(_) => {
                "Data format invalid. Regenerate dashboard-data.json and retry."
            }
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Unavailable(err) => write!(f, "dashboard data unavailable: {}", err),
            LoadError::InvalidFormat(err) => write!(f, "dashboard data invalid: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Unavailable(err) => Some(err),
            LoadError::InvalidFormat(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Unavailable(err)
    }
}

impl From<questdash_types::Error> for LoadError {
    fn from(err: questdash_types::Error) -> Self {
        LoadError::InvalidFormat(err)
    }
}

/// Load and validate the dashboard payload.
///
/// One read, one parse, no retries: the render either gets a full
/// payload or a single tagged failure.
pub fn load_dashboard(path: &Path) -> Result<DashboardPayload, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let payload = DashboardPayload::parse(&text)?;
    Ok(payload)
}
