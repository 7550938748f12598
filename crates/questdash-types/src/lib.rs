//! Schema types for the quest dashboard payload.
//!
//! The payload (`dashboard-data.json`) is produced by an external
//! generator; this crate only consumes it. Validation is deliberately
//! asymmetric: the top-level envelope is checked strictly, while
//! individual quest records are extracted leniently so that a single
//! malformed field never rejects an otherwise usable payload.

mod error;
mod payload;
mod status;

pub use error::{Error, Result};
pub use payload::{DashboardPayload, Quest, Summary, TrendPoint, Trends};
pub use status::{QuestStatus, STATUS_ORDER};
