use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::status::QuestStatus;

/// Top-level dashboard payload.
///
/// Produced once per generation run by an external tool; consumers
/// load it, render it, and discard it. `parse` is the only way to
/// construct one from wire data.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPayload {
    pub generated_at: Option<String>,
    pub summary: Summary,
    pub quests: Vec<Quest>,
    pub trends: Option<Trends>,
}

/// Pre-computed totals keyed by status.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: u64,
    pub by_status: HashMap<String, u64>,
}

impl Summary {
    /// Count for a status, defaulting to 0 for missing keys.
    pub fn count(&self, status: QuestStatus) -> u64 {
        self.by_status.get(status.as_str()).copied().unwrap_or(0)
    }
}

/// One tracked quest record.
///
/// Every field except `status` is optional: records are extracted
/// leniently and wrong-typed or empty fields become `None`.
#[derive(Debug, Clone, Serialize)]
pub struct Quest {
    pub quest_id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub elevator_pitch: Option<String>,
    pub status: QuestStatus,
    pub completed_date: Option<String>,
    pub updated_at: Option<String>,
    pub plan_iteration: Option<f64>,
    pub fix_iteration: Option<f64>,
}

/// Time-bucketed per-status counts.
#[derive(Debug, Clone, Serialize)]
pub struct Trends {
    pub points: Vec<TrendPoint>,
}

/// One trend observation. Points without a string `period` are kept
/// here but excluded from chart rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub period: Option<String>,
    pub counts: HashMap<String, u64>,
}

impl TrendPoint {
    /// Count for a status at this point, defaulting to 0.
    pub fn count(&self, status: QuestStatus) -> u64 {
        self.counts.get(status.as_str()).copied().unwrap_or(0)
    }
}

impl DashboardPayload {
    /// Parse and validate raw payload text.
    ///
    /// The envelope is validated strictly: the document must be an
    /// object with an object `summary`, an array `quests` and an
    /// object `summary.by_status`. Anything else is `InvalidJson`.
    /// Per-record contents are never validated; see module docs.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Validate the envelope of an already-parsed document and
    /// extract the payload from it.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = value.as_object().ok_or(Error::InvalidJson)?;
        let summary = root
            .get("summary")
            .and_then(Value::as_object)
            .ok_or(Error::InvalidJson)?;
        let quests = root
            .get("quests")
            .and_then(Value::as_array)
            .ok_or(Error::InvalidJson)?;
        let by_status = summary
            .get("by_status")
            .and_then(Value::as_object)
            .ok_or(Error::InvalidJson)?;

        Ok(DashboardPayload {
            generated_at: non_empty_str(root.get("generated_at")),
            summary: Summary {
                total: summary.get("total").and_then(Value::as_u64).unwrap_or(0),
                by_status: by_status
                    .iter()
                    .filter_map(|(k, v)| v.as_u64().map(|n| (k.clone(), n)))
                    .collect(),
            },
            quests: quests.iter().map(Quest::from_value).collect(),
            trends: extract_trends(root.get("trends")),
        })
    }
}

impl Quest {
    /// Lenient extraction: wrong-typed fields become `None`, an
    /// unrecognized or missing status becomes `Unknown`. Non-object
    /// entries yield an all-`None` record rather than an error.
    pub fn from_value(value: &Value) -> Self {
        Quest {
            quest_id: non_empty_str(value.get("quest_id")),
            slug: non_empty_str(value.get("slug")),
            title: non_empty_str(value.get("title")),
            elevator_pitch: non_empty_str(value.get("elevator_pitch")),
            status: QuestStatus::from_raw(value.get("status").and_then(Value::as_str)),
            completed_date: non_empty_str(value.get("completed_date")),
            updated_at: non_empty_str(value.get("updated_at")),
            plan_iteration: value.get("plan_iteration").and_then(Value::as_f64),
            fix_iteration: value.get("fix_iteration").and_then(Value::as_f64),
        }
    }
}

/// String field access with the original consumer's truthiness rules:
/// missing, non-string and empty-string all count as absent.
fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn extract_trends(value: Option<&Value>) -> Option<Trends> {
    let points = value?.get("points")?.as_array()?;
    Some(Trends {
        points: points
            .iter()
            .map(|point| TrendPoint {
                // The plot filter is "has a string period": an empty
                // string is still a string and stays plottable, unlike
                // the truthiness rules applied to card fields.
                period: point
                    .get("period")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                counts: point
                    .as_object()
                    .map(|obj| {
                        obj.iter()
                            .filter(|(k, _)| k.as_str() != "period")
                            .filter_map(|(k, v)| v.as_u64().map(|n| (k.clone(), n)))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect(),
    })
}
