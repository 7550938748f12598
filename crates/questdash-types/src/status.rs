use serde::{Deserialize, Serialize};

/// Fixed display order for statuses: charts, KPIs and legends all
/// iterate in this order.
pub const STATUS_ORDER: [QuestStatus; 5] = [
    QuestStatus::InProgress,
    QuestStatus::Blocked,
    QuestStatus::Abandoned,
    QuestStatus::Finished,
    QuestStatus::Unknown,
];

/// Lifecycle status of a quest.
///
/// The wire format uses snake_case strings; anything outside the five
/// known values degrades to `Unknown` rather than failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    InProgress,
    Blocked,
    Abandoned,
    Finished,
    #[serde(other)]
    Unknown,
}

impl QuestStatus {
    /// Map a raw status string to a status, degrading to `Unknown`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("in_progress") => QuestStatus::InProgress,
            Some("blocked") => QuestStatus::Blocked,
            Some("abandoned") => QuestStatus::Abandoned,
            Some("finished") => QuestStatus::Finished,
            _ => QuestStatus::Unknown,
        }
    }

    /// Wire-format key, also used to look up counts in `by_status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::InProgress => "in_progress",
            QuestStatus::Blocked => "blocked",
            QuestStatus::Abandoned => "abandoned",
            QuestStatus::Finished => "finished",
            QuestStatus::Unknown => "unknown",
        }
    }

    /// Human-readable label for badges and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            QuestStatus::InProgress => "In Progress",
            QuestStatus::Blocked => "Blocked",
            QuestStatus::Abandoned => "Abandoned",
            QuestStatus::Finished => "Finished",
            QuestStatus::Unknown => "Unknown",
        }
    }

    /// Badge style class for card rendering.
    pub fn badge_class(&self) -> &'static str {
        match self {
            QuestStatus::InProgress => "badge-in_progress",
            QuestStatus::Blocked => "badge-blocked",
            QuestStatus::Abandoned => "badge-abandoned",
            QuestStatus::Finished => "badge-finished",
            QuestStatus::Unknown => "badge-unknown",
        }
    }

    /// Fixed palette entry as (r, g, b).
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            QuestStatus::InProgress => (0x60, 0xa5, 0xfa),
            QuestStatus::Blocked => (0xf5, 0x9e, 0x0b),
            QuestStatus::Abandoned => (0xf8, 0x71, 0x71),
            QuestStatus::Finished => (0x34, 0xd3, 0x99),
            QuestStatus::Unknown => (0xa7, 0x8b, 0xfa),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_statuses() {
        assert_eq!(QuestStatus::from_raw(Some("finished")), QuestStatus::Finished);
        assert_eq!(
            QuestStatus::from_raw(Some("in_progress")),
            QuestStatus::InProgress
        );
    }

    #[test]
    fn test_from_raw_degrades_to_unknown() {
        assert_eq!(QuestStatus::from_raw(Some("archived")), QuestStatus::Unknown);
        assert_eq!(QuestStatus::from_raw(Some("")), QuestStatus::Unknown);
        assert_eq!(QuestStatus::from_raw(None), QuestStatus::Unknown);
    }

    #[test]
    fn test_unknown_label_and_class() {
        let status = QuestStatus::from_raw(Some("not-a-status"));
        assert_eq!(status.label(), "Unknown");
        assert_eq!(status.badge_class(), "badge-unknown");
    }

    #[test]
    fn test_order_is_stable() {
        let keys: Vec<&str> = STATUS_ORDER.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            keys,
            vec!["in_progress", "blocked", "abandoned", "finished", "unknown"]
        );
    }
}
