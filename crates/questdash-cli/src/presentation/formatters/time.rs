use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format a calendar date string as "Mon D, YYYY".
///
/// Missing/empty input renders as "Not available"; anything that does
/// not parse as a UTC calendar date is returned unchanged so that a
/// malformed record still shows what the generator wrote.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|s| !s.is_empty()) else {
        return "Not available".to_string();
    };

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format a full timestamp as "Mon D, YYYY, HH:MM AM/PM UTC".
///
/// Same contract as [`format_date`]: missing -> "Not available",
/// unparsable -> raw input unchanged.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|s| !s.is_empty()) else {
        return "Not available".to_string();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.and_utc())
        });

    match parsed {
        Ok(dt) => dt.format("%b %-d, %Y, %I:%M %p UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None), "Not available");
        assert_eq!(format_date(Some("")), "Not available");
    }

    #[test]
    fn test_format_date_utc_anchored() {
        // Anchored to the UTC calendar date: no timezone drift to Mar 4/6
        assert_eq!(format_date(Some("2024-03-05")), "Mar 5, 2024");
        assert_eq!(format_date(Some("2023-12-31")), "Dec 31, 2023");
    }

    #[test]
    fn test_format_date_unparsable_passthrough() {
        assert_eq!(format_date(Some("soon")), "soon");
        assert_eq!(format_date(Some("2024-13-40")), "2024-13-40");
    }

    #[test]
    fn test_format_timestamp_rfc3339() {
        assert_eq!(
            format_timestamp(Some("2024-03-05T14:30:00Z")),
            "Mar 5, 2024, 02:30 PM UTC"
        );
    }

    #[test]
    fn test_format_timestamp_offset_normalized_to_utc() {
        assert_eq!(
            format_timestamp(Some("2024-03-05T14:30:00+02:00")),
            "Mar 5, 2024, 12:30 PM UTC"
        );
    }

    #[test]
    fn test_format_timestamp_missing_and_unparsable() {
        assert_eq!(format_timestamp(None), "Not available");
        assert_eq!(format_timestamp(Some("yesterday-ish")), "yesterday-ish");
    }
}
