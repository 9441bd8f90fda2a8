//! Deadline Parsing and Display
//!
//! Deadlines are kept as the raw `datetime-local` string the browser
//! produces (`2024-01-01T10:00`). These helpers turn them into values
//! and the day/month/year + 24h labels shown next to each task.

use chrono::NaiveDateTime;

/// Formats accepted from `<input type="datetime-local">`
const DEADLINE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"];

/// Date and time labels for a deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineLabel {
    /// `dd/mm/yyyy`
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

/// Parse a deadline string, `None` when empty or malformed.
pub fn parse_deadline(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DEADLINE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Build display labels for a deadline string.
pub fn format_deadline(raw: &str) -> Option<DeadlineLabel> {
    parse_deadline(raw).map(|at| DeadlineLabel {
        date: at.format("%d/%m/%Y").to_string(),
        time: at.format("%H:%M").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_minutes_precision() {
        let at = parse_deadline("2024-01-01T10:00").unwrap();
        assert_eq!(at.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(at.hour(), 10);
    }

    #[test]
    fn test_parse_seconds_precision() {
        let at = parse_deadline("2024-03-05T08:15:30").unwrap();
        assert_eq!(at.second(), 30);
        assert!(parse_deadline("2024-03-05T08:15:30.250").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_deadline(""), None);
        assert_eq!(parse_deadline("   "), None);
        assert_eq!(parse_deadline("tomorrow"), None);
        assert_eq!(parse_deadline("2024-13-01T10:00"), None);
    }

    #[test]
    fn test_format_en_gb() {
        let label = format_deadline("2024-01-31T09:05").unwrap();
        assert_eq!(label.date, "31/01/2024");
        assert_eq!(label.time, "09:05");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_deadline(""), None);
    }
}
