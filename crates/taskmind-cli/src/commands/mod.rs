pub mod advise;
pub mod advisor;
pub mod config;
pub mod insights;
pub mod stats;
pub mod task;

use chrono::{DateTime, NaiveDate, Utc};
use taskmind_core::Priority;

/// Parse a deadline given as RFC 3339 or as a plain `YYYY-MM-DD` date
/// (interpreted as midnight UTC).
pub fn parse_deadline(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!(
        "invalid deadline '{value}': expected RFC 3339 or YYYY-MM-DD"
    ))
}

/// Parse a priority argument. Unlike stored rows, CLI input is strict.
pub fn parse_priority(value: &str) -> Result<Priority, String> {
    match value {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        "none" => Ok(Priority::None),
        other => Err(format!(
            "invalid priority '{other}': expected high, medium, low, or none"
        )),
    }
}

/// Parse a priority filter value, where `"all"` selects every class.
pub fn parse_priority_filter(value: &str) -> Result<Option<Priority>, String> {
    if value == "all" {
        Ok(None)
    } else {
        parse_priority(value).map(Some)
    }
}
