//! Deadline urgency analysis.
//!
//! Maps a (deadline, now) pair to a score contribution and a reasoning
//! phrase. Distance is measured in ceiling days, so any deadline within the
//! next 24 hours -- or already behind us -- counts as "within 1 day".

use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Urgency assessment for a deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineUrgency {
    /// Ceiling day count from now to the deadline (negative when past)
    pub days_until: i64,
    /// Score contribution
    pub contribution: f64,
    /// Reasoning phrase
    pub phrase: String,
}

/// Ceiling number of days from `now` to `deadline`.
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (deadline - now).num_seconds();
    (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY)
}

/// Assess how urgent a deadline is at instant `now`.
pub fn assess(deadline: DateTime<Utc>, now: DateTime<Utc>) -> DeadlineUrgency {
    let days = days_until(deadline, now);
    let (contribution, phrase) = if days <= 1 {
        (0.8, "Deadline is within 1 day".to_string())
    } else if days <= 3 {
        (0.6, "Deadline is within 3 days".to_string())
    } else if days <= 7 {
        (0.3, "Deadline is within a week".to_string())
    } else {
        (0.0, format!("Deadline is in {days} days"))
    };

    DeadlineUrgency {
        days_until: days,
        contribution,
        phrase,
    }
}
