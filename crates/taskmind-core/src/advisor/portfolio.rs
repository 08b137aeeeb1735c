//! Portfolio analysis: reduce a task collection into insights and
//! recommendations.
//!
//! Statements are appended in a fixed order, so reducing the same input
//! twice yields an identical report. The analyzer never aborts on a single
//! bad record; malformed fields were already degraded to absent at the
//! storage boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::task::{Priority, Task};

/// Insight shown when the input collection is empty.
pub const EMPTY_INSIGHT: &str = "No tasks available for analysis";

/// Recommendation shown when the input collection is empty.
pub const EMPTY_RECOMMENDATION: &str = "Start by adding some tasks to get personalized insights";

/// The analyzer's output: ordered insight and recommendation statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Reduces a task collection into a [`PortfolioReport`].
pub struct PortfolioAnalyzer;

impl PortfolioAnalyzer {
    /// Analyze a task set at instant `now`.
    pub fn analyze(tasks: &[Task], now: DateTime<Utc>) -> PortfolioReport {
        if tasks.is_empty() {
            return PortfolioReport {
                insights: vec![EMPTY_INSIGHT.to_string()],
                recommendations: vec![EMPTY_RECOMMENDATION.to_string()],
            };
        }

        let mut insights = Vec::new();
        let mut recommendations = Vec::new();

        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
        let rate = ((completed as f64 / total as f64) * 100.0).round() as i64;

        insights.push(format!(
            "You have completed {completed} out of {total} tasks ({rate}% completion rate)"
        ));

        if overdue > 0 {
            insights.push(format!(
                "You have {overdue} overdue tasks that need attention"
            ));
            recommendations.push(
                "Focus on completing overdue tasks to improve your productivity".to_string(),
            );
        }

        let high = count_priority(tasks, Priority::High);
        let medium = count_priority(tasks, Priority::Medium);
        let low = count_priority(tasks, Priority::Low);
        if high > medium + low {
            recommendations.push(
                "Consider breaking down high-priority tasks into smaller, manageable steps"
                    .to_string(),
            );
        }

        // Strict boundaries: a rate of exactly 50 or 80 triggers neither.
        if rate < 50 {
            recommendations.push(
                "Try the Pomodoro Technique: work for 25 minutes, then take a 5-minute break"
                    .to_string(),
            );
        } else if rate > 80 {
            insights.push("Great job! You're maintaining excellent productivity".to_string());
        }

        let categories: HashSet<&str> = tasks.iter().map(|t| t.category.as_str()).collect();
        if categories.len() > 5 {
            recommendations.push(
                "Consider consolidating similar categories to better organize your tasks"
                    .to_string(),
            );
        }

        PortfolioReport {
            insights,
            recommendations,
        }
    }
}

fn count_priority(tasks: &[Task], priority: Priority) -> usize {
    tasks.iter().filter(|t| t.priority == priority).count()
}
