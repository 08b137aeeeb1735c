//! Task types for the advisory-driven task manager.
//!
//! A [`Task`] is the unit of work the advisor reads: title, optional
//! description, a discrete priority class, a free-form category, an optional
//! deadline, and a completion flag. The advisor never mutates tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Discrete priority class of a task.
///
/// Always one of the four values; a task with no meaningful priority carries
/// `Priority::None` rather than an absent field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    None,
}

impl Priority {
    /// Stable string form, matching the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::None => "none",
        }
    }

    /// Parse a stored priority string, degrading unknown values to `None`.
    ///
    /// Storage rows are never rejected for a bad priority field.
    pub fn parse_lenient(value: &str) -> Priority {
        match value {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::None
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque stable identifier
    pub id: String,
    /// Non-empty title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Priority class
    pub priority: Priority,
    /// Free-form category label
    pub category: String,
    /// Optional absolute deadline
    pub deadline: Option<DateTime<Utc>>,
    /// Completion flag
    pub completed: bool,
    /// Creation instant
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task with the given identity, title, and category.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            priority: Priority::None,
            category: category.into(),
            deadline: None,
            completed: false,
            created_at,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority class.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the deadline.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Mark completed.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the deadline has passed without the task being completed.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) => deadline < now && !self.completed,
            None => false,
        }
    }
}

/// Completion-status axis of a task filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Parse a filter value. The sentinel `"all"` selects everything.
    pub fn parse(value: &str) -> Option<StatusFilter> {
        match value {
            "all" => Some(StatusFilter::All),
            "pending" => Some(StatusFilter::Pending),
            "completed" => Some(StatusFilter::Completed),
            _ => None,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// In-memory filter over a task list.
///
/// `None` on the priority or category axis means "all". The literal string
/// `"all"` is reserved as the sentinel at the parse boundary; a stored
/// category named "all" cannot be selected individually.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl TaskFilter {
    /// Filter selecting every task.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a completion status.
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Restrict to one priority class.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether a task passes every axis of the filter.
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
        };
        let priority_ok = self.priority.map_or(true, |p| task.priority == p);
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| task.category == c);
        status_ok && priority_ok && category_ok
    }

    /// Apply the filter, preserving input order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Dashboard summary over a task set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStats {
    /// Total number of tasks
    pub total: usize,
    /// Completed tasks
    pub completed: usize,
    /// Pending tasks (total - completed)
    pub pending: usize,
    /// High-priority tasks not yet completed
    pub high_priority_pending: usize,
    /// Tasks whose deadline has passed without completion
    pub overdue: usize,
    /// Completion rate as a whole percentage (0 for an empty set)
    pub completion_rate: u32,
}

impl TaskStats {
    /// Compute the summary for a task set at a given instant.
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let high_priority_pending = tasks
            .iter()
            .filter(|t| t.priority == Priority::High && !t.completed)
            .count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
        let completion_rate = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        TaskStats {
            total,
            completed,
            pending: total - completed,
            high_priority_pending,
            overdue,
            completion_rate,
        }
    }
}

/// Distinct category labels present in a task set, in first-seen order.
pub fn distinct_categories(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for task in tasks {
        if seen.insert(task.category.as_str()) {
            categories.push(task.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_task(id: &str) -> Task {
        Task::new(id, format!("Task {id}"), "work", Utc::now())
    }

    #[test]
    fn test_priority_parse_lenient() {
        assert_eq!(Priority::parse_lenient("high"), Priority::High);
        assert_eq!(Priority::parse_lenient("medium"), Priority::Medium);
        assert_eq!(Priority::parse_lenient("low"), Priority::Low);
        assert_eq!(Priority::parse_lenient("none"), Priority::None);
        // Out-of-range values degrade instead of failing
        assert_eq!(Priority::parse_lenient("URGENT"), Priority::None);
        assert_eq!(Priority::parse_lenient(""), Priority::None);
    }

    #[test]
    fn test_is_overdue() {
        let now = Utc::now();
        let task = make_task("1").with_deadline(now - Duration::hours(1));
        assert!(task.is_overdue(now));

        let done = task.clone().with_completed(true);
        assert!(!done.is_overdue(now));

        let future = make_task("2").with_deadline(now + Duration::hours(1));
        assert!(!future.is_overdue(now));

        let no_deadline = make_task("3");
        assert!(!no_deadline.is_overdue(now));
    }

    #[test]
    fn test_filter_axes() {
        let now = Utc::now();
        let tasks = vec![
            make_task("1").with_priority(Priority::High),
            make_task("2").with_completed(true),
            Task::new("3", "Groceries", "home", now),
        ];

        let pending = TaskFilter::all().with_status(StatusFilter::Pending);
        assert_eq!(pending.apply(&tasks).len(), 2);

        let high = TaskFilter::all().with_priority(Priority::High);
        assert_eq!(high.apply(&tasks).len(), 1);

        let home = TaskFilter::all().with_category("home");
        let matched = home.apply(&tasks);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "3");
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::parse("all"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse("pending"), Some(StatusFilter::Pending));
        assert_eq!(
            StatusFilter::parse("completed"),
            Some(StatusFilter::Completed)
        );
        assert_eq!(StatusFilter::parse("done"), None);
        // Sentinel is case-sensitive
        assert_eq!(StatusFilter::parse("All"), None);
    }

    #[test]
    fn test_stats_compute() {
        let now = Utc::now();
        let tasks = vec![
            make_task("1").with_priority(Priority::High),
            make_task("2").with_completed(true),
            make_task("3")
                .with_deadline(now - Duration::days(1))
                .with_priority(Priority::High),
        ];

        let stats = TaskStats::compute(&tasks, now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.high_priority_pending, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 33);
    }

    #[test]
    fn test_stats_empty() {
        let stats = TaskStats::compute(&[], Utc::now());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0);
    }

    #[test]
    fn test_distinct_categories() {
        let now = Utc::now();
        let tasks = vec![
            Task::new("1", "a", "work", now),
            Task::new("2", "b", "home", now),
            Task::new("3", "c", "work", now),
        ];
        assert_eq!(distinct_categories(&tasks), vec!["work", "home"]);
    }
}
