//! Task management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use taskmind_core::task::{StatusFilter, Task, TaskFilter};
use taskmind_core::TaskStore;
use uuid::Uuid;

use super::{parse_deadline, parse_priority, parse_priority_filter};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Category label (default: general)
        #[arg(long, default_value = "general")]
        category: String,
        /// Priority: high, medium, low, or none (default: none)
        #[arg(long, default_value = "none")]
        priority: String,
        /// Deadline as RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by status: all, pending, or completed
        #[arg(long, default_value = "all")]
        status: String,
        /// Filter by priority: all, high, medium, low, or none
        #[arg(long, default_value = "all")]
        priority: String,
        /// Filter by category ("all" selects every category)
        #[arg(long, default_value = "all")]
        category: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<String>,
        /// New deadline as RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
        /// Set completed status
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Mark a task completed
    Complete {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;

    match action {
        TaskAction::Create {
            title,
            description,
            category,
            priority,
            deadline,
        } => {
            let mut task = Task::new(Uuid::new_v4().to_string(), title, category, Utc::now())
                .with_priority(parse_priority(&priority)?);
            if let Some(description) = description {
                task = task.with_description(description);
            }
            if let Some(deadline) = deadline {
                task = task.with_deadline(parse_deadline(&deadline)?);
            }
            store.insert(&task)?;
            println!("Task created: {}", task.id);
        }
        TaskAction::List {
            status,
            priority,
            category,
            json,
        } => {
            let status =
                StatusFilter::parse(&status).ok_or_else(|| format!("invalid status '{status}'"))?;
            let mut filter = TaskFilter::all().with_status(status);
            if let Some(priority) = parse_priority_filter(&priority)? {
                filter = filter.with_priority(priority);
            }
            if category != "all" {
                filter = filter.with_category(category);
            }

            let tasks = filter.apply(&store.list()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks found");
            } else {
                for task in &tasks {
                    let mark = if task.completed { "x" } else { " " };
                    let deadline = task
                        .deadline
                        .map(|d| format!(" due {}", d.format("%Y-%m-%d")))
                        .unwrap_or_default();
                    println!(
                        "[{mark}] {}  {} ({}, {}){deadline}",
                        task.id, task.title, task.priority, task.category
                    );
                }
            }
        }
        TaskAction::Get { id } => {
            let task = store.get(&id)?.ok_or_else(|| format!("no such task: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Update {
            id,
            title,
            description,
            category,
            priority,
            deadline,
            completed,
        } => {
            let mut task = store.get(&id)?.ok_or_else(|| format!("no such task: {id}"))?;
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(description) = description {
                task.description = Some(description);
            }
            if let Some(category) = category {
                task.category = category;
            }
            if let Some(priority) = priority {
                task.priority = parse_priority(&priority)?;
            }
            if let Some(deadline) = deadline {
                task.deadline = Some(parse_deadline(&deadline)?);
            }
            if let Some(completed) = completed {
                task.completed = completed;
            }
            store.save(&task)?;
            println!("Task updated: {id}");
        }
        TaskAction::Complete { id } => {
            if !store.set_completed(&id, true)? {
                return Err(format!("no such task: {id}").into());
            }
            println!("Task completed: {id}");
        }
        TaskAction::Delete { id } => {
            if !store.delete(&id)? {
                return Err(format!("no such task: {id}").into());
            }
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
