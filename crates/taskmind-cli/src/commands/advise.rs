//! Priority suggestion commands.

use chrono::Utc;
use clap::Subcommand;
use taskmind_core::{Advisor, Config, PriorityVerdict, TaskStore};

use super::parse_deadline;

#[derive(Subcommand)]
pub enum AdviseAction {
    /// Score a stored task
    Task {
        /// Task ID
        id: String,
        /// Write the suggested priority back to the task
        #[arg(long)]
        apply: bool,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Score ad-hoc task attributes without storing anything
    Adhoc {
        /// Task title
        #[arg(long)]
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Deadline as RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AdviseAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let advisor = Advisor::from_config(&config.advisor);
    let runtime = tokio::runtime::Runtime::new()?;
    let now = Utc::now();

    match action {
        AdviseAction::Task { id, apply, json } => {
            let store = TaskStore::open()?;
            let task = store.get(&id)?.ok_or_else(|| format!("no such task: {id}"))?;

            let verdict = runtime.block_on(async {
                advisor.initialize().await;
                advisor.score_task(&task, now).await
            });
            print_verdict(&verdict, json)?;

            if apply {
                store.set_priority(&id, verdict.suggested_priority)?;
                println!("Applied priority '{}' to task {id}", verdict.suggested_priority);
            }
        }
        AdviseAction::Adhoc {
            title,
            description,
            deadline,
            json,
        } => {
            let deadline = deadline.map(|d| parse_deadline(&d)).transpose()?;
            let verdict = runtime.block_on(async {
                advisor.initialize().await;
                advisor
                    .score_priority(&title, description.as_deref(), deadline, now)
                    .await
            });
            print_verdict(&verdict, json)?;
        }
    }
    Ok(())
}

fn print_verdict(verdict: &PriorityVerdict, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(verdict)?);
    } else {
        println!(
            "Suggested priority: {} (confidence {:.2})",
            verdict.suggested_priority, verdict.confidence
        );
        println!("Reasoning: {}", verdict.reasoning_text());
    }
    Ok(())
}
