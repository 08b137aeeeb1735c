//! Portfolio insights command.

use chrono::Utc;
use taskmind_core::{Advisor, TaskStore};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    let tasks = store.list()?;

    let advisor = Advisor::heuristic_only();
    let report = advisor.analyze_portfolio(&tasks, Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Insights:");
        for insight in &report.insights {
            println!("  - {insight}");
        }
        println!("Recommendations:");
        for recommendation in &report.recommendations {
            println!("  - {recommendation}");
        }
    }
    Ok(())
}
