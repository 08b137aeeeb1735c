//! Task statistics command.

use chrono::Utc;
use taskmind_core::task::TaskStats;
use taskmind_core::TaskStore;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    let stats = TaskStats::compute(&store.list()?, Utc::now());
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
