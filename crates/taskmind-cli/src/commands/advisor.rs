//! Advisory engine status commands.

use clap::Subcommand;
use taskmind_core::{Advisor, Config};

#[derive(Subcommand)]
pub enum AdvisorAction {
    /// Attempt to load the classifier backend and report the settled status
    Init,
    /// Show the advisor status without initializing.
    ///
    /// Each CLI invocation is a fresh process, so this reports
    /// "uninitialized" until `advisor init` runs in the same process;
    /// it exists to surface the configured backend alongside the status.
    Status,
}

pub fn run(action: AdvisorAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let advisor = Advisor::from_config(&config.advisor);

    match action {
        AdvisorAction::Init => {
            let runtime = tokio::runtime::Runtime::new()?;
            let status = runtime.block_on(advisor.initialize());
            println!("{status}");
        }
        AdvisorAction::Status => {
            let backend = match (&config.advisor.endpoint, config.advisor.enabled) {
                (Some(endpoint), true) => format!("remote ({endpoint})"),
                (None, true) => "none configured".to_string(),
                (_, false) => "disabled".to_string(),
            };
            println!("status: {}", advisor.status());
            println!("backend: {backend}");
            println!("model: {}", config.advisor.model);
        }
    }
    Ok(())
}
