use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskmind", version, about = "Taskmind CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Priority suggestion for a task
    Advise {
        #[command(subcommand)]
        action: commands::advise::AdviseAction,
    },
    /// Productivity insights over the task collection
    Insights {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Task statistics
    Stats,
    /// Advisory engine status
    Advisor {
        #[command(subcommand)]
        action: commands::advisor::AdvisorAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Advise { action } => commands::advise::run(action),
        Commands::Insights { json } => commands::insights::run(json),
        Commands::Stats => commands::stats::run(),
        Commands::Advisor { action } => commands::advisor::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
