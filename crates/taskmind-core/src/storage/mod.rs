//! Persistence layer: SQLite task store and TOML configuration.

mod config;
pub mod database;

pub use config::{AdvisorConfig, Config, DEFAULT_MODEL};
pub use database::TaskStore;

use std::path::PathBuf;

/// Returns the data directory, `~/.config/taskmind[-dev]/` by default.
///
/// `TASKMIND_DATA_DIR` overrides the location entirely (used for test
/// isolation); otherwise `TASKMIND_ENV=dev` selects the development
/// directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = match std::env::var("TASKMIND_DATA_DIR") {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("TASKMIND_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("taskmind-dev")
            } else {
                base_dir.join("taskmind")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
