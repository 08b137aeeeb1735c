//! # Taskmind Core Library
//!
//! Core business logic for Taskmind, a task manager with an embedded
//! advisory engine. The library follows a CLI-first philosophy: all
//! operations are available through a standalone CLI binary, and any GUI
//! would be a thin layer over this same crate.
//!
//! ## Architecture
//!
//! - **Task model**: priority classes, filters, and dashboard statistics
//! - **Advisor**: deterministic priority scoring (keyword lexicon +
//!   deadline urgency) with an opportunistic emotion-classifier boost, and
//!   portfolio analysis producing insights and recommendations
//! - **Storage**: SQLite-based task store and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Advisor`]: facade over the advisory engine
//! - [`ClassifierAdapter`]: optional-model wrapper with graceful degradation
//! - [`TaskStore`]: task persistence
//! - [`Config`]: application configuration management

pub mod advisor;
pub mod error;
pub mod storage;
pub mod task;

pub use advisor::{
    Advisor, ClassifierAdapter, ClassifierStatus, PortfolioAnalyzer, PortfolioReport,
    PriorityScorer, PriorityVerdict,
};
pub use error::{ClassifierError, ConfigError, CoreError, DatabaseError};
pub use storage::{AdvisorConfig, Config, TaskStore};
pub use task::{Priority, StatusFilter, Task, TaskFilter, TaskStats};
