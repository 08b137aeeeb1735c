//! Priority and productivity advisory engine.
//!
//! The advisor proposes a priority class for a single task (with a
//! confidence and human-readable justification) and reduces a task
//! collection into insights and recommendations. An optional
//! emotion-classification backend sharpens the heuristic; the engine stays
//! fully functional without one.

pub mod classifier;
pub mod lexicon;
pub mod portfolio;
pub mod remote;
pub mod scorer;
pub mod temporal;

use std::sync::Arc;

use chrono::{DateTime, Utc};

pub use classifier::{
    ClassifierAdapter, ClassifierProvider, ClassifierStatus, Device, EmotionScore, LoadOptions,
    NullProvider, Precision, TextClassifier,
};
pub use portfolio::{PortfolioAnalyzer, PortfolioReport};
pub use remote::{RemoteClassifier, RemoteProvider};
pub use scorer::{PriorityScorer, PriorityVerdict};
pub use temporal::DeadlineUrgency;

use crate::storage::AdvisorConfig;
use crate::task::Task;

/// Facade over the advisory engine.
///
/// Holds the shared classifier adapter; scoring and analysis are otherwise
/// pure. Construct one per process and share it, or build throwaway
/// instances with stub providers in tests.
pub struct Advisor {
    adapter: Arc<ClassifierAdapter>,
    scorer: PriorityScorer,
}

impl Advisor {
    /// Build an advisor over the given classifier provider.
    pub fn new(provider: Box<dyn ClassifierProvider>) -> Self {
        let adapter = Arc::new(ClassifierAdapter::new(provider));
        let scorer = PriorityScorer::new(adapter.clone());
        Self { adapter, scorer }
    }

    /// Build an advisor from configuration: a remote provider when an
    /// endpoint is configured and the advisor is enabled, otherwise the
    /// always-unavailable null provider.
    pub fn from_config(config: &AdvisorConfig) -> Self {
        match (&config.endpoint, config.enabled) {
            (Some(endpoint), true) => Self::new(Box::new(RemoteProvider::new(
                endpoint.clone(),
                config.model.clone(),
                config.api_token.clone(),
            ))),
            _ => Self::new(Box::new(NullProvider)),
        }
    }

    /// Advisor with no classifier backend.
    pub fn heuristic_only() -> Self {
        Self::new(Box::new(NullProvider))
    }

    /// Settle the classifier status. Never fails visibly.
    pub async fn initialize(&self) -> ClassifierStatus {
        self.adapter.initialize().await
    }

    /// Current classifier status.
    pub fn status(&self) -> ClassifierStatus {
        self.adapter.status()
    }

    /// Score one task's attributes into a priority verdict.
    pub async fn score_priority(
        &self,
        title: &str,
        description: Option<&str>,
        deadline: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> PriorityVerdict {
        self.scorer.score(title, description, deadline, now).await
    }

    /// Score a stored task.
    pub async fn score_task(&self, task: &Task, now: DateTime<Utc>) -> PriorityVerdict {
        self.score_priority(&task.title, task.description.as_deref(), task.deadline, now)
            .await
    }

    /// Reduce a task collection into a portfolio report.
    pub fn analyze_portfolio(&self, tasks: &[Task], now: DateTime<Utc>) -> PortfolioReport {
        PortfolioAnalyzer::analyze(tasks, now)
    }
}
