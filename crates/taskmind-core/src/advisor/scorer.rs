//! Per-task priority scoring.
//!
//! Composes the keyword lexicon, the deadline analyzer, and the optional
//! classifier into a single [`PriorityVerdict`]. Scoring is deterministic
//! given the inputs and the classifier's availability and output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::classifier::{ClassifierAdapter, ClassifierStatus};
use super::{lexicon, temporal};
use crate::task::Priority;

/// Score adjustment when the classifier detects urgency-related sentiment.
pub const SENTIMENT_BOOST: f64 = 0.2;

/// Reasoning phrase used when no rule fired.
pub const DEFAULT_REASONING: &str = "Analysis based on content and deadline";

const SENTIMENT_PHRASE: &str = "AI detected urgency-related sentiment";

/// The scorer's output: a priority class with confidence and justification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityVerdict {
    /// Proposed priority class
    pub suggested_priority: Priority,
    /// Confidence in [0.0, 1.0], rounded to two decimals
    pub confidence: f64,
    /// Ordered justification phrases; never empty
    pub reasoning: Vec<String>,
}

impl PriorityVerdict {
    /// Display form of the reasoning, phrases joined by "; ".
    pub fn reasoning_text(&self) -> String {
        self.reasoning.join("; ")
    }
}

/// Priority scorer over an injected classifier adapter.
///
/// Pure computation apart from the adapter call; holds no other state.
pub struct PriorityScorer {
    adapter: Arc<ClassifierAdapter>,
}

impl PriorityScorer {
    pub fn new(adapter: Arc<ClassifierAdapter>) -> Self {
        Self { adapter }
    }

    /// Score a task's textual and temporal attributes at instant `now`.
    pub async fn score(
        &self,
        title: &str,
        description: Option<&str>,
        deadline: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> PriorityVerdict {
        let text = format!("{} {}", title, description.unwrap_or("")).to_lowercase();

        let mut score = 0.0;
        let mut reasoning = Vec::new();

        // Lexicon tiers fire in High, Medium, Low order.
        for tier_match in lexicon::scan(&text) {
            score += tier_match.contribution();
            reasoning.push(tier_match.phrase());
        }

        if let Some(deadline) = deadline {
            let urgency = temporal::assess(deadline, now);
            score += urgency.contribution;
            reasoning.push(urgency.phrase);
        }

        // Opportunistic classifier boost; any fault is ignored and the
        // heuristic result stands.
        if self.adapter.status() == ClassifierStatus::Ready {
            if let Some(scores) = self.adapter.try_classify(&text).await {
                if let Some(top) = scores.first() {
                    let label = top.label.to_lowercase();
                    if label.contains("anger") || label.contains("fear") {
                        score += SENTIMENT_BOOST;
                        reasoning.push(SENTIMENT_PHRASE.to_string());
                    }
                }
            }
        }

        // Single threshold evaluation over the final sum, so the classifier
        // adjustment can move the verdict across a class boundary.
        let (suggested_priority, confidence) = classify_score(score);

        if reasoning.is_empty() {
            reasoning.push(DEFAULT_REASONING.to_string());
        }

        PriorityVerdict {
            suggested_priority,
            confidence,
            reasoning,
        }
    }
}

/// Map a raw score to a priority class and rounded confidence.
///
/// The "none" branch computes `1 - score`, which exceeds 1.0 for negative
/// scores; the confidence is clamped to 1.0 after rounding.
fn classify_score(score: f64) -> (Priority, f64) {
    let (priority, confidence) = if score >= 0.7 {
        (Priority::High, score.min(1.0))
    } else if score >= 0.4 {
        (Priority::Medium, score)
    } else if score >= 0.1 {
        (Priority::Low, score)
    } else {
        (Priority::None, 1.0 - score)
    };

    (priority, round2(confidence).min(1.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
