//! Integration tests for the advisory engine.
//!
//! Exercises the full Advisor facade: heuristic-only scoring, classifier
//! augmentation through an injected stub, the remote HTTP backend against a
//! mock server, and portfolio analysis over a real on-disk store.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use taskmind_core::advisor::{
    classifier::{ClassifierProvider, LoadOptions, TextClassifier},
    temporal, Advisor, ClassifierStatus, EmotionScore, RemoteProvider,
};
use taskmind_core::error::ClassifierError;
use taskmind_core::task::{Priority, Task};
use taskmind_core::{PortfolioAnalyzer, TaskStore};

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap()
}

/// Classifier stub that always returns one fixed label.
struct FixedLabel {
    label: &'static str,
}

#[async_trait]
impl TextClassifier for FixedLabel {
    async fn classify(&self, _text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        Ok(vec![EmotionScore {
            label: self.label.to_string(),
            score: 0.92,
        }])
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct FixedProvider {
    label: &'static str,
}

#[async_trait]
impl ClassifierProvider for FixedProvider {
    async fn load(
        &self,
        _options: &LoadOptions,
    ) -> Result<Box<dyn TextClassifier>, ClassifierError> {
        Ok(Box::new(FixedLabel { label: self.label }))
    }
}

fn advisor_with_label(label: &'static str) -> Advisor {
    Advisor::new(Box::new(FixedProvider { label }))
}

#[tokio::test]
async fn test_non_urgency_label_matches_heuristic_verdict() {
    // A ready classifier returning a non-urgency label must not change the
    // verdict at all.
    let heuristic = Advisor::heuristic_only();
    heuristic.initialize().await;

    let augmented = advisor_with_label("joy");
    assert_eq!(augmented.initialize().await, ClassifierStatus::Ready);

    let now = reference_now();
    for (title, description, deadline) in [
        ("Submit urgent report to client", None, Some(now + Duration::hours(12))),
        ("Plan hobby project", None, None),
        ("Read book someday", None, None),
        ("Water the flowers", Some("front garden"), None),
    ] {
        let base = heuristic
            .score_priority(title, description, deadline, now)
            .await;
        let boosted = augmented
            .score_priority(title, description, deadline, now)
            .await;
        assert_eq!(base.suggested_priority, boosted.suggested_priority);
        assert_eq!(base.confidence, boosted.confidence);
        assert_eq!(base.reasoning, boosted.reasoning);
    }
}

#[tokio::test]
async fn test_urgency_label_adds_boost_and_phrase() {
    let advisor = advisor_with_label("anger");
    advisor.initialize().await;

    let verdict = advisor
        .score_priority("Plan hobby project", None, None, reference_now())
        .await;

    // 0.4 - 0.3 + 0.2 = 0.3 -> still low, but confidence reflects the boost
    assert_eq!(verdict.suggested_priority, Priority::Low);
    assert_eq!(verdict.confidence, 0.3);
    assert_eq!(
        verdict.reasoning.last().map(String::as_str),
        Some("AI detected urgency-related sentiment")
    );
}

#[tokio::test]
async fn test_boost_can_cross_class_boundary() {
    // Deadline-only score of 0.6 classifies medium; the sentiment boost
    // lifts the final sum to 0.8, which must classify high because the
    // threshold table is evaluated once, after all contributions.
    let now = reference_now();
    let deadline = Some(now + Duration::days(3));

    let heuristic = Advisor::heuristic_only();
    heuristic.initialize().await;
    let base = heuristic
        .score_priority("Finish the mural", None, deadline, now)
        .await;
    assert_eq!(base.suggested_priority, Priority::Medium);
    assert_eq!(base.confidence, 0.6);

    let augmented = advisor_with_label("fear");
    augmented.initialize().await;
    let boosted = augmented
        .score_priority("Finish the mural", None, deadline, now)
        .await;
    assert_eq!(boosted.suggested_priority, Priority::High);
    assert_eq!(boosted.confidence, 0.8);
}

#[tokio::test]
async fn test_remote_backend_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/emotion")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[[{"label":"anger","score":0.81},{"label":"joy","score":0.05}]]"#)
        // Hit once by the readiness probe and once per classification
        .expect_at_least(2)
        .create_async()
        .await;

    let advisor = Advisor::new(Box::new(RemoteProvider::new(
        server.url(),
        "emotion",
        Some("test-token".to_string()),
    )));

    assert_eq!(advisor.initialize().await, ClassifierStatus::Ready);

    let verdict = advisor
        .score_priority("Plan hobby project", None, None, reference_now())
        .await;
    assert!(verdict
        .reasoning
        .contains(&"AI detected urgency-related sentiment".to_string()));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_remote_backend_failure_settles_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/emotion")
        .with_status(503)
        .with_body("model overloaded")
        .create_async()
        .await;

    let advisor = Advisor::new(Box::new(RemoteProvider::new(server.url(), "emotion", None)));

    // Both the accelerated and the CPU probe fail against the 503 endpoint.
    assert_eq!(advisor.initialize().await, ClassifierStatus::Unavailable);

    // The advisor still scores, heuristic-only.
    let verdict = advisor
        .score_priority("Read book someday", None, None, reference_now())
        .await;
    assert_eq!(verdict.suggested_priority, Priority::None);
    assert_eq!(verdict.confidence, 1.0);
}

#[tokio::test]
async fn test_portfolio_over_stored_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::open_at(dir.path().join("tasks.db")).unwrap();
    let now = reference_now();

    for i in 0..4 {
        let task = Task::new(format!("t{i}"), format!("Task {i}"), "work", now)
            .with_completed(i < 2)
            .with_priority(if i == 3 { Priority::High } else { Priority::None });
        store.insert(&task).unwrap();
    }
    store
        .insert(
            &Task::new("overdue", "Ship the fix", "work", now)
                .with_deadline(now - Duration::days(1)),
        )
        .unwrap();

    let advisor = Advisor::heuristic_only();
    let tasks = store.list().unwrap();
    let report = advisor.analyze_portfolio(&tasks, now);

    assert_eq!(
        report.insights[0],
        "You have completed 2 out of 5 tasks (40% completion rate)"
    );
    assert_eq!(
        report.insights[1],
        "You have 1 overdue tasks that need attention"
    );
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("Pomodoro Technique")));

    // Idempotence against the same clock
    assert_eq!(advisor.analyze_portfolio(&tasks, now), report);
}

proptest! {
    #[test]
    fn prop_temporal_contribution_is_bucketed(hours in -2000i64..2000i64) {
        let now = reference_now();
        let urgency = temporal::assess(now + Duration::hours(hours), now);
        prop_assert!([0.0, 0.3, 0.6, 0.8].contains(&urgency.contribution));
        prop_assert!(!urgency.phrase.is_empty());
    }

    #[test]
    fn prop_closer_deadlines_never_contribute_less(a in -100i64..100i64, b in -100i64..100i64) {
        let now = reference_now();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let near_urgency = temporal::assess(now + Duration::hours(near), now);
        let far_urgency = temporal::assess(now + Duration::hours(far), now);
        prop_assert!(near_urgency.contribution >= far_urgency.contribution);
    }

    #[test]
    fn prop_portfolio_always_reports_completion(total in 1usize..30, completed_mask in any::<u32>()) {
        let now = reference_now();
        let tasks: Vec<Task> = (0..total)
            .map(|i| {
                Task::new(i.to_string(), format!("Task {i}"), "work", now)
                    .with_completed(completed_mask & (1u32 << (i % 32)) != 0)
            })
            .collect();

        let report = PortfolioAnalyzer::analyze(&tasks, now);
        let completed = tasks.iter().filter(|t| t.completed).count();
        let expected_prefix =
            format!("You have completed {} out of {} tasks", completed, total);
        prop_assert!(report.insights[0].starts_with(&expected_prefix));

        // Reducing the same input twice yields an identical report
        prop_assert_eq!(PortfolioAnalyzer::analyze(&tasks, now), report);
    }
}
