//! Classifier adapter: a uniform optional-result wrapper over a
//! text-classification backend.
//!
//! The advisor works with or without a model. The adapter attempts to load
//! a backend at most once per process (hardware-accelerated half-precision
//! first, then CPU default-precision), settles into `Ready` or
//! `Unavailable`, and exposes [`ClassifierAdapter::try_classify`], which
//! never raises: any fault inside the model invocation is swallowed, logged,
//! and reported as "no result".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::OnceCell;

use crate::error::ClassifierError;

/// Lifecycle status of the classifier adapter.
///
/// Transitions are one-way from `Uninitialized`: a successful load attempt
/// settles `Ready`, a failed one settles `Unavailable`. No retries within a
/// process lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierStatus {
    Uninitialized,
    Ready,
    Unavailable,
}

impl fmt::Display for ClassifierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClassifierStatus::Uninitialized => "uninitialized",
            ClassifierStatus::Ready => "ready",
            ClassifierStatus::Unavailable => "unavailable",
        };
        f.write_str(s)
    }
}

/// One label/score pair from a classification result, best-first ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

/// Compute device a backend should load onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Gpu,
    Cpu,
}

/// Weight precision a backend should load with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Half,
    Full,
}

/// Options for one backend load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub device: Device,
    pub precision: Precision,
}

impl LoadOptions {
    /// First preference: hardware-accelerated, half-precision weights.
    pub fn accelerated() -> Self {
        Self {
            device: Device::Gpu,
            precision: Precision::Half,
        }
    }

    /// Fallback: CPU, default precision.
    pub fn fallback() -> Self {
        Self {
            device: Device::Cpu,
            precision: Precision::Full,
        }
    }
}

/// A loaded text-classification backend.
///
/// Results are ordered best-first. Implementations may be ML runtimes,
/// remote endpoints, or test stubs.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify the given text.
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError>;

    /// Backend identifier (e.g. "remote", "null").
    fn name(&self) -> &str;
}

/// Loads a [`TextClassifier`] for the requested device/precision.
#[async_trait]
pub trait ClassifierProvider: Send + Sync {
    async fn load(
        &self,
        options: &LoadOptions,
    ) -> Result<Box<dyn TextClassifier>, ClassifierError>;
}

/// Provider with no backend. Every load attempt fails, so the adapter
/// settles `Unavailable` and the advisor runs heuristic-only.
pub struct NullProvider;

#[async_trait]
impl ClassifierProvider for NullProvider {
    async fn load(
        &self,
        _options: &LoadOptions,
    ) -> Result<Box<dyn TextClassifier>, ClassifierError> {
        Err(ClassifierError::LoadFailed {
            backend: "null".to_string(),
            message: "no classifier backend configured".to_string(),
        })
    }
}

/// Process-wide classifier state with a one-way status lifecycle.
///
/// Shared via `Arc` and injected into the scorer, rather than held as a
/// true global. Initialization is serialized: the first caller performs the
/// load, concurrent callers await and observe the settled status.
pub struct ClassifierAdapter {
    provider: Box<dyn ClassifierProvider>,
    backend: OnceCell<Option<Box<dyn TextClassifier>>>,
}

impl ClassifierAdapter {
    pub fn new(provider: Box<dyn ClassifierProvider>) -> Self {
        Self {
            provider,
            backend: OnceCell::new(),
        }
    }

    /// Attempt to load a backend, settling the status.
    ///
    /// Tries the accelerated preference first, then the CPU fallback. Both
    /// failing leaves the adapter usable with every call yielding "no
    /// result". Calling again after the first attempt completes is a no-op.
    pub async fn initialize(&self) -> ClassifierStatus {
        let backend = self
            .backend
            .get_or_init(|| async {
                for options in [LoadOptions::accelerated(), LoadOptions::fallback()] {
                    match self.provider.load(&options).await {
                        Ok(classifier) => {
                            tracing::debug!(
                                backend = classifier.name(),
                                device = ?options.device,
                                precision = ?options.precision,
                                "classifier backend loaded"
                            );
                            return Some(classifier);
                        }
                        Err(error) => {
                            tracing::debug!(
                                device = ?options.device,
                                %error,
                                "classifier load attempt failed"
                            );
                        }
                    }
                }
                tracing::warn!(
                    "no classifier backend could be loaded; falling back to heuristic scoring"
                );
                None
            })
            .await;

        if backend.is_some() {
            ClassifierStatus::Ready
        } else {
            ClassifierStatus::Unavailable
        }
    }

    /// Current status without triggering initialization.
    pub fn status(&self) -> ClassifierStatus {
        match self.backend.get() {
            None => ClassifierStatus::Uninitialized,
            Some(Some(_)) => ClassifierStatus::Ready,
            Some(None) => ClassifierStatus::Unavailable,
        }
    }

    /// Classify text, yielding `None` on any fault.
    ///
    /// Never raises to the caller: an uninitialized or unavailable adapter
    /// and a failing invocation all produce `None`. Invocation faults are
    /// logged.
    pub async fn try_classify(&self, text: &str) -> Option<Vec<EmotionScore>> {
        let classifier = self.backend.get()?.as_ref()?;
        match classifier.classify(text).await {
            Ok(scores) => Some(scores),
            Err(error) => {
                tracing::warn!(backend = classifier.name(), %error, "classifier invocation failed");
                None
            }
        }
    }
}
