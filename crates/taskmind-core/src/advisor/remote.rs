//! Remote text-classification backend over HTTP.
//!
//! Speaks the hosted-inference wire shape: POST `{"inputs": text}` to
//! `{endpoint}/models/{model}`, response `[[{"label", "score"}, ...]]`
//! ordered best-first. The device/precision preference of a load attempt is
//! carried in the request options; the provider probes the endpoint once per
//! attempt, so an endpoint that cannot serve the accelerated configuration
//! fails that attempt and the adapter falls through to the CPU preference.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::classifier::{
    ClassifierProvider, Device, EmotionScore, LoadOptions, Precision, TextClassifier,
};
use crate::error::ClassifierError;

fn device_param(device: Device) -> &'static str {
    match device {
        Device::Gpu => "gpu",
        Device::Cpu => "cpu",
    }
}

fn dtype_param(precision: Precision) -> &'static str {
    match precision {
        Precision::Half => "fp16",
        Precision::Full => "fp32",
    }
}

/// Provider for a remote inference endpoint.
pub struct RemoteProvider {
    endpoint: String,
    model: String,
    api_token: Option<String>,
    client: Client,
}

impl RemoteProvider {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_token: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_token,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ClassifierProvider for RemoteProvider {
    async fn load(
        &self,
        options: &LoadOptions,
    ) -> Result<Box<dyn TextClassifier>, ClassifierError> {
        let classifier = RemoteClassifier {
            url: format!(
                "{}/models/{}",
                self.endpoint.trim_end_matches('/'),
                self.model
            ),
            api_token: self.api_token.clone(),
            client: self.client.clone(),
            options: *options,
        };

        // Readiness probe: a failed probe fails this load attempt.
        classifier
            .request("ready check")
            .await
            .map_err(|error| ClassifierError::LoadFailed {
                backend: format!("remote/{}", device_param(options.device)),
                message: error.to_string(),
            })?;

        Ok(Box::new(classifier))
    }
}

/// A probed, ready remote classifier.
pub struct RemoteClassifier {
    url: String,
    api_token: Option<String>,
    client: Client,
    options: LoadOptions,
}

impl RemoteClassifier {
    async fn request(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        let body = json!({
            "inputs": text,
            "options": {
                "device": device_param(self.options.device),
                "dtype": dtype_param(self.options.precision),
            },
        });

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClassifierError::InvocationFailed(format!(
                "HTTP {status}: {text}"
            )));
        }

        parse_scores(response.json::<Value>().await?)
    }
}

#[async_trait]
impl TextClassifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        self.request(text).await
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// Parse `[[{label, score}, ...]]` (batched) or `[{label, score}, ...]`
/// into a best-first score list.
fn parse_scores(value: Value) -> Result<Vec<EmotionScore>, ClassifierError> {
    let inner = match value {
        Value::Array(items) => {
            if items.first().map_or(false, Value::is_array) {
                items
                    .into_iter()
                    .next()
                    .unwrap_or(Value::Array(Vec::new()))
            } else {
                Value::Array(items)
            }
        }
        other => {
            return Err(ClassifierError::UnexpectedResponse(format!(
                "expected an array, got {other}"
            )))
        }
    };

    let mut scores: Vec<EmotionScore> = serde_json::from_value(inner)
        .map_err(|error| ClassifierError::UnexpectedResponse(error.to_string()))?;
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(scores)
}
