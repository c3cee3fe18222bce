use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ProviderConfig;

/// Upper bound on the worker's own HTTP attempt, independent of the much
/// shorter caller-side advice budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const MAX_OUTPUT_TOKENS: u32 = 256;

/// Capability-negotiated seam to an external text-generation service.
///
/// Implementations must be safe to call when the integration is not
/// configured: absence manifests as `is_available() == false` and
/// `generate_text` returning `None`, never as a construction panic.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn is_available(&self) -> bool;

    /// Best-effort generation. Any transport, auth, or decoding failure is
    /// logged at diagnostic level and collapsed into `None`.
    async fn generate_text(&self, prompt: &str) -> Option<String>;
}

/// No-op provider substituted whenever the real integration cannot be
/// constructed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTextGenerator;

#[async_trait]
impl TextGenerator for NullTextGenerator {
    fn is_available(&self) -> bool {
        false
    }

    async fn generate_text(&self, _prompt: &str) -> Option<String> {
        None
    }
}

/// Vertex-AI-style REST provider. Constructed only when the environment
/// carries a credentials marker and a project; the bearer token is minted by
/// the deployment environment and read from configuration.
pub struct VertexTextGenerator {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl VertexTextGenerator {
    pub fn from_config(config: &ProviderConfig) -> Option<Self> {
        if !config.is_configured() {
            debug!("text generation disabled: provider credentials not present");
            return None;
        }
        let project = config.project.as_deref()?;

        let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(err) => {
                warn!("failed to build text-generation client: {err}");
                return None;
            }
        };

        let endpoint = format!(
            "https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:predict",
            location = config.location,
            model = config.model,
        );

        Some(Self {
            client,
            endpoint,
            access_token: config.access_token.clone(),
        })
    }

    async fn try_generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = PredictRequest {
            instances: vec![Instance {
                content: prompt.to_string(),
            }],
            parameters: Parameters {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let mut call = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.access_token {
            call = call.bearer_auth(token);
        }

        let response = call.send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let payload: PredictResponse = response.json().await?;
        payload
            .predictions
            .into_iter()
            .next()
            .and_then(Prediction::into_text)
            .ok_or(ProviderError::EmptyPayload)
    }
}

#[async_trait]
impl TextGenerator for VertexTextGenerator {
    fn is_available(&self) -> bool {
        true
    }

    async fn generate_text(&self, prompt: &str) -> Option<String> {
        match self.try_generate(prompt).await {
            Ok(text) => Some(text),
            Err(err) => {
                debug!("text generation attempt failed: {err}");
                None
            }
        }
    }
}

/// Failure modes of one external generation attempt. Diagnostic only; the
/// advice pipeline collapses them all into its local fallback.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("prediction payload carried no text")]
    EmptyPayload,
}

/// Build the provider the configuration allows for, substituting the no-op
/// implementation when the real one cannot be constructed.
pub fn provider_from_config(config: &ProviderConfig) -> Arc<dyn TextGenerator> {
    match VertexTextGenerator::from_config(config) {
        Some(provider) => Arc::new(provider),
        None => Arc::new(NullTextGenerator),
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    content: String,
}

#[derive(Debug, Serialize)]
struct Parameters {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

/// Response shapes vary across model versions; probe the common keys.
#[derive(Debug, Deserialize)]
struct Prediction {
    content: Option<String>,
    text: Option<String>,
    output: Option<String>,
}

impl Prediction {
    fn into_text(self) -> Option<String> {
        self.content.or(self.text).or(self.output)
    }
}
