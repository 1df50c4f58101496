use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use reqwest::Client;
use crate::config::Config;
use crate::error::{Result, AppError};

/// Length bounds for one model call, in model tokens rather than characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl SummaryParams {
    pub const SINGLE_PASS: Self = Self { max_length: 150, min_length: 30, do_sample: false };
    pub const CHUNK_PASS: Self = Self { max_length: 130, min_length: 30, do_sample: false };
    pub const COMBINE_PASS: Self = Self { max_length: 150, min_length: 30, do_sample: false };
}

/// A pretrained text-to-text summarization model.
///
/// Implementations are stateless per call, so one handle is shared by every request.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String>;

    fn model_name(&self) -> &str;
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryParams,
    options: InferenceOptions,
}

#[derive(Deserialize)]
struct InferenceOutput {
    summary_text: String,
}

/// Summarization served by the Hugging Face Inference API.
pub struct HuggingFaceSummarizer {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
}

impl HuggingFaceSummarizer {
    pub fn new(inference_url: &str, model: &str, api_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build inference client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", inference_url.trim_end_matches('/'), model),
            model: model.to_string(),
            api_token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.inference_url, &config.model_name, config.hf_api_token.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryModel for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        let body = InferenceRequest {
            inputs: text,
            parameters: params,
            options: InferenceOptions { wait_for_model: true },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let res = request
            .send()
            .await
            .map_err(|e| AppError::LlmError(format!("Inference request failed: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            let detail = res.text().await.unwrap_or_default();
            return Err(AppError::LlmError(format!(
                "Inference API returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let outputs: Vec<InferenceOutput> = res
            .json()
            .await
            .map_err(|e| AppError::LlmError(format!("Invalid response format from model: {}", e)))?;

        let summary = outputs
            .into_iter()
            .next()
            .map(|out| out.summary_text.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::LlmError("Model returned an empty summary".to_string()))?;

        Ok(summary)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
