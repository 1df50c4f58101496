use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::pipeline::Digest;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub url: String,
    pub summary: String,
    pub images: Vec<String>,
    pub word_count: usize,
    pub model: String,
    pub summarized_at: DateTime<Utc>,
}

impl From<Digest> for SummarizeResponse {
    fn from(digest: Digest) -> Self {
        Self {
            url: digest.url,
            summary: digest.summary,
            images: digest.images,
            word_count: digest.word_count,
            model: digest.model,
            summarized_at: Utc::now(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}
