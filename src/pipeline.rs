//! Fetch → extract → summarize, independent of any front end.

use std::time::{Duration, Instant};
use crate::error::{AppError, Result};
use crate::scraper;
use crate::summarizer::Summarizer;

/// Articles with less text than this are not worth summarizing.
pub const MIN_CONTENT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub url: String,
    pub summary: String,
    pub images: Vec<String>,
    pub word_count: usize,
    pub model: String,
}

pub async fn digest_url(url: &str, summarizer: &Summarizer, timeout: Duration) -> Result<Digest> {
    let start = Instant::now();
    let (text, images) = scraper::extract(url, timeout).await;

    let char_count = text.chars().count();
    if char_count < MIN_CONTENT_CHARS {
        tracing::info!(%url, chars = char_count, "Not enough text to summarize");
        return Err(AppError::InsufficientContent);
    }

    let word_count = text.split_whitespace().count();
    tracing::info!(%url, chars = char_count, words = word_count, images = images.len(), "Extracted article");

    let summary = summarizer.summarize(&text).await;
    tracing::info!(%url, "Digest ready in {:?}", start.elapsed());

    Ok(Digest {
        url: url.to_string(),
        summary,
        images,
        word_count,
        model: summarizer.model_name().to_string(),
    })
}
