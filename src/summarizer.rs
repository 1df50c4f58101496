//! Single or two-pass abstractive summarization over a [`SummaryModel`].

use std::sync::Arc;
use crate::chunker::SentenceSplitter;
use crate::llm::{SummaryModel, SummaryParams};

/// Inputs up to this many characters go through the model in one call.
pub const SINGLE_PASS_LIMIT: usize = 1000;
/// Character budget of each chunk for long inputs.
pub const CHUNK_CHARS: usize = 1000;
/// Characters of raw text kept when no chunk could be summarized.
pub const FALLBACK_CHARS: usize = 400;

#[derive(Clone)]
pub struct Summarizer {
    model: Arc<dyn SummaryModel>,
    splitter: SentenceSplitter,
}

impl Summarizer {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self::with_splitter(model, SentenceSplitter::default())
    }

    pub fn with_splitter(model: Arc<dyn SummaryModel>, splitter: SentenceSplitter) -> Self {
        Self { model, splitter }
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Summarizes `text`. Never fails: model errors degrade to a truncated excerpt or to
    /// the partial chunk summaries.
    pub async fn summarize(&self, text: &str) -> String {
        let char_count = text.chars().count();
        if char_count <= SINGLE_PASS_LIMIT {
            return match self.model.summarize(text, &SummaryParams::SINGLE_PASS).await {
                Ok(summary) => summary,
                Err(err) => {
                    tracing::warn!(error = %err, "Single-pass summarization failed, using excerpt");
                    truncated_excerpt(text)
                }
            };
        }

        let chunks = self.splitter.chunk(text, CHUNK_CHARS);
        tracing::info!(chars = char_count, chunks = chunks.len(), "Summarizing long text in chunks");

        let mut summaries = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            match self.model.summarize(chunk, &SummaryParams::CHUNK_PASS).await {
                Ok(summary) => summaries.push(summary),
                Err(err) => tracing::warn!(chunk = index, error = %err, "Skipping chunk"),
            }
        }

        if summaries.is_empty() {
            tracing::warn!("Every chunk failed to summarize, using excerpt");
            return truncated_excerpt(text);
        }

        let combined = summaries.join(" ");
        tracing::debug!(partials = summaries.len(), chars = combined.len(), "Combining chunk summaries");

        match self.model.summarize(&combined, &SummaryParams::COMBINE_PASS).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(error = %err, "Combining pass failed, returning chunk summaries");
                combined
            }
        }
    }
}

fn truncated_excerpt(text: &str) -> String {
    let mut excerpt: String = text.chars().take(FALLBACK_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}
