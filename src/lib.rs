pub mod api;
pub mod chunker;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod scraper;
pub mod summarizer;

use std::sync::Arc;
use config::Config;
use summarizer::Summarizer;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Built once at startup and reused by every request.
    pub summarizer: Summarizer,
}
