#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use fast_fresh_facts::error::{AppError, Result};
use fast_fresh_facts::llm::{SummaryModel, SummaryParams};

static INIT: OnceLock<()> = OnceLock::new();

pub fn init_test_tracing() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Canned model that counts how often it is asked to summarize.
pub struct CountingModel {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingModel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { calls: AtomicUsize::new(0), fail: false })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { calls: AtomicUsize::new(0), fail: true })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryModel for CountingModel {
    async fn summarize(&self, _text: &str, params: &SummaryParams) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::LlmError("model offline".to_string()));
        }
        Ok(format!("A concise summary within {} tokens.", params.max_length))
    }

    fn model_name(&self) -> &str {
        "counting-model"
    }
}

pub fn article_html(paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<p>{}</p>\n", p)).collect();
    format!(
        r#"<!DOCTYPE html><html><head><title>News</title></head><body>
        <img src="/static/hero.jpg">
        <img data-src="thumb.png">
        <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">
        <img src="/static/hero.jpg">
        {}</body></html>"#,
        body
    )
}

pub const LONG_PARAGRAPH: &str = "City officials announced on Monday that the new tram line will open next spring, \
    connecting the harbour district with the university campus. The project ran two years late but stayed within budget.";
