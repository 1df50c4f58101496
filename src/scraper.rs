use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use std::time::{Duration, Instant};
use once_cell::sync::Lazy;
use url::Url;
use crate::error::{AppError, Result};

/// Some servers reject the default client agent outright.
const USER_AGENT: &str = "Mozilla/5.0";

/// Attributes consulted for an image source, in priority order.
const IMAGE_SOURCE_ATTRS: [&str; 3] = ["src", "data-src", "data-lazy-src"];

// Built once; idle connections are not kept since each request fetches a single page
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(0)
        .build()
        .expect("Failed to build HTTP client")
});

// Create static selectors to avoid recompiling them each time
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector")
});

static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("img").expect("Failed to parse img selector")
});

/// Readable content pulled out of a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub text: String,
    pub images: Vec<String>,
}

/// Fetches `url` and returns its article text and image URLs.
///
/// Every failure (network, timeout, bad status, unparseable URL) collapses to an empty
/// text and an empty image list. Callers treat empty text as "no content".
pub async fn extract(url: &str, timeout: Duration) -> (String, Vec<String>) {
    match fetch_article(url, timeout).await {
        Ok(article) => (article.text, article.images),
        Err(err) => {
            tracing::warn!(%url, error = %err, "Article extraction failed");
            (String::new(), Vec::new())
        }
    }
}

/// Same as [`extract`], but keeps the cause of a failure.
pub async fn fetch_article(url: &str, timeout: Duration) -> Result<Article> {
    let base = Url::parse(url)?;
    let html = fetch_html(url, timeout).await?;
    Ok(extract_article(&html, &base))
}

pub async fn fetch_html(url: &str, timeout: Duration) -> Result<String> {
    tracing::debug!(%url, ?timeout, "Fetching HTML");
    let fetch_start = Instant::now();

    let response = CLIENT.get(url).timeout(timeout).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpStatus(status.as_u16()));
    }
    let html = response.text().await?;

    tracing::info!(%url, bytes = html.len(), "HTML fetch successful in {:?}", fetch_start.elapsed());
    Ok(html)
}

/// Pulls paragraph text and image sources out of an HTML document.
pub fn extract_article(html: &str, base: &Url) -> Article {
    let document = Html::parse_document(html);
    Article {
        text: extract_text(&document),
        images: extract_images(&document, base),
    }
}

fn extract_text(document: &Html) -> String {
    document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_images(document: &Html, base: &Url) -> Vec<String> {
    let mut images: Vec<String> = Vec::new();

    for img in document.select(&IMAGE_SELECTOR) {
        let element = img.value();
        let src = IMAGE_SOURCE_ATTRS
            .iter()
            .filter_map(|attr| element.attr(attr))
            .map(str::trim)
            .find(|value| !value.is_empty());

        let Some(src) = src else { continue };
        if src.starts_with("data:") {
            continue;
        }

        match base.join(src) {
            Ok(resolved) => {
                let resolved = resolved.to_string();
                if !images.contains(&resolved) {
                    images.push(resolved);
                }
            }
            Err(err) => tracing::debug!(%src, error = %err, "Skipping unresolvable image source"),
        }
    }

    images
}
