/// The interactive front page. Talks to `POST /api/summarize` and renders the result.
pub const INDEX_HTML: &str = include_str!("index.html");

/// Display width of each extracted image, in CSS pixels.
pub const IMAGE_WIDTH_PX: u32 = 250;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_renders_images_at_fixed_width() {
        assert!(INDEX_HTML.contains(&format!("width = {}", IMAGE_WIDTH_PX)));
        assert!(INDEX_HTML.contains("/api/summarize"));
    }
}
