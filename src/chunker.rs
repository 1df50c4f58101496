//! Sentence-aligned chunking of long article text.

use once_cell::sync::Lazy;
use regex::Regex;
use crate::error::{AppError, Result};

/// `.`, `!` or `?` followed by whitespace. The `end` group marks where a sentence stops.
pub const DEFAULT_BOUNDARY: &str = r"(?P<end>[.!?])\s+";

static DEFAULT_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_BOUNDARY).expect("Failed to compile sentence boundary")
});

/// Splits text into sentences using a boundary pattern.
///
/// The pattern must define a named group `end`. A sentence finishes where `end` finishes,
/// and the next one starts after the whole match, so the text matched outside `end`
/// (usually whitespace) is dropped.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    boundary: Regex,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self {
            boundary: DEFAULT_BOUNDARY_RE.clone(),
        }
    }
}

impl SentenceSplitter {
    pub fn new(pattern: &str) -> Result<Self> {
        let boundary = Regex::new(pattern)
            .map_err(|e| AppError::ConfigError(format!("Invalid sentence boundary: {}", e)))?;
        if !boundary.capture_names().any(|name| name == Some("end")) {
            return Err(AppError::ConfigError(
                "Sentence boundary must define an `end` group".to_string(),
            ));
        }
        Ok(Self { boundary })
    }

    /// Non-empty, trimmed sentences in their original order.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for caps in self.boundary.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let end = caps.name("end").map_or(whole.start(), |m| m.end());
            sentences.push(&text[start..end]);
            start = whole.end();
        }
        sentences.push(&text[start..]);

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Greedily packs sentences into chunks of at most `max_chars` characters.
    ///
    /// A chunk's length is measured as its sentences joined by single spaces. A sentence
    /// longer than `max_chars` on its own becomes its own oversized chunk; sentences are
    /// never split.
    pub fn chunk(&self, text: &str, max_chars: usize) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut length = 0;

        for sentence in self.sentences(text) {
            let sentence_len = sentence.chars().count();
            let projected = if current.is_empty() {
                sentence_len
            } else {
                length + 1 + sentence_len
            };

            if current.is_empty() || projected <= max_chars {
                current.push(sentence);
                length = projected;
            } else {
                chunks.push(current.join(" "));
                current = vec![sentence];
                length = sentence_len;
            }
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        chunks
    }
}

/// Chunks `text` with the default sentence boundary.
pub fn chunk(text: &str, max_chars: usize) -> Vec<String> {
    SentenceSplitter::default().chunk(text, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(i: usize, len: usize) -> String {
        let stem = format!("Sentence {} ", i);
        let filler = "x".repeat(len.saturating_sub(stem.len() + 1));
        format!("{}{}.", stem, filler)
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk("", 1000).is_empty());
        assert!(chunk("   \n\t ", 1000).is_empty());
    }

    #[test]
    fn splits_on_terminal_punctuation_followed_by_whitespace() {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.sentences("Hello there. Is it 3.5 now?  Yes!\nDone");
        assert_eq!(sentences, vec!["Hello there.", "Is it 3.5 now?", "Yes!", "Done"]);
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let text = "One. Two. Three.";
        assert_eq!(chunk(text, 1000), vec![text.to_string()]);
    }

    #[test]
    fn chunks_respect_budget_and_preserve_sentence_order() {
        let sentences: Vec<String> = (0..40).map(|i| sentence(i, 90 + (i * 7) % 60)).collect();
        let text = sentences.join(" ");

        let chunks = chunk(&text, 1000);
        assert!(chunks.len() > 1);
        for c in &chunks {
            assert!(c.chars().count() <= 1000, "chunk too long: {}", c.len());
        }

        let splitter = SentenceSplitter::default();
        let rejoined: Vec<&str> = chunks.iter().flat_map(|c| splitter.sentences(c)).collect();
        let expected: Vec<&str> = sentences.iter().map(String::as_str).collect();
        assert_eq!(rejoined, expected);
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn oversized_sentence_gets_its_own_chunk() {
        let huge = sentence(1, 1500);
        let text = format!("Short one. {} Short two.", huge);

        let chunks = chunk(&text, 1000);
        assert_eq!(chunks, vec!["Short one.".to_string(), huge, "Short two.".to_string()]);
    }

    #[test]
    fn joined_length_counts_separators() {
        // 5 + 1 + 4 = 10 fits exactly, one more character does not.
        assert_eq!(chunk("Abcd. Efg.", 10), vec!["Abcd. Efg."]);
        assert_eq!(chunk("Abcd. Efgh.", 10), vec!["Abcd.", "Efgh."]);
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        let text = "Ünïcödé. Ünïcödé.";
        assert_eq!(chunk(text, 17), vec![text.to_string()]);
    }

    #[test]
    fn custom_boundary_pattern() {
        let splitter = SentenceSplitter::new(r"(?P<end>[.;])\s+").unwrap();
        assert_eq!(splitter.sentences("a; b! c. d"), vec!["a;", "b! c.", "d"]);
    }

    #[test]
    fn boundary_without_end_group_is_rejected() {
        assert!(matches!(
            SentenceSplitter::new(r"[.!?]\s+"),
            Err(AppError::ConfigError(_))
        ));
        assert!(SentenceSplitter::new(r"(?P<end>[.!?]").is_err());
    }
}
