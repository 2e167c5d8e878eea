//! Keyword extraction
//!
//! Tokenizes on a pattern that keeps alphanumerics plus `+`, `#` and `.` so
//! tokens like `c++` and `node.js` survive, then drops stop words and tokens
//! of length <= 2. The result is a deduplicated set used purely for overlap
//! ratios, never for ordering.

use crate::config::VocabularyConfig;
use crate::error::{Result, ScreenerError};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

pub struct KeywordExtractor {
    token_regex: Regex,
    stop_words: HashSet<String>,
}

impl KeywordExtractor {
    pub fn new(vocabulary: &VocabularyConfig) -> Result<Self> {
        // No trailing \b: a boundary can never sit after '+' or '#', and the
        // trailing dots that sentence punctuation leaves behind are trimmed
        // off each token instead.
        let token_regex = Regex::new(r"\b[a-z0-9+#.]{2,}")
            .map_err(|e| ScreenerError::Configuration(format!("Invalid token pattern: {}", e)))?;

        Ok(Self {
            token_regex,
            stop_words: vocabulary
                .stop_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        })
    }

    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();

        self.token_regex
            .find_iter(&text_lower)
            .map(|m| m.as_str().trim_end_matches('.').to_string())
            .filter(|token| token.len() > 2 && !self.stop_words.contains(token))
            .collect()
    }
}
