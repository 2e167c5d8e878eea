//! Requirement-section splitting
//!
//! Splits a job description into mandatory-requirements text and
//! nice-to-have text by heading vocabulary (bilingual). Fail-open: when no
//! required heading is found the entire description counts as required,
//! rather than dropping requirements on the floor.

use crate::config::VocabularyConfig;
use crate::error::{Result, ScreenerError};
use crate::extract::vocabulary_pattern;
use regex::Regex;

pub struct RequirementSplitter {
    required_heading: Regex,
    nice_heading: Regex,
    nice_terminator: Regex,
}

impl RequirementSplitter {
    pub fn new(vocabulary: &VocabularyConfig) -> Result<Self> {
        Ok(Self {
            required_heading: heading_regex("required", &vocabulary.required_headings)?,
            nice_heading: heading_regex("nice-to-have", &vocabulary.nice_to_have_headings)?,
            nice_terminator: compile(&vocabulary_pattern(&vocabulary.nice_to_have_headings))?,
        })
    }

    /// Returns `(required_text, nice_to_have_text)`, both lower-cased.
    pub fn split(&self, job_text: &str) -> (String, String) {
        let lower = job_text.to_lowercase();

        // The required section runs from its heading to the first
        // nice-to-have heading or the end of the text. (The regex crate has
        // no look-ahead, so the end is located with a second search.)
        let required = match self.required_heading.find(&lower) {
            Some(heading) => {
                let rest = &lower[heading.end()..];
                let end = self
                    .nice_terminator
                    .find(rest)
                    .map(|m| m.start())
                    .unwrap_or(rest.len());
                rest[..end].trim().to_string()
            }
            None => lower.clone(),
        };

        // The nice-to-have section runs to the first blank-line gap.
        let nice = match self.nice_heading.find(&lower) {
            Some(heading) => {
                let rest = &lower[heading.end()..];
                let end = rest.find("\n\n").unwrap_or(rest.len());
                rest[..end].trim().to_string()
            }
            None => String::new(),
        };

        (required, nice)
    }
}

fn heading_regex(category: &str, headings: &[String]) -> Result<Regex> {
    compile(&format!("{}[:\\s]+", vocabulary_pattern(headings)))
        .map_err(|e| ScreenerError::Configuration(format!("Invalid {} headings: {}", category, e)))
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ScreenerError::Configuration(format!("Invalid heading pattern: {}", e)))
}
