//! Seniority level classification
//!
//! This is a classification, not a count: marker categories are checked in
//! fixed priority order (senior, then mid, then junior) and the first
//! category with any match wins, so a text mentioning both "senior" and
//! "junior" classifies as senior.

use crate::config::VocabularyConfig;
use crate::error::{Result, ScreenerError};
use crate::extract::vocabulary_pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeniorityLevel {
    Junior,
    Mid,
    Senior,
}

impl SeniorityLevel {
    /// Ordinal rank used for level comparison: junior 1, mid 2, senior 3.
    pub fn rank(self) -> u8 {
        match self {
            SeniorityLevel::Junior => 1,
            SeniorityLevel::Mid => 2,
            SeniorityLevel::Senior => 3,
        }
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeniorityLevel::Junior => "junior",
            SeniorityLevel::Mid => "mid",
            SeniorityLevel::Senior => "senior",
        };
        write!(f, "{}", name)
    }
}

pub struct SeniorityExtractor {
    senior_regex: Regex,
    mid_regex: Regex,
    junior_regex: Regex,
}

impl SeniorityExtractor {
    pub fn new(vocabulary: &VocabularyConfig) -> Result<Self> {
        Ok(Self {
            senior_regex: marker_regex("senior", &vocabulary.senior_markers)?,
            mid_regex: marker_regex("mid", &vocabulary.mid_markers)?,
            junior_regex: marker_regex("junior", &vocabulary.junior_markers)?,
        })
    }

    pub fn extract(&self, text: &str) -> Option<SeniorityLevel> {
        if self.senior_regex.is_match(text) {
            Some(SeniorityLevel::Senior)
        } else if self.mid_regex.is_match(text) {
            Some(SeniorityLevel::Mid)
        } else if self.junior_regex.is_match(text) {
            Some(SeniorityLevel::Junior)
        } else {
            None
        }
    }
}

fn marker_regex(category: &str, markers: &[String]) -> Result<Regex> {
    Regex::new(&vocabulary_pattern(markers)).map_err(|e| {
        ScreenerError::Configuration(format!("Invalid {} marker vocabulary: {}", category, e))
    })
}
