//! Analysis result contract
//!
//! The structured response handed to UI/CLI consumers: score, hire
//! recommendation, explanations and a full debug trace. Everything is
//! serde-serializable; similarity ratios carry three decimals.

use crate::extract::seniority::SeniorityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Yes => write!(f, "YES"),
            Recommendation::No => write!(f, "NO"),
        }
    }
}

/// Qualitative strength of a recommendation, independent of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

/// The four per-dimension match ratios, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRatios {
    pub technical: f32,
    pub keywords: f32,
    pub experience: f32,
    pub embedding: f32,
}

impl MatchRatios {
    pub fn rounded(&self) -> Self {
        Self {
            technical: round3(self.technical),
            keywords: round3(self.keywords),
            experience: round3(self.experience),
            embedding: round3(self.embedding),
        }
    }
}

/// Full feature/ratio trace behind a result, for inspection and debugging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugTrace {
    pub job_keywords_count: usize,
    pub resume_keywords_count: usize,
    pub common_keywords_count: usize,
    pub job_tech_required_count: usize,
    pub job_tech_nice_count: usize,
    pub resume_tech_count: usize,
    pub common_tech_required_count: usize,
    pub common_tech_nice_count: usize,
    pub job_tech_required: Vec<String>,
    pub job_tech_nice: Vec<String>,
    pub resume_tech_terms: Vec<String>,
    pub required_match_ratio: f32,
    pub nice_match_ratio: f32,
    pub job_seniority: Option<SeniorityLevel>,
    pub resume_seniority: Option<SeniorityLevel>,
    pub job_years: u32,
    pub resume_years: u32,
    pub seniority_match: f32,
    pub experience_match: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Final score, 0-100, truncated not rounded.
    pub score: u32,
    /// Strongest matched requirements, at most 6.
    pub strong_matches: Vec<String>,
    /// Unmet requirements, at most 6.
    pub missing_requirements: Vec<String>,
    pub recommendation: Recommendation,
    pub recommendation_reason: String,
    pub recommendation_confidence: Confidence,
    pub similarity_scores: MatchRatios,
    pub debug: DebugTrace,
}

impl AnalysisResult {
    /// The structured zero-score result for a resume with no usable text.
    /// This is a regular result, not an error.
    pub fn no_data() -> Self {
        Self {
            score: 0,
            strong_matches: Vec::new(),
            missing_requirements: vec!["No data in resume".to_string()],
            recommendation: Recommendation::No,
            recommendation_reason: "No resume data to analyze".to_string(),
            recommendation_confidence: Confidence::Low,
            similarity_scores: MatchRatios::default(),
            debug: DebugTrace::default(),
        }
    }
}

pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
