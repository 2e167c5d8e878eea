//! Scoring engine: orchestrates the extractors, blends per-dimension match
//! ratios into a final score and assembles the explainable result

pub mod engine;
pub mod explain;
pub mod recommendation;
pub mod result;

pub use engine::ScoringEngine;
pub use result::{AnalysisResult, Confidence, MatchRatios, Recommendation};
