//! End-to-end scoring tests with a stubbed embedding provider

use async_trait::async_trait;
use resume_screener::config::Config;
use resume_screener::embedding::EmbeddingProvider;
use resume_screener::error::{Result, ScreenerError};
use resume_screener::extract::fields::ResumeFields;
use resume_screener::scoring::{Confidence, Recommendation, ScoringEngine};
use serde_json::json;
use std::sync::Arc;

/// Returns the same unit vector for every non-blank input, so every cosine
/// similarity is 1.0 and the calibrated embedding ratio is exactly 1.0.
struct StubProvider;

#[async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed(&self, text: &str) -> Result<Option<Vec<f32>>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(vec![0.6, 0.8]))
    }
}

struct FailingProvider;

#[async_trait]
impl EmbeddingProvider for FailingProvider {
    async fn embed(&self, _text: &str) -> Result<Option<Vec<f32>>> {
        Err(ScreenerError::Provider("service unavailable".to_string()))
    }
}

fn engine(provider: Arc<dyn EmbeddingProvider>) -> ScoringEngine {
    ScoringEngine::new(&Config::default(), provider).unwrap()
}

fn resume(value: serde_json::Value) -> ResumeFields {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn test_empty_resume_scores_zero_without_calling_provider() {
    let engine = engine(Arc::new(FailingProvider));
    let result = engine.analyze(&resume(json!({})), "Senior Rust Developer").await.unwrap();

    assert_eq!(result.score, 0);
    assert_eq!(result.recommendation, Recommendation::No);
    assert_eq!(result.recommendation_confidence, Confidence::Low);
    assert_eq!(result.missing_requirements, vec!["No data in resume"]);
}

#[tokio::test]
async fn test_error_tagged_resume_counts_as_empty() {
    let engine = engine(Arc::new(StubProvider));
    let fields = resume(json!({
        "skills": "Python, Django",
        "error": "extraction failed"
    }));

    let result = engine.analyze(&fields, "Python developer").await.unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.recommendation, Recommendation::No);
}

#[tokio::test]
async fn test_strong_candidate_end_to_end() {
    let engine = engine(Arc::new(StubProvider));
    let fields = resume(json!({
        "skills": "Python, Django, MySQL, Docker",
        "experience": "Senior Software Engineer at Acme 2018-2024. \
                       6 years of experience building web services."
    }));
    let job = "Senior Python Developer\n\n\
               Requirements:\n\
               - 5+ years of experience building web services\n\
               - Python, Django, PostgreSQL\n\n\
               Nice to have:\n\
               - Docker\n";

    let result = engine.analyze(&fields, job).await.unwrap();

    assert_eq!(result.recommendation, Recommendation::Yes);
    assert_eq!(result.recommendation_confidence, Confidence::High);
    assert_eq!(result.recommendation_reason, "High overall match score");
    assert!(result.score >= 75, "score was {}", result.score);

    assert_eq!(result.debug.job_years, 5);
    assert_eq!(result.debug.resume_years, 6);
    assert_eq!(result.debug.required_match_ratio, 1.0);
    assert_eq!(result.debug.seniority_match, 1.0);
    assert!(result.debug.job_tech_required.contains(&"python".to_string()));
    assert!(result.debug.job_tech_required.contains(&"django".to_string()));
    assert!(result.debug.job_tech_required.contains(&"sql".to_string()));
    assert_eq!(result.debug.job_tech_nice, vec!["docker".to_string()]);

    assert!(result.strong_matches.contains(&"✓ SENIOR level match".to_string()));
    assert!(result
        .strong_matches
        .contains(&"✓ 6+ years experience (req: 5+)".to_string()));
    assert!(result.strong_matches.contains(&"✓ DJANGO (Required)".to_string()));
    assert!(result.strong_matches.len() <= 6);
    assert!(!result
        .missing_requirements
        .iter()
        .any(|entry| entry.contains("Required!")));
}

#[tokio::test]
async fn test_partial_required_coverage_blends_with_nice_to_have() {
    let engine = engine(Arc::new(StubProvider));
    let fields = resume(json!({ "skills": "Python" }));
    let job = "Requirements: Python, PostgreSQL";

    let result = engine.analyze(&fields, job).await.unwrap();

    // Required coverage is 1/2, nice-to-have is vacuously full, so the
    // technical ratio lands at 0.7 * 0.5 + 0.3 * 1.0.
    assert!((result.debug.required_match_ratio - 0.5).abs() < 1e-6);
    assert_eq!(result.debug.nice_match_ratio, 1.0);
    assert!((result.similarity_scores.technical - 0.65).abs() < 1e-3);
    assert!(result
        .missing_requirements
        .contains(&"❌ SQL (Required!)".to_string()));
}

#[tokio::test]
async fn test_ratios_are_rounded_to_three_decimals() {
    let engine = engine(Arc::new(StubProvider));
    let fields = resume(json!({ "skills": "Python, Django" }));
    let job = "Requirements: Python, Django, PostgreSQL";

    let result = engine.analyze(&fields, job).await.unwrap();

    // 0.7 * (2/3) + 0.3 rounds to 0.767.
    assert!((result.similarity_scores.technical - 0.767).abs() < 1e-6);
    assert!((result.debug.required_match_ratio - 0.667).abs() < 1e-6);
}

#[tokio::test]
async fn test_job_seniority_without_resume_signal_is_penalized() {
    let engine = engine(Arc::new(StubProvider));
    let fields = resume(json!({ "skills": "Python, Django, PostgreSQL" }));
    let job = "Senior Python Developer\n\nRequirements: Python, Django, PostgreSQL";

    let result = engine.analyze(&fields, job).await.unwrap();

    assert_eq!(result.debug.seniority_match, 0.0);
    assert!(result
        .missing_requirements
        .contains(&"⚠ SENIOR level not specified".to_string()));
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let engine = engine(Arc::new(FailingProvider));
    let fields = resume(json!({ "skills": "Python" }));

    let err = engine.analyze(&fields, "Python developer").await.unwrap_err();
    assert!(matches!(err, ScreenerError::Provider(_)));
}

#[tokio::test]
async fn test_recommendation_ladder_prefers_score_rule() {
    // A candidate matching nothing technical can still clear the score bar
    // on experience and semantics alone; the score rule fires first.
    let engine = engine(Arc::new(StubProvider));
    let fields = resume(json!({
        "skills": "Haskell",
        "experience": "10 years of experience"
    }));
    let job = "Requirements: 2+ years of experience shipping software";

    let result = engine.analyze(&fields, job).await.unwrap();

    // experience 20 + embedding 10 + some keyword overlap keeps this under
    // the YES bar; technical is 0 with no tech terms required.
    assert!(result.score < 50, "score was {}", result.score);
    assert_eq!(result.recommendation, Recommendation::No);
    assert_eq!(result.recommendation_reason, "Insufficient match");
}
