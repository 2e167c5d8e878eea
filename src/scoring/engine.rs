//! Scoring engine orchestration
//!
//! Runs every extractor over the job description and the flattened resume,
//! computes the four per-dimension match ratios, blends them into a 0-100
//! score and assembles the explainable result. All state is request-scoped;
//! the engine itself is immutable and shareable across analyses.

use crate::config::{Config, EmbeddingConfig, ScoringConfig};
use crate::embedding::{cosine_similarity, truncate_for_embedding, EmbeddingProvider};
use crate::error::Result;
use crate::extract::experience::ExperienceExtractor;
use crate::extract::fields::ResumeFields;
use crate::extract::keywords::KeywordExtractor;
use crate::extract::requirements::RequirementSplitter;
use crate::extract::seniority::{SeniorityExtractor, SeniorityLevel};
use crate::extract::technical::TechnicalTermExtractor;
use crate::scoring::explain;
use crate::scoring::recommendation::{recommend, RatioSnapshot};
use crate::scoring::result::{round3, AnalysisResult, DebugTrace, MatchRatios};
use log::{debug, info};
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct ScoringEngine {
    provider: Arc<dyn EmbeddingProvider>,
    technical: TechnicalTermExtractor,
    keywords: KeywordExtractor,
    seniority: SeniorityExtractor,
    experience: ExperienceExtractor,
    requirements: RequirementSplitter,
    scoring: ScoringConfig,
    embedding: EmbeddingConfig,
}

/// Everything extracted from one (job, resume) pair. Feeds the ratios, the
/// explanation lists and the debug trace.
pub(crate) struct MatchFeatures {
    pub job_keywords: BTreeSet<String>,
    pub resume_keywords: BTreeSet<String>,
    pub common_keywords: BTreeSet<String>,
    pub job_tech_required: BTreeSet<String>,
    pub job_tech_nice: BTreeSet<String>,
    pub job_tech_all: BTreeSet<String>,
    pub resume_tech: BTreeSet<String>,
    pub common_tech_required: BTreeSet<String>,
    pub common_tech_nice: BTreeSet<String>,
    pub job_seniority: Option<SeniorityLevel>,
    pub resume_seniority: Option<SeniorityLevel>,
    pub job_years: u32,
    pub resume_years: u32,
    pub seniority_match: f32,
    pub experience_match: f32,
}

impl ScoringEngine {
    pub fn new(config: &Config, provider: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        Ok(Self {
            provider,
            technical: TechnicalTermExtractor::new(&config.vocabulary)?,
            keywords: KeywordExtractor::new(&config.vocabulary)?,
            seniority: SeniorityExtractor::new(&config.vocabulary)?,
            experience: ExperienceExtractor::new()?,
            requirements: RequirementSplitter::new(&config.vocabulary)?,
            scoring: config.scoring.clone(),
            embedding: config.embedding.clone(),
        })
    }

    /// Analyzes one candidate against one job description. Returns a
    /// complete result or an error; never a partial result.
    pub async fn analyze(
        &self,
        resume: &ResumeFields,
        job_description: &str,
    ) -> Result<AnalysisResult> {
        if resume.is_empty() {
            info!("Resume has no usable text, returning zero-score result");
            return Ok(AnalysisResult::no_data());
        }

        let resume_text = resume.full_text();
        let skills_text = resume.skills_text();

        // The embedding calls are the only suspend points; everything after
        // is pure CPU work on request-local data.
        let embedding_ratio = self
            .normalized_embedding(job_description, &resume_text, &skills_text)
            .await?;

        let features = self.extract_features(job_description, &resume_text);

        let (tech_ratio, required_ratio, nice_ratio) = self.technical_ratio(&features);
        let keyword_ratio = self.keyword_ratio(&features);
        let experience_score =
            0.5 * features.seniority_match + 0.5 * features.experience_match;

        let final_score = (tech_ratio * self.scoring.technical_weight
            + keyword_ratio * self.scoring.keyword_weight
            + experience_score * self.scoring.experience_weight
            + embedding_ratio * self.scoring.embedding_weight) as u32;

        debug!(
            "ratios: tech={:.3} keywords={:.3} experience={:.3} embedding={:.3} -> score {}",
            tech_ratio, keyword_ratio, experience_score, embedding_ratio, final_score
        );

        let outcome = recommend(&RatioSnapshot {
            final_score,
            technical: tech_ratio,
            keywords: keyword_ratio,
        });

        let strong_matches = explain::strong_matches(&features);
        let missing_requirements = explain::missing_requirements(&features);

        Ok(AnalysisResult {
            score: final_score,
            strong_matches,
            missing_requirements,
            recommendation: outcome.recommendation,
            recommendation_reason: outcome.reason.to_string(),
            recommendation_confidence: outcome.confidence,
            similarity_scores: MatchRatios {
                technical: tech_ratio,
                keywords: keyword_ratio,
                experience: experience_score,
                embedding: embedding_ratio,
            }
            .rounded(),
            debug: debug_trace(&features, required_ratio, nice_ratio),
        })
    }

    fn extract_features(&self, job_description: &str, resume_text: &str) -> MatchFeatures {
        let (required_text, nice_text) = self.requirements.split(job_description);

        let job_tech_required = self.technical.extract(&required_text);
        let job_tech_nice = self.technical.extract(&nice_text);
        let job_tech_all: BTreeSet<String> =
            job_tech_required.union(&job_tech_nice).cloned().collect();
        let resume_tech = self.technical.extract(resume_text);

        let common_tech_required: BTreeSet<String> =
            job_tech_required.intersection(&resume_tech).cloned().collect();
        let common_tech_nice: BTreeSet<String> =
            job_tech_nice.intersection(&resume_tech).cloned().collect();

        let job_keywords = self.keywords.extract(job_description);
        let resume_keywords = self.keywords.extract(resume_text);
        let common_keywords: BTreeSet<String> =
            job_keywords.intersection(&resume_keywords).cloned().collect();

        let job_seniority = self.seniority.extract(job_description);
        let resume_seniority = self.seniority.extract(resume_text);
        let job_years = self.experience.extract(job_description);
        let resume_years = self.experience.extract(resume_text);

        let seniority_match = seniority_match(job_seniority, resume_seniority);
        let experience_match = experience_match(job_years, resume_years);

        MatchFeatures {
            job_keywords,
            resume_keywords,
            common_keywords,
            job_tech_required,
            job_tech_nice,
            job_tech_all,
            resume_tech,
            common_tech_required,
            common_tech_nice,
            job_seniority,
            resume_seniority,
            job_years,
            resume_years,
            seniority_match,
            experience_match,
        }
    }

    /// Required terms weigh 70%, nice-to-haves 30%. An empty set on either
    /// side means "no requirement, trivially satisfied". When the job text
    /// yields no tech terms at all the ratio falls back to the union, which
    /// bottoms out at 0.
    fn technical_ratio(&self, f: &MatchFeatures) -> (f32, f32, f32) {
        let required_ratio = set_ratio(&f.common_tech_required, &f.job_tech_required, 1.0);
        let nice_ratio = set_ratio(&f.common_tech_nice, &f.job_tech_nice, 1.0);

        let combined = if !f.job_tech_required.is_empty() || !f.job_tech_nice.is_empty() {
            0.7 * required_ratio + 0.3 * nice_ratio
        } else {
            let common_all: BTreeSet<String> =
                f.job_tech_all.intersection(&f.resume_tech).cloned().collect();
            set_ratio(&common_all, &f.job_tech_all, 0.0)
        };

        (combined, required_ratio, nice_ratio)
    }

    fn keyword_ratio(&self, f: &MatchFeatures) -> f32 {
        set_ratio(&f.common_keywords, &f.job_keywords, 0.0)
    }

    /// Blends the whole-resume similarity 50/50 with the skills-only
    /// similarity when a skills section exists, then rescales from the
    /// provider's observed useful range into [0, 1].
    async fn normalized_embedding(
        &self,
        job_description: &str,
        resume_text: &str,
        skills_text: &str,
    ) -> Result<f32> {
        let max_chars = self.embedding.max_input_chars;

        let (job_embedding, resume_embedding, skills_embedding) = tokio::try_join!(
            self.provider
                .embed(truncate_for_embedding(job_description, max_chars)),
            self.provider
                .embed(truncate_for_embedding(resume_text, max_chars)),
            self.provider
                .embed(truncate_for_embedding(skills_text, max_chars)),
        )?;

        let overall = match (&job_embedding, &resume_embedding) {
            (Some(job), Some(resume)) => cosine_similarity(job, resume)?,
            _ => 0.0,
        };

        let raw = match (&job_embedding, &skills_embedding) {
            (Some(job), Some(skills)) => {
                let skills_similarity = cosine_similarity(job, skills)?;
                0.5 * overall + 0.5 * skills_similarity
            }
            _ => overall,
        };

        let rescaled =
            (raw - self.embedding.calibration_floor) / self.embedding.calibration_span;
        Ok(rescaled.clamp(0.0, 1.0))
    }
}

fn set_ratio(common: &BTreeSet<String>, required: &BTreeSet<String>, empty_default: f32) -> f32 {
    if required.is_empty() {
        empty_default
    } else {
        common.len() as f32 / required.len() as f32
    }
}

/// Level comparison: meeting or exceeding the bar is a full match, one level
/// below is 0.7, further below 0.3. A job with no detected level has no
/// requirement. A job with a level but an undetected resume level counts as
/// unmatched (0.0).
fn seniority_match(job: Option<SeniorityLevel>, resume: Option<SeniorityLevel>) -> f32 {
    match (job, resume) {
        (Some(job_level), Some(resume_level)) => {
            if resume_level.rank() >= job_level.rank() {
                1.0
            } else if resume_level.rank() + 1 == job_level.rank() {
                0.7
            } else {
                0.3
            }
        }
        (None, _) => 1.0,
        (Some(_), None) => 0.0,
    }
}

fn experience_match(job_years: u32, resume_years: u32) -> f32 {
    if job_years == 0 {
        return 1.0;
    }
    let resume = resume_years as f32;
    let required = job_years as f32;
    if resume >= required {
        1.0
    } else if resume >= required * 0.75 {
        0.8
    } else if resume >= required * 0.5 {
        0.5
    } else {
        0.2
    }
}

fn debug_trace(f: &MatchFeatures, required_ratio: f32, nice_ratio: f32) -> DebugTrace {
    DebugTrace {
        job_keywords_count: f.job_keywords.len(),
        resume_keywords_count: f.resume_keywords.len(),
        common_keywords_count: f.common_keywords.len(),
        job_tech_required_count: f.job_tech_required.len(),
        job_tech_nice_count: f.job_tech_nice.len(),
        resume_tech_count: f.resume_tech.len(),
        common_tech_required_count: f.common_tech_required.len(),
        common_tech_nice_count: f.common_tech_nice.len(),
        job_tech_required: f.job_tech_required.iter().cloned().collect(),
        job_tech_nice: f.job_tech_nice.iter().cloned().collect(),
        resume_tech_terms: f.resume_tech.iter().take(10).cloned().collect(),
        required_match_ratio: round3(required_ratio),
        nice_match_ratio: round3(nice_ratio),
        job_seniority: f.job_seniority,
        resume_seniority: f.resume_seniority,
        job_years: f.job_years,
        resume_years: f.resume_years,
        seniority_match: round3(f.seniority_match),
        experience_match: round3(f.experience_match),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_match_ladder() {
        use SeniorityLevel::*;
        assert_eq!(seniority_match(Some(Senior), Some(Senior)), 1.0);
        assert_eq!(seniority_match(Some(Mid), Some(Senior)), 1.0);
        assert_eq!(seniority_match(Some(Senior), Some(Mid)), 0.7);
        assert_eq!(seniority_match(Some(Senior), Some(Junior)), 0.3);
        assert_eq!(seniority_match(None, Some(Junior)), 1.0);
        assert_eq!(seniority_match(None, None), 1.0);
        assert_eq!(seniority_match(Some(Junior), None), 0.0);
    }

    #[test]
    fn test_experience_match_ladder() {
        assert_eq!(experience_match(0, 0), 1.0);
        assert_eq!(experience_match(0, 10), 1.0);
        assert_eq!(experience_match(4, 5), 1.0);
        assert_eq!(experience_match(4, 4), 1.0);
        assert_eq!(experience_match(4, 3), 0.8);
        assert_eq!(experience_match(4, 2), 0.5);
        assert_eq!(experience_match(4, 1), 0.2);
    }

    #[test]
    fn test_set_ratio_defaults() {
        let empty = BTreeSet::new();
        let some: BTreeSet<String> = ["python".to_string()].into_iter().collect();
        assert_eq!(set_ratio(&empty, &empty, 1.0), 1.0);
        assert_eq!(set_ratio(&empty, &empty, 0.0), 0.0);
        assert_eq!(set_ratio(&some, &some, 0.0), 1.0);
    }
}
