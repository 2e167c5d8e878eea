//! Explainability layer: ordered strong-match and missing-requirement lists
//!
//! Both lists are capped at 6 entries and prioritized: seniority/experience
//! first, then required technical terms, then nice-to-haves, then plain
//! keywords as backfill. Term sets are BTreeSets so the output order is
//! deterministic.

use crate::scoring::engine::MatchFeatures;

pub(crate) const MAX_ENTRIES: usize = 6;

pub(crate) fn strong_matches(f: &MatchFeatures) -> Vec<String> {
    let mut matches = Vec::new();

    if f.seniority_match >= 0.7 {
        if let (Some(_), Some(resume_level)) = (f.job_seniority, f.resume_seniority) {
            matches.push(format!(
                "✓ {} level match",
                resume_level.to_string().to_uppercase()
            ));
        }
        if f.experience_match >= 0.8 && f.job_years > 0 {
            matches.push(format!(
                "✓ {}+ years experience (req: {}+)",
                f.resume_years, f.job_years
            ));
        }
    }

    for tech in f.common_tech_required.iter().take(3) {
        matches.push(format!("✓ {} (Required)", tech.to_uppercase()));
    }
    for tech in f.common_tech_nice.iter().take(2) {
        matches.push(format!("✓ {} (Nice-to-have)", tech.to_uppercase()));
    }

    // Non-technical keyword overlap rounds out the picture.
    for keyword in f
        .common_keywords
        .iter()
        .filter(|k| !f.job_tech_all.contains(*k))
        .take(2)
    {
        matches.push(keyword.clone());
    }

    if matches.is_empty() {
        matches.push("Overall semantic profile match".to_string());
    }

    matches.truncate(MAX_ENTRIES);
    matches
}

pub(crate) fn missing_requirements(f: &MatchFeatures) -> Vec<String> {
    let mut missing = Vec::new();

    if f.seniority_match < 0.7 {
        if let Some(job_level) = f.job_seniority {
            match f.resume_seniority {
                None => missing.push(format!(
                    "⚠ {} level not specified",
                    job_level.to_string().to_uppercase()
                )),
                Some(resume_level) => missing.push(format!(
                    "⚠ Looking for {} (candidate: {})",
                    job_level.to_string().to_uppercase(),
                    resume_level
                )),
            }
        }
    }

    if f.experience_match < 0.75 && f.job_years > 0 {
        missing.push(format!(
            "⚠ Need {}+ years (candidate: {} years)",
            f.job_years, f.resume_years
        ));
    }

    for tech in f.job_tech_required.difference(&f.resume_tech).take(3) {
        missing.push(format!("❌ {} (Required!)", tech.to_uppercase()));
    }
    for tech in f.job_tech_nice.difference(&f.resume_tech).take(2) {
        missing.push(format!("⚠ {} (Nice-to-have)", tech.to_uppercase()));
    }

    // Backfill with long unmatched non-technical keywords, only while the
    // list still has room.
    if missing.len() < MAX_ENTRIES {
        for keyword in f
            .job_keywords
            .iter()
            .filter(|k| {
                !f.resume_keywords.contains(*k) && !f.job_tech_all.contains(*k) && k.len() > 4
            })
            .take(2)
        {
            missing.push(keyword.clone());
        }
    }

    if missing.is_empty() {
        missing.push("✅ No key gaps identified".to_string());
    }

    missing.truncate(MAX_ENTRIES);
    missing
}
