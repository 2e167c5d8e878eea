//! Hire recommendation ladder
//!
//! An explicit ordered list of (predicate, outcome) rules evaluated
//! top-to-bottom, first match wins. The rules overlap on purpose: the
//! score-based short-circuit outranks the technical-ratio rules, and the
//! ordering is a contract covered by tests. Do not reorder for seeming
//! logical equivalence. The ladder is intentionally permissive, with several
//! low-bar YES paths favoring recall of plausible candidates over precision.

use crate::scoring::result::{Confidence, Recommendation};

/// The inputs the ladder looks at.
#[derive(Debug, Clone, Copy)]
pub struct RatioSnapshot {
    pub final_score: u32,
    pub technical: f32,
    pub keywords: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    pub reason: &'static str,
}

struct Rule {
    applies: fn(&RatioSnapshot) -> bool,
    outcome: Outcome,
}

const LADDER: &[Rule] = &[
    Rule {
        applies: |s| s.final_score >= 50,
        outcome: Outcome {
            recommendation: Recommendation::Yes,
            confidence: Confidence::High,
            reason: "High overall match score",
        },
    },
    Rule {
        applies: |s| s.technical >= 0.55 && s.keywords >= 0.25,
        outcome: Outcome {
            recommendation: Recommendation::Yes,
            confidence: Confidence::High,
            reason: "Strong technical + keyword match",
        },
    },
    Rule {
        applies: |s| s.technical >= 0.55,
        outcome: Outcome {
            recommendation: Recommendation::Yes,
            confidence: Confidence::Medium,
            reason: "Very high technical skills match (verify other aspects)",
        },
    },
    Rule {
        applies: |s| s.technical >= 0.30 && s.keywords >= 0.30,
        outcome: Outcome {
            recommendation: Recommendation::Yes,
            confidence: Confidence::Medium,
            reason: "Balanced technical + keyword match",
        },
    },
    Rule {
        applies: |s| s.final_score >= 45,
        outcome: Outcome {
            recommendation: Recommendation::Yes,
            confidence: Confidence::Medium,
            reason: "Acceptable overall match",
        },
    },
    Rule {
        applies: |_| true,
        outcome: Outcome {
            recommendation: Recommendation::No,
            confidence: Confidence::Low,
            reason: "Insufficient match",
        },
    },
];

pub fn recommend(snapshot: &RatioSnapshot) -> Outcome {
    LADDER
        .iter()
        .find(|rule| (rule.applies)(snapshot))
        .map(|rule| rule.outcome)
        .expect("ladder ends with a catch-all rule")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(final_score: u32, technical: f32, keywords: f32) -> RatioSnapshot {
        RatioSnapshot {
            final_score,
            technical,
            keywords,
        }
    }

    #[test]
    fn test_score_short_circuit_outranks_technical_rules() {
        // Weak technical ratio, but the score rule comes first.
        let outcome = recommend(&snapshot(52, 0.10, 0.05));
        assert_eq!(outcome.recommendation, Recommendation::Yes);
        assert_eq!(outcome.confidence, Confidence::High);
        assert_eq!(outcome.reason, "High overall match score");
    }

    #[test]
    fn test_strong_technical_plus_keywords() {
        let outcome = recommend(&snapshot(40, 0.60, 0.30));
        assert_eq!(outcome.recommendation, Recommendation::Yes);
        assert_eq!(outcome.confidence, Confidence::High);
        assert_eq!(outcome.reason, "Strong technical + keyword match");
    }

    #[test]
    fn test_technical_only_is_medium_confidence() {
        let outcome = recommend(&snapshot(40, 0.60, 0.10));
        assert_eq!(outcome.recommendation, Recommendation::Yes);
        assert_eq!(outcome.confidence, Confidence::Medium);
        assert_eq!(
            outcome.reason,
            "Very high technical skills match (verify other aspects)"
        );
    }

    #[test]
    fn test_balanced_match() {
        let outcome = recommend(&snapshot(40, 0.35, 0.35));
        assert_eq!(outcome.recommendation, Recommendation::Yes);
        assert_eq!(outcome.reason, "Balanced technical + keyword match");
    }

    #[test]
    fn test_acceptable_score_fallback() {
        let outcome = recommend(&snapshot(46, 0.20, 0.10));
        assert_eq!(outcome.recommendation, Recommendation::Yes);
        assert_eq!(outcome.confidence, Confidence::Medium);
        assert_eq!(outcome.reason, "Acceptable overall match");
    }

    #[test]
    fn test_insufficient_match() {
        let outcome = recommend(&snapshot(30, 0.20, 0.10));
        assert_eq!(outcome.recommendation, Recommendation::No);
        assert_eq!(outcome.confidence, Confidence::Low);
        assert_eq!(outcome.reason, "Insufficient match");
    }
}
