//! Technical term extraction and normalization
//!
//! Matching runs against the curated vocabulary groups from the config,
//! case-insensitive and word-boundary-anchored. Matched terms are normalized
//! so interchangeable technologies count as one requirement: a job asking for
//! PostgreSQL is satisfied by a resume listing MySQL.

use crate::config::VocabularyConfig;
use crate::error::{Result, ScreenerError};
use crate::extract::vocabulary_pattern;
use regex::Regex;
use std::collections::BTreeSet;

pub struct TechnicalTermExtractor {
    group_regexes: Vec<Regex>,
    database_synonyms: Vec<String>,
}

impl TechnicalTermExtractor {
    pub fn new(vocabulary: &VocabularyConfig) -> Result<Self> {
        let mut group_regexes = Vec::with_capacity(vocabulary.technical_groups.len());
        for group in &vocabulary.technical_groups {
            let regex = Regex::new(&vocabulary_pattern(&group.terms)).map_err(|e| {
                ScreenerError::Configuration(format!(
                    "Invalid technical vocabulary group '{}': {}",
                    group.name, e
                ))
            })?;
            group_regexes.push(regex);
        }

        Ok(Self {
            group_regexes,
            database_synonyms: vocabulary
                .database_synonyms
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        })
    }

    /// All normalized technical terms found in the text.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut terms = BTreeSet::new();
        for regex in &self.group_regexes {
            for found in regex.find_iter(text) {
                terms.insert(self.normalize(found.as_str()));
            }
        }
        terms
    }

    /// Collapses synonymous technology names to one canonical token.
    /// Idempotent: normalizing an already-normalized term is a no-op.
    pub fn normalize(&self, term: &str) -> String {
        let term_lower = term.to_lowercase();

        if self
            .database_synonyms
            .iter()
            .any(|synonym| term_lower.contains(synonym))
        {
            return "sql".to_string();
        }

        if term_lower.contains("node") {
            return "node.js".to_string();
        }

        term_lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn extractor() -> TechnicalTermExtractor {
        TechnicalTermExtractor::new(&Config::default().vocabulary).unwrap()
    }

    #[test]
    fn test_extracts_known_terms_case_insensitively() {
        let terms = extractor().extract("Senior PYTHON developer with Django and Docker");
        assert!(terms.contains("python"));
        assert!(terms.contains("django"));
        assert!(terms.contains("docker"));
    }

    #[test]
    fn test_word_boundary_anchoring() {
        let terms = extractor().extract("pythonic gourmet, acidjava brew");
        assert!(terms.is_empty());
    }

    #[test]
    fn test_multi_word_and_symbol_terms() {
        let terms = extractor().extract("machine learning, CI/CD pipelines, C++ and C#");
        assert!(terms.contains("machine learning"));
        assert!(terms.contains("ci/cd"));
        assert!(terms.contains("c++"));
        assert!(terms.contains("c#"));
    }

    #[test]
    fn test_database_variants_collapse_to_sql() {
        let e = extractor();
        for variant in ["PostgreSQL", "postgres", "MySQL", "mssql", "Oracle", "sqlite", "MariaDB", "SQL"] {
            let terms = e.extract(&format!("knows {}", variant));
            assert!(terms.contains("sql"), "{} should normalize to sql", variant);
        }
    }

    #[test]
    fn test_node_variants_collapse() {
        let e = extractor();
        assert!(e.extract("Node.js services").contains("node.js"));
        assert!(e.extract("nodejs services").contains("node.js"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let e = extractor();
        for term in ["postgresql", "nodejs", "python", "sql", "node.js"] {
            let once = e.normalize(term);
            assert_eq!(e.normalize(&once), once);
        }
    }

    #[test]
    fn test_mongodb_and_redis_stay_themselves() {
        let terms = extractor().extract("MongoDB and Redis experience");
        assert!(terms.contains("mongodb"));
        assert!(terms.contains("redis"));
    }
}
