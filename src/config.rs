//! Configuration management for the resume screener
//!
//! All extraction vocabularies (technical term groups, stop words, seniority
//! markers, section headings) live here as editable data so new terms or
//! languages can be added without touching the extraction control flow.

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub embedding: EmbeddingConfig,
    pub vocabulary: VocabularyConfig,
}

/// Point weights for the final 0-100 score. The four weights are expected to
/// sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub technical_weight: f32,
    pub keyword_weight: f32,
    pub experience_weight: f32,
    pub embedding_weight: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Input ceiling of the embedding provider, in characters.
    pub max_input_chars: usize,
    /// Lower bound of the provider's observed useful cosine range. Raw
    /// similarities are rescaled as `(raw - floor) / span`, clamped to [0, 1].
    /// Provider-specific calibration: recalibrate when the provider changes.
    pub calibration_floor: f32,
    pub calibration_span: f32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub technical_groups: Vec<TechnicalGroup>,
    /// Database-engine names that all collapse to the canonical token `sql`.
    pub database_synonyms: Vec<String>,
    pub stop_words: Vec<String>,
    pub senior_markers: Vec<String>,
    pub mid_markers: Vec<String>,
    pub junior_markers: Vec<String>,
    pub required_headings: Vec<String>,
    pub nice_to_have_headings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalGroup {
    pub name: String,
    pub terms: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                technical_weight: 45.0,
                keyword_weight: 25.0,
                experience_weight: 20.0,
                embedding_weight: 10.0,
            },
            embedding: EmbeddingConfig {
                max_input_chars: 8000,
                calibration_floor: 0.3,
                calibration_span: 0.6,
                request_timeout_secs: 60,
            },
            vocabulary: VocabularyConfig {
                technical_groups: vec![
                    TechnicalGroup {
                        name: "languages".to_string(),
                        terms: strings(&[
                            "python", "java", "javascript", "typescript", "c++", "c#",
                            "ruby", "php", "swift", "kotlin", "go", "rust",
                        ]),
                    },
                    TechnicalGroup {
                        name: "frameworks".to_string(),
                        terms: strings(&[
                            "react", "angular", "vue", "django", "flask", "spring",
                            "node.js", "nodejs", "express", "fastapi",
                        ]),
                    },
                    TechnicalGroup {
                        name: "infrastructure".to_string(),
                        terms: strings(&[
                            "docker", "kubernetes", "aws", "azure", "gcp", "terraform",
                            "jenkins", "gitlab", "github",
                        ]),
                    },
                    TechnicalGroup {
                        name: "datastores".to_string(),
                        terms: strings(&[
                            "sql", "postgresql", "postgres", "mysql", "mssql", "mongodb",
                            "redis", "elasticsearch", "oracle", "sqlite", "mariadb",
                        ]),
                    },
                    TechnicalGroup {
                        name: "practices".to_string(),
                        terms: strings(&[
                            "git", "agile", "scrum", "ci/cd", "devops", "rest", "api",
                            "microservices",
                        ]),
                    },
                    TechnicalGroup {
                        name: "ml_ai".to_string(),
                        terms: strings(&[
                            "machine learning", "ai", "deep learning", "nlp",
                            "computer vision", "data science",
                        ]),
                    },
                ],
                database_synonyms: strings(&[
                    "sql", "postgresql", "postgres", "mysql", "mssql", "oracle",
                    "sqlite", "mariadb",
                ]),
                stop_words: strings(&[
                    "the", "and", "for", "with", "this", "that", "from", "are", "was",
                    "were", "been", "have", "has", "had", "will", "would", "could",
                    "should", "may", "can", "must", "but", "not", "all", "any", "some",
                    "such", "than", "too", "very", "just", "you", "your", "our",
                    "their", "his", "her", "its", "who", "what", "where", "when",
                    "why", "how", "they", "them", "these", "those", "then", "now",
                    "only", "also",
                    // Polish
                    "więc", "oraz", "jako", "przez", "przy", "nad", "pod", "czy",
                    "lub", "jak",
                    // Seniority words are scored separately, never as keywords
                    "senior", "junior", "mid", "middle", "years", "year", "lat", "lata",
                ]),
                senior_markers: strings(&[
                    "senior", "sr.", "lead", "principal", "architect", "expert",
                ]),
                mid_markers: strings(&["mid", "middle", "regular", "intermediate"]),
                junior_markers: strings(&[
                    "junior", "jr.", "entry-level", "entry level", "trainee", "intern",
                    "młodszy",
                ]),
                required_headings: strings(&[
                    "requirements", "requirement", "required", "must have",
                    "must-have", "wymagania", "wymagane", "obowiązkowe", "necessary",
                ]),
                nice_to_have_headings: strings(&[
                    "nice to have", "nice-to-have", "preferred", "optional",
                    "mile widziane", "dodatkowo", "would be plus", "desirable",
                    "bonus",
                ]),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ScreenerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}
