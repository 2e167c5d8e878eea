//! Flattening of heterogeneous structured resume fields into plain text
//!
//! The upstream document-extraction service returns fields in whatever shape
//! its layout heuristics produced: a plain string, a list of strings or
//! records, or a single record. Flattening isolates the scoring engine from
//! that variability and never fails; unknown shapes degrade to a string
//! coercion of each scalar sub-value.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One structured field of an extracted resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    Items(Vec<Field>),
    Record(BTreeMap<String, Value>),
    Other(Value),
}

/// Sectioned output of the document-extraction service. An `error` tag marks
/// a document the service could not read; the engine treats it as an empty
/// resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeFields {
    #[serde(default)]
    pub skills: Option<Field>,
    #[serde(default)]
    pub experience: Option<Field>,
    #[serde(default)]
    pub education: Option<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Field {
    /// Flattens the field into whitespace-joined text. Never fails.
    pub fn flatten(&self) -> String {
        match self {
            Field::Text(s) => s.clone(),
            Field::Items(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(Field::flatten)
                    .filter(|t| !t.is_empty())
                    .collect();
                parts.join(" ")
            }
            Field::Record(map) => record_text(map),
            Field::Other(value) => scalar_text(value),
        }
    }
}

impl ResumeFields {
    pub fn skills_text(&self) -> String {
        flatten_opt(&self.skills)
    }

    pub fn experience_text(&self) -> String {
        flatten_opt(&self.experience)
    }

    pub fn education_text(&self) -> String {
        flatten_opt(&self.education)
    }

    /// All sections joined into one resume text, trimmed.
    pub fn full_text(&self) -> String {
        let joined = format!(
            "{} {} {}",
            self.skills_text(),
            self.experience_text(),
            self.education_text()
        );
        joined.trim().to_string()
    }

    /// True when extraction failed upstream or every section flattens blank.
    pub fn is_empty(&self) -> bool {
        self.error.is_some() || self.full_text().trim().is_empty()
    }
}

fn flatten_opt(field: &Option<Field>) -> String {
    field.as_ref().map(Field::flatten).unwrap_or_default()
}

/// Record flattening prefers a `content` entry, then `value`, then all scalar
/// values joined with spaces.
fn record_text(map: &BTreeMap<String, Value>) -> String {
    if let Some(content) = map.get("content") {
        return scalar_text(content);
    }
    if let Some(value) = map.get("value") {
        return scalar_text(value);
    }
    let parts: Vec<String> = map
        .values()
        .map(scalar_text)
        .filter(|t| !t.is_empty())
        .collect();
    parts.join(" ")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Nested containers inside a record slot still degrade gracefully.
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(scalar_text)
                .filter(|t| !t.is_empty())
                .collect();
            parts.join(" ")
        }
        Value::Object(map) => {
            if let Some(content) = map.get("content") {
                return scalar_text(content);
            }
            if let Some(value) = map.get("value") {
                return scalar_text(value);
            }
            let parts: Vec<String> = map
                .values()
                .map(scalar_text)
                .filter(|t| !t.is_empty())
                .collect();
            parts.join(" ")
        }
    }
}
