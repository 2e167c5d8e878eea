//! Feature extraction: pure text-analysis functions over resume and job text

pub mod experience;
pub mod fields;
pub mod keywords;
pub mod requirements;
pub mod seniority;
pub mod technical;

/// Escapes a vocabulary term and anchors it on word boundaries. Terms whose
/// edge characters are not word characters (`c++`, `sr.`, `ci/cd`) only get
/// the `\b` assertion on their word-character edges, since `\b` never matches
/// between two non-word characters.
pub(crate) fn bounded_pattern(term: &str) -> String {
    let escaped = regex::escape(term);
    let starts_word = term.chars().next().map_or(false, is_word_char);
    let ends_word = term.chars().last().map_or(false, is_word_char);

    let mut pattern = String::new();
    if starts_word {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&escaped);
    if ends_word {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Word characters in the `\b` sense: alphanumerics and underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Builds a case-insensitive alternation over a vocabulary list. Longer terms
/// come first so the regex crate's leftmost-first alternation cannot shadow
/// `postgresql` with `postgres`.
pub(crate) fn vocabulary_pattern(terms: &[String]) -> String {
    let mut sorted: Vec<&String> = terms.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = sorted
        .iter()
        .map(|t| bounded_pattern(t))
        .collect::<Vec<_>>()
        .join("|");
    format!("(?i)(?:{})", alternation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_bounded_pattern_plain_word() {
        let re = Regex::new(&bounded_pattern("python")).unwrap();
        assert!(re.is_match("loves python daily"));
        assert!(!re.is_match("pythonic"));
    }

    #[test]
    fn test_bounded_pattern_symbol_edges() {
        let re = Regex::new(&bounded_pattern("c++")).unwrap();
        assert!(re.is_match("knows c++ well"));
        assert!(re.is_match("c++"));
        assert!(!re.is_match("xc++"));

        let re = Regex::new(&bounded_pattern("sr.")).unwrap();
        assert!(re.is_match("sr. engineer"));
    }

    #[test]
    fn test_bounded_pattern_underscore_is_a_word_char() {
        let re = Regex::new(&bounded_pattern("python")).unwrap();
        assert!(!re.is_match("my_python"));
        assert!(!re.is_match("python_3"));
        assert!(re.is_match("python 3"));
    }

    #[test]
    fn test_vocabulary_pattern_prefers_longer_terms() {
        let terms = vec!["postgres".to_string(), "postgresql".to_string()];
        let re = Regex::new(&vocabulary_pattern(&terms)).unwrap();
        let found = re.find("uses PostgreSQL").unwrap();
        assert_eq!(found.as_str().to_lowercase(), "postgresql");
    }
}
