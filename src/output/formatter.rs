//! Result formatters with rich console presentation

use crate::error::Result;
use crate::scoring::result::{AnalysisResult, Confidence, Recommendation};
use colored::{Color, Colorize};

/// Trait for rendering an analysis result into a printable string.
pub trait OutputFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;
}

/// Console formatter with colors and an optional debug section.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping results into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn colorize_bold(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u32) -> Color {
        match score {
            70..=100 => Color::Green,
            50..=69 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn recommendation_color(recommendation: Recommendation) -> Color {
        match recommendation {
            Recommendation::Yes => Color::Green,
            Recommendation::No => Color::Red,
        }
    }

    fn confidence_color(confidence: Confidence) -> Color {
        match confidence {
            Confidence::High => Color::Green,
            Confidence::Medium => Color::Yellow,
            Confidence::Low => Color::Red,
        }
    }

    fn format_header(&self, title: &str) -> String {
        format!("\n{}\n", self.colorize_bold(title, Color::Blue))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("CANDIDATE SCREENING RESULT"));

        let score_text = format!("{}/100", result.score);
        output.push_str(&format!(
            "Score:          {}\n",
            self.colorize_bold(&score_text, Self::score_color(result.score))
        ));
        output.push_str(&format!(
            "Recommendation: {} ({} confidence)\n",
            self.colorize_bold(
                &result.recommendation.to_string(),
                Self::recommendation_color(result.recommendation)
            ),
            self.colorize(
                &result.recommendation_confidence.to_string(),
                Self::confidence_color(result.recommendation_confidence)
            )
        ));
        output.push_str(&format!("Reason:         {}\n", result.recommendation_reason));

        if !result.strong_matches.is_empty() {
            output.push_str(&self.format_header("STRONG MATCHES"));
            for entry in &result.strong_matches {
                output.push_str(&format!("  {}\n", self.colorize(entry, Color::Green)));
            }
        }

        if !result.missing_requirements.is_empty() {
            output.push_str(&self.format_header("MISSING REQUIREMENTS"));
            for entry in &result.missing_requirements {
                output.push_str(&format!("  {}\n", self.colorize(entry, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("MATCH BREAKDOWN"));
        let ratios = &result.similarity_scores;
        output.push_str(&format!("  Technical:  {:>6.1}%\n", ratios.technical * 100.0));
        output.push_str(&format!("  Keywords:   {:>6.1}%\n", ratios.keywords * 100.0));
        output.push_str(&format!("  Experience: {:>6.1}%\n", ratios.experience * 100.0));
        output.push_str(&format!("  Semantic:   {:>6.1}%\n", ratios.embedding * 100.0));

        if self.detailed {
            output.push_str(&self.format_header("DEBUG TRACE"));
            output.push_str(&serde_json::to_string_pretty(&result.debug)?);
            output.push('\n');
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::result::AnalysisResult;

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter
            .format_result(&AnalysisResult::no_data())
            .unwrap();

        assert!(output.contains("0/100"));
        assert!(output.contains("NO (low confidence)"));
        assert!(output.contains("No data in resume"));
        assert!(output.contains("No resume data to analyze"));
        assert!(!output.contains("DEBUG TRACE"));
    }

    #[test]
    fn test_console_detailed_includes_debug_trace() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter
            .format_result(&AnalysisResult::no_data())
            .unwrap();

        assert!(output.contains("DEBUG TRACE"));
        assert!(output.contains("job_keywords_count"));
    }

    #[test]
    fn test_json_output_is_valid_and_complete() {
        let formatter = JsonFormatter::new(true);
        let output = formatter
            .format_result(&AnalysisResult::no_data())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["recommendation"], "NO");
        assert_eq!(value["recommendation_confidence"], "low");
        assert_eq!(value["missing_requirements"][0], "No data in resume");
    }
}
