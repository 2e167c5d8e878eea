//! Experience-years extraction
//!
//! Two independent signals are computed and the larger wins. Explicit
//! mentions ("5 years", "3+ lat", "3-5 years") take the maximum found. Date
//! ranges ("2018-2021", "2022-present") are summed across every match, so
//! two parallel jobs each count fully; an explicit claim is never diluted by
//! partial date matches.

use crate::error::{Result, ScreenerError};
use chrono::{Datelike, Local};
use regex::Regex;

pub struct ExperienceExtractor {
    explicit_regex: Regex,
    range_regex: Regex,
    dates_regex: Regex,
    present_regex: Regex,
}

impl ExperienceExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            explicit_regex: compile(r"(\d+)\+?\s*(?:years?|lat|roku|yrs?)")?,
            range_regex: compile(r"(\d+)-(\d+)\s*(?:years?|lat|roku)")?,
            dates_regex: compile(r"(\d{4})\s*[-–—]\s*(\d{4})")?,
            present_regex: compile(r"(?i)(\d{4})\s*[-–—]\s*(?:present|current|now|obecnie|today)")?,
        })
    }

    pub fn extract(&self, text: &str) -> u32 {
        self.extract_at(text, Local::now().year())
    }

    /// Extraction with an injected calendar year, so open-ended date ranges
    /// stay testable.
    pub fn extract_at(&self, text: &str, current_year: i32) -> u32 {
        let text_lower = text.to_lowercase();

        let explicit = self.explicit_signal(&text_lower);
        let from_dates = self.date_range_signal(&text_lower, current_year);

        explicit.max(from_dates).max(0) as u32
    }

    fn explicit_signal(&self, text: &str) -> i64 {
        let mut max_years: i64 = 0;

        for caps in self.explicit_regex.captures_iter(text) {
            max_years = max_years.max(parse_number(&caps[1]));
        }
        for caps in self.range_regex.captures_iter(text) {
            let upper = parse_number(&caps[1]).max(parse_number(&caps[2]));
            max_years = max_years.max(upper);
        }

        max_years
    }

    /// Sums `(end - start)` over every non-overlapping closed range plus
    /// `(current_year - start)` over every open range. Deliberately a sum,
    /// not a merge: overlapping employment periods each count fully. A
    /// nonsense range (start after end) contributes negatively; the caller
    /// clamps the combined result at zero.
    fn date_range_signal(&self, text: &str, current_year: i32) -> i64 {
        let mut total: i64 = 0;

        for caps in self.dates_regex.captures_iter(text) {
            let start = parse_number(&caps[1]);
            let end = parse_number(&caps[2]);
            total += end - start;
        }

        for caps in self.present_regex.captures_iter(text) {
            let start = parse_number(&caps[1]);
            total += current_year as i64 - start;
        }

        total
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ScreenerError::Configuration(format!("Invalid experience pattern: {}", e)))
}

fn parse_number(digits: &str) -> i64 {
    digits.parse().unwrap_or(0)
}
