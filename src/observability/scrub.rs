//! Scrubbing of sensitive substrings from metric label values.

use regex::Regex;

const REDACTED: &str = "[REDACTED]";

/// Redacts sensitive-looking substrings before they become metric labels.
///
/// Covers the common offenders in URL paths: long hex tokens, long digit
/// runs (account/card numbers), JWT-shaped values, and email addresses.
/// Anything matched is replaced wholesale; this bounds label cardinality
/// and keeps path parameters out of the metrics registry.
pub struct Scrubber {
    patterns: Vec<Regex>,
}

impl Scrubber {
    pub fn new() -> Self {
        let patterns = [
            // JWT-shaped values first, before the hex/digit rules split them up
            r"eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*",
            // Email addresses
            r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            // Long hex tokens (API keys, session ids)
            r"[0-9a-fA-F]{16,}",
            // Long digit runs (account numbers, card numbers)
            r"\d{8,}",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("scrub pattern must compile"))
        .collect();

        Self { patterns }
    }

    /// Replace every sensitive match in `input` with a redaction marker.
    pub fn scrub(&self, input: &str) -> String {
        let mut output = input.to_string();
        for pattern in &self.patterns {
            output = pattern.replace_all(&output, REDACTED).into_owned();
        }
        output
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}
