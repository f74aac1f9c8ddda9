//! Simplify stage: remove filler phrases and intensifiers.

use crate::TextStage;
use mm_core::{MmError, Result, Strategy};
use regex::Regex;
use std::sync::LazyLock;

/// Default filler patterns, applied in this order.
pub const DEFAULT_FILLER_PATTERNS: &[&str] = &[
    r"\b(in order to|in my opinion|I think|I believe|it seems|as you know)\b",
    r"\b(basically|actually|literally|honestly|frankly)\b",
    r"\b(very|really|quite|rather|somewhat|fairly)\b",
];

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_SPACE_BEFORE_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([.,!?])").unwrap());

static DEFAULT_COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DEFAULT_FILLER_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
});

/// Ordered list of case-insensitive filler patterns.
#[derive(Debug, Clone)]
pub struct FillerSimplifier {
    patterns: Vec<Regex>,
}

impl FillerSimplifier {
    pub fn new() -> Self {
        Self { patterns: DEFAULT_COMPILED.clone() }
    }

    /// Compile a custom pattern list. Patterns are matched case-insensitively.
    pub fn with_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                Regex::new(&format!("(?i){}", p.as_ref()))
                    .map_err(|e| MmError::InvalidPattern(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Delete every filler match, then tidy the spacing left behind.
    pub fn simplify(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut result = text.to_string();
        for re in &self.patterns {
            result = re.replace_all(&result, "").into_owned();
        }
        let result = RE_WHITESPACE.replace_all(&result, " ");
        let result = RE_SPACE_BEFORE_PUNCT.replace_all(&result, "${1}");
        result.trim().to_string()
    }
}

impl Default for FillerSimplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStage for FillerSimplifier {
    fn strategy(&self) -> Strategy {
        Strategy::Simplify
    }

    fn apply(&self, text: &str) -> String {
        self.simplify(text)
    }
}
