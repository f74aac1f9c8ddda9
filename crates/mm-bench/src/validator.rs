//! Semantic validation of minified output.

use crate::similarity::SimilarityScorer;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub similarity: f64,
    pub passes_threshold: bool,
    pub threshold: f64,
    pub degradation_pct: f64,
}

/// Scores a minified text against its original and applies a threshold.
pub struct SemanticValidator {
    scorer: Arc<dyn SimilarityScorer>,
}

impl SemanticValidator {
    pub fn new(scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn compute_similarity(&self, original: &str, minified: &str) -> f64 {
        self.scorer.similarity(original, minified)
    }

    pub fn validate(&self, original: &str, minified: &str, threshold: f64) -> ValidationReport {
        let similarity = self.compute_similarity(original, minified);
        ValidationReport {
            similarity,
            passes_threshold: similarity >= threshold,
            threshold,
            degradation_pct: (1.0 - similarity) * 100.0,
        }
    }
}

impl ValidationReport {
    /// Human-readable block for terminal output.
    pub fn render(&self, original: &str, minified: &str) -> String {
        let rule = "=".repeat(60);
        format!(
            "{rule}\nSEMANTIC VALIDATION RESULTS\n{rule}\n\
             Original file:    {original}\n\
             Minified file:    {minified}\n\
             Similarity score: {:.4}\n\
             Threshold:        {:.2}\n\
             Status:           {}\n\
             Degradation:      {:.2}%\n{rule}",
            self.similarity,
            self.threshold,
            if self.passes_threshold { "PASS" } else { "FAIL" },
            self.degradation_pct,
        )
    }
}
