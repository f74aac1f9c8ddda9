//! Semantic similarity scoring.
//!
//! The minifier never calls into this module; it exists for validation and
//! benchmarking. Heavy scorers go behind [`LazyScorer`] so they are only built
//! when a score is actually requested.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Symmetric similarity in `[0, 1]`; 1.0 means identical meaning.
pub trait SimilarityScorer: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Cosine similarity of lower-cased term-frequency vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermVectorScorer;

impl TermVectorScorer {
    pub fn new() -> Self {
        Self
    }

    fn term_counts(text: &str) -> HashMap<String, f64> {
        let mut counts = HashMap::new();
        for term in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            *counts.entry(term.to_lowercase()).or_insert(0.0) += 1.0;
        }
        counts
    }
}

/// Cosine similarity between sparse vectors.
pub fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum();
    let norm_a = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.values().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

impl SimilarityScorer for TermVectorScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let score = cosine_similarity(&Self::term_counts(a), &Self::term_counts(b));
        score.clamp(0.0, 1.0)
    }
}

type ScorerFactory = Box<dyn Fn() -> Arc<dyn SimilarityScorer> + Send + Sync>;

/// Builds the wrapped scorer on first use; the factory runs at most once.
pub struct LazyScorer {
    factory: ScorerFactory,
    scorer: OnceLock<Arc<dyn SimilarityScorer>>,
}

impl LazyScorer {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn SimilarityScorer> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            scorer: OnceLock::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.scorer.get().is_some()
    }

    pub fn get(&self) -> &Arc<dyn SimilarityScorer> {
        self.scorer.get_or_init(|| {
            tracing::info!("initializing similarity scorer");
            (self.factory)()
        })
    }
}

impl Default for LazyScorer {
    fn default() -> Self {
        Self::new(|| Arc::new(TermVectorScorer::new()))
    }
}

impl SimilarityScorer for LazyScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.get().similarity(a, b)
    }
}
