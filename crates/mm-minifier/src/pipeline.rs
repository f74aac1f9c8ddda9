//! Minification pipeline: runs the selected stages in canonical order.

use crate::lexicon::{CachedLookup, LexicalRelationLookup, RelationTable};
use crate::{FillerSimplifier, StopwordFilter, SyntaxStripper, SynonymCompactor, TextStage};
use mm_core::config::MinifierConfig;
use mm_core::{Result, Strategy, StrategySet};
use serde::Serialize;
use std::sync::Arc;

/// Minification result with statistics. Lengths are in characters.
#[derive(Debug, Clone, Serialize)]
pub struct MinifyResult {
    pub output: String,
    pub original_len: usize,
    pub minified_len: usize,
    pub reduction_pct: f64,
    pub strategies_applied: Vec<Strategy>,
}

impl MinifyResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minified_len as f64 / self.original_len as f64
    }
}

/// Owns the linguistic tables for all four stages. Cheap to share across
/// threads; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct MinificationPipeline {
    syntax: SyntaxStripper,
    stopwords: StopwordFilter,
    simplify: FillerSimplifier,
    synonyms: SynonymCompactor,
}

impl MinificationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from config: extra stopwords and preserve terms, synonym length
    /// threshold, and an optional relation table file fronted by a cache.
    pub fn from_config(config: &MinifierConfig) -> Result<Self> {
        let table = match &config.relations_path {
            Some(path) => RelationTable::load(path)?,
            None => RelationTable::builtin(),
        };
        let lookup: Arc<dyn LexicalRelationLookup> =
            Arc::new(CachedLookup::new(table, config.lookup_cache_capacity));

        Ok(Self {
            syntax: SyntaxStripper::new(),
            stopwords: StopwordFilter::new().extend(&config.extra_stopwords),
            simplify: FillerSimplifier::new(),
            synonyms: SynonymCompactor::with_lookup(lookup)
                .preserve(&config.extra_preserve_terms)
                .min_word_len(config.synonym_min_len),
        })
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_simplifier(mut self, simplify: FillerSimplifier) -> Self {
        self.simplify = simplify;
        self
    }

    pub fn with_synonyms(mut self, synonyms: SynonymCompactor) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn stage(&self, strategy: Strategy) -> &dyn TextStage {
        match strategy {
            Strategy::Syntax => &self.syntax,
            Strategy::Stopwords => &self.stopwords,
            Strategy::Simplify => &self.simplify,
            Strategy::Synonyms => &self.synonyms,
        }
    }

    /// Run the requested stages. Order is always syntax, stopwords, simplify,
    /// synonyms; an empty set returns the input unchanged.
    pub fn minify(&self, text: &str, requested: &StrategySet) -> String {
        self.minify_detailed(text, requested).output
    }

    pub fn minify_detailed(&self, text: &str, requested: &StrategySet) -> MinifyResult {
        let original_len = text.chars().count();
        let mut result = text.to_string();
        let mut applied = Vec::new();

        for strategy in Strategy::ALL {
            if !requested.contains(strategy) {
                continue;
            }
            let before = result.chars().count();
            result = self.stage(strategy).apply(&result);
            let after = result.chars().count();
            tracing::debug!(stage = %strategy, before, after, "applied stage");
            applied.push(strategy);
        }

        let minified_len = result.chars().count();
        let reduction = if original_len > 0 {
            (original_len as f64 - minified_len as f64) / original_len as f64 * 100.0
        } else {
            0.0
        };

        MinifyResult {
            output: result,
            original_len,
            minified_len,
            reduction_pct: reduction,
            strategies_applied: applied,
        }
    }
}
