//! MiniMark minifier: shrinks markdown for LLM context windows.
//!
//! Stages, always applied in this order when selected:
//! 1. Syntax: strip markdown decoration, keep content
//! 2. Stopwords: drop low-information words, keep sentence anchors
//! 3. Simplify: remove filler phrases and intensifiers
//! 4. Synonyms: swap long words for shorter synonyms

pub mod lexicon;
pub mod pipeline;
pub mod simplify;
pub mod stopwords;
pub mod synonyms;
pub mod syntax;
pub mod tokenize;

pub use lexicon::{CachedLookup, LexicalRelationLookup, RelationTable};
pub use mm_core::{Strategy, StrategySet};
pub use pipeline::{MinificationPipeline, MinifyResult};
pub use simplify::FillerSimplifier;
pub use stopwords::StopwordFilter;
pub use synonyms::SynonymCompactor;
pub use syntax::SyntaxStripper;

/// A single text rewrite. Implementations are pure and total: empty input
/// yields empty output.
pub trait TextStage: Send + Sync {
    fn strategy(&self) -> Strategy;

    fn apply(&self, text: &str) -> String;
}
