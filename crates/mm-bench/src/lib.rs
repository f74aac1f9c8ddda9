//! Measurement around the MiniMark pipeline: token counts, similarity
//! scoring, semantic validation and the strategy benchmark.

pub mod benchmark;
pub mod runs;
pub mod similarity;
pub mod tokens;
pub mod validator;

pub use benchmark::{Benchmark, BenchmarkReport, BenchmarkRow, StrategySummary, STRATEGY_CONFIGS};
pub use similarity::{LazyScorer, SimilarityScorer, TermVectorScorer};
pub use tokens::{TokenCount, TokenCounter};
pub use validator::{SemanticValidator, ValidationReport};

#[cfg(test)]
mod tests;
