//! Token counting for measuring reduction.

use mm_core::{MmError, Result};
use moka::sync::Cache;
use std::sync::Arc;
use tiktoken_rs::CoreBPE;

/// Deterministic token count for a fixed vocabulary.
pub trait TokenCount: Send + Sync {
    fn count_tokens(&self, text: &str) -> usize;
}

/// BPE token counter backed by `tiktoken-rs`, cached per blake3 content hash.
pub struct TokenCounter {
    encoding: String,
    bpe: Arc<CoreBPE>,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Supported: `cl100k_base`, `o200k_base`, `p50k_base`, `r50k_base`.
    pub fn new(encoding: &str, cache_capacity: u64) -> Result<Self> {
        let bpe = match encoding {
            "cl100k_base" => tiktoken_rs::cl100k_base(),
            "o200k_base" => tiktoken_rs::o200k_base(),
            "p50k_base" => tiktoken_rs::p50k_base(),
            "r50k_base" => tiktoken_rs::r50k_base(),
            other => return Err(MmError::Tokenizer(format!("unknown encoding: {other}"))),
        }
        .map_err(|e| MmError::Tokenizer(e.to_string()))?;

        Ok(Self {
            encoding: encoding.to_string(),
            bpe: Arc::new(bpe),
            cache: Cache::new(cache_capacity),
        })
    }

    pub fn cl100k() -> Result<Self> {
        Self::new("cl100k_base", 10_000)
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Count tokens without touching the cache.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    pub fn count_cached(&self, text: &str) -> usize {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(hash, || self.count(text))
    }
}

impl TokenCount for TokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        self.count_cached(text)
    }
}
