use crate::error::{MmError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimarkConfig {
    pub minifier: MinifierConfig,
    pub benchmark: BenchmarkConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifierConfig {
    /// Words shorter than this many characters are never replaced by a synonym.
    pub synonym_min_len: usize,
    pub extra_stopwords: Vec<String>,
    pub extra_preserve_terms: Vec<String>,
    /// JSON relation table replacing the built-in one.
    pub relations_path: Option<PathBuf>,
    pub lookup_cache_capacity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub encoding: String,
    pub results_dir: PathBuf,
    pub validate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub threshold: f64,
}

impl Default for MinifierConfig {
    fn default() -> Self {
        Self {
            synonym_min_len: 5,
            extra_stopwords: Vec::new(),
            extra_preserve_terms: Vec::new(),
            relations_path: None,
            lookup_cache_capacity: 10_000,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            encoding: "cl100k_base".into(),
            results_dir: PathBuf::from("results").join("token_reduction"),
            validate: true,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { threshold: 0.85 }
    }
}

impl MinimarkConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a TOML config file. Missing sections fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MmError::NotFound { path: path.to_path_buf() });
        }
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
