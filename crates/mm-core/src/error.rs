use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MmError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Lexicon error: {0}")]
    Lexicon(String),
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MmError>;
