//! Shared vocabulary for MiniMark: strategy tags, configuration, errors and
//! tracing setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::MinimarkConfig;
pub use error::{MmError, Result};
pub use types::{Strategy, StrategySet};
