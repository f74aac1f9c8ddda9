//! Numbered run artifacts: `run_001_results.csv`, `run_002_results.csv`, ...

use mm_core::{MmError, Result};
use std::path::{Path, PathBuf};

pub const RUN_PREFIX: &str = "run_";

/// Number following `prefix` in a file stem, e.g. `run_012_results` -> 12.
fn run_number(path: &Path, prefix: &str) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    let rest = stem.strip_prefix(prefix)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn run_files(dir: &Path, prefix: &str) -> Result<Vec<(u32, PathBuf)>> {
    let mut runs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(n) = run_number(&path, prefix) {
            runs.push((n, path));
        }
    }
    Ok(runs)
}

/// Next free run number in `dir` (creating it if needed). Starts at 1.
pub fn next_run_number(dir: &Path, prefix: &str) -> Result<u32> {
    std::fs::create_dir_all(dir)?;
    let max = run_files(dir, prefix)?.into_iter().map(|(n, _)| n).max();
    Ok(max.map_or(1, |n| n + 1))
}

/// Highest-numbered `run_*<suffix>` file in `dir`.
pub fn latest_run_file(dir: &Path, suffix: &str) -> Result<PathBuf> {
    if !dir.exists() {
        return Err(MmError::NotFound { path: dir.to_path_buf() });
    }
    run_files(dir, RUN_PREFIX)?
        .into_iter()
        .filter(|(_, p)| p.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.ends_with(suffix)))
        .max_by_key(|(n, _)| *n)
        .map(|(_, p)| p)
        .ok_or_else(|| MmError::NotFound { path: dir.join(format!("{RUN_PREFIX}*{suffix}")) })
}

/// `dir/run_NNN<suffix>`.
pub fn format_run_path(dir: &Path, run_number: u32, suffix: &str) -> PathBuf {
    dir.join(format!("{RUN_PREFIX}{run_number:03}{suffix}"))
}
