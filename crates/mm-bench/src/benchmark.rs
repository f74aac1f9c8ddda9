//! Benchmark harness: token reduction per strategy configuration.

use crate::similarity::{LazyScorer, SimilarityScorer};
use crate::tokens::{TokenCount, TokenCounter};
use chrono::{DateTime, Utc};
use mm_core::{MinimarkConfig, MmError, Result, Strategy, StrategySet};
use mm_minifier::MinificationPipeline;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Configurations measured for every file, in report order.
pub const STRATEGY_CONFIGS: &[(&str, &[Strategy])] = &[
    ("baseline", &[]),
    ("syntax_only", &[Strategy::Syntax]),
    ("syntax_stopwords", &[Strategy::Syntax, Strategy::Stopwords]),
    (
        "syntax_stopwords_simplify",
        &[Strategy::Syntax, Strategy::Stopwords, Strategy::Simplify],
    ),
    ("all_strategies", &Strategy::ALL),
];

pub const CSV_HEADER: &str = "file,strategy,original_tokens,minified_tokens,reduction_pct,semantic_similarity,processing_time_ms,original_chars,minified_chars";

/// One file measured under one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRow {
    pub file: String,
    pub strategy: String,
    pub original_tokens: usize,
    pub minified_tokens: usize,
    pub reduction_pct: f64,
    /// `None` for the baseline and when validation is off.
    pub semantic_similarity: Option<f64>,
    pub processing_time_ms: f64,
    pub original_chars: usize,
    pub minified_chars: usize,
}

impl BenchmarkRow {
    fn csv_line(&self) -> String {
        let similarity = self
            .semantic_similarity
            .map(|s| s.to_string())
            .unwrap_or_default();
        format!(
            "{},{},{},{},{},{},{},{},{}",
            csv_field(&self.file),
            csv_field(&self.strategy),
            self.original_tokens,
            self.minified_tokens,
            self.reduction_pct,
            similarity,
            self.processing_time_ms,
            self.original_chars,
            self.minified_chars,
        )
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn reduction_pct(original: usize, minified: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - minified as f64) / original as f64 * 100.0
}

/// Averages over every file for one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub files: usize,
    pub avg_reduction_pct: f64,
    pub avg_similarity: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub files: usize,
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkReport {
    pub fn summary(&self) -> Vec<StrategySummary> {
        STRATEGY_CONFIGS
            .iter()
            .filter_map(|(name, _)| {
                let rows: Vec<&BenchmarkRow> =
                    self.rows.iter().filter(|r| r.strategy == *name).collect();
                if rows.is_empty() {
                    return None;
                }
                let avg_reduction_pct =
                    rows.iter().map(|r| r.reduction_pct).sum::<f64>() / rows.len() as f64;
                let scores: Vec<f64> = rows.iter().filter_map(|r| r.semantic_similarity).collect();
                let avg_similarity =
                    (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64);
                Some(StrategySummary {
                    strategy: name.to_string(),
                    files: rows.len(),
                    avg_reduction_pct,
                    avg_similarity,
                })
            })
            .collect()
    }

    pub fn render_summary(&self) -> String {
        let rule = "=".repeat(70);
        let mut out = format!("{rule}\nBENCHMARK SUMMARY\n{rule}\n");
        for s in self.summary() {
            let _ = writeln!(out, "\n{}:", s.strategy);
            let _ = writeln!(out, "  Avg token reduction: {:.1}%", s.avg_reduction_pct);
            if let Some(sim) = s.avg_similarity {
                let _ = writeln!(out, "  Avg semantic similarity: {sim:.4}");
            }
        }
        let _ = write!(out, "\n{rule}");
        out
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.csv_line());
            out.push('\n');
        }
        out
    }

    /// Write the CSV, creating parent directories as needed.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_csv())?;
        tracing::info!(path = %path.display(), rows = self.rows.len(), "wrote benchmark results");
        Ok(())
    }
}

/// Runs every configuration in [`STRATEGY_CONFIGS`] over documents.
pub struct Benchmark {
    pipeline: MinificationPipeline,
    counter: Arc<dyn TokenCount>,
    scorer: LazyScorer,
    validate: bool,
}

impl Benchmark {
    pub fn new(pipeline: MinificationPipeline, counter: Arc<dyn TokenCount>) -> Self {
        Self {
            pipeline,
            counter,
            scorer: LazyScorer::default(),
            validate: true,
        }
    }

    pub fn from_config(config: &MinimarkConfig) -> Result<Self> {
        let pipeline = MinificationPipeline::from_config(&config.minifier)?;
        let counter = TokenCounter::new(&config.benchmark.encoding, 10_000)?;
        Ok(Self::new(pipeline, Arc::new(counter)).validate(config.benchmark.validate))
    }

    pub fn with_scorer(mut self, scorer: LazyScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn scorer(&self) -> &LazyScorer {
        &self.scorer
    }

    /// Measure one in-memory document under every configuration.
    pub fn benchmark_text(&self, name: &str, text: &str) -> Vec<BenchmarkRow> {
        let original_tokens = self.counter.count_tokens(text);
        let original_chars = text.chars().count();

        STRATEGY_CONFIGS
            .iter()
            .map(|(config_name, strategies)| {
                let set: StrategySet = strategies.iter().copied().collect();

                let start = Instant::now();
                let minified = self.pipeline.minify(text, &set);
                let processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;

                let minified_tokens = self.counter.count_tokens(&minified);
                let semantic_similarity = (self.validate && !set.is_empty())
                    .then(|| self.scorer.similarity(text, &minified));

                BenchmarkRow {
                    file: name.to_string(),
                    strategy: config_name.to_string(),
                    original_tokens,
                    minified_tokens,
                    reduction_pct: reduction_pct(original_tokens, minified_tokens),
                    semantic_similarity,
                    processing_time_ms,
                    original_chars,
                    minified_chars: minified.chars().count(),
                }
            })
            .collect()
    }

    pub fn benchmark_file(&self, path: impl AsRef<Path>) -> Result<Vec<BenchmarkRow>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MmError::NotFound { path: path.to_path_buf() });
        }
        let text = std::fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!(file = %name, "benchmarking");
        Ok(self.benchmark_text(&name, &text))
    }

    /// Benchmark every `*.md` file directly inside `dir`. Files that fail to
    /// read are logged and skipped.
    pub fn benchmark_directory(&self, dir: impl AsRef<Path>) -> Result<BenchmarkReport> {
        let files = markdown_files(dir.as_ref())?;
        tracing::info!(
            files = files.len(),
            configs = STRATEGY_CONFIGS.len(),
            validate = self.validate,
            "starting benchmark"
        );

        let per_file: Vec<Result<Vec<BenchmarkRow>>> =
            files.par_iter().map(|f| self.benchmark_file(f)).collect();

        let mut rows = Vec::new();
        let mut benchmarked = 0;
        for (path, result) in files.iter().zip(per_file) {
            match result {
                Ok(r) => {
                    benchmarked += 1;
                    rows.extend(r);
                }
                Err(e) => tracing::warn!(file = %path.display(), error = %e, "skipping file"),
            }
        }

        Ok(BenchmarkReport {
            generated_at: Utc::now(),
            files: benchmarked,
            rows,
        })
    }
}

/// Sorted `*.md` files directly inside `dir`.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(MmError::NotFound { path: dir.to_path_buf() });
    }
    if !dir.is_dir() {
        return Err(MmError::NotADirectory { path: dir.to_path_buf() });
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
