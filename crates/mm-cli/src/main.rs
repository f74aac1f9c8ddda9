//! `minimark` CLI: minify markdown, validate minified output, benchmark
//! strategy combinations.

use anyhow::{bail, Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use mm_bench::runs::{format_run_path, next_run_number, RUN_PREFIX};
use mm_bench::{Benchmark, SemanticValidator, TermVectorScorer};
use mm_core::logging::init_tracing;
use mm_core::{MinimarkConfig, StrategySet};
use mm_minifier::MinificationPipeline;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

const STRATEGY_TAGS: [&str; 6] = ["none", "syntax", "stopwords", "simplify", "synonyms", "all"];
const RESULTS_SUFFIX: &str = "_results.csv";

#[derive(Parser)]
#[command(name = "minimark")]
#[command(version, about = "Minify markdown for LLM context windows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by MINIMARK_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minify a markdown file
    Minify {
        /// Input markdown file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Strategies to apply
        #[arg(long, num_args = 1.., default_value = "all", value_parser = PossibleValuesParser::new(STRATEGY_TAGS))]
        strategy: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare a minified file against its original
    Validate {
        /// Original markdown file
        original: PathBuf,

        /// Minified file
        minified: PathBuf,

        /// Minimum similarity to pass (default from config, 0.85)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Benchmark every strategy combination on a directory of markdown files
    Benchmark {
        /// Directory containing *.md files
        input_dir: PathBuf,

        /// CSV output path (default: next run in the results directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip semantic similarity scoring
        #[arg(long)]
        no_validation: bool,

        /// Tokenizer encoding
        #[arg(long)]
        encoding: Option<String>,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "info" });

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<MinimarkConfig> {
    match path {
        Some(p) => MinimarkConfig::load(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(MinimarkConfig::default()),
    }
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    if !path.exists() {
        bail!("{what} file '{}' not found", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Runs one command. `Ok(false)` means a clean run whose check failed.
fn run(cli: Cli) -> Result<bool> {
    let mut config = load_config(cli.config.as_deref())?;
    tracing::debug!(path = ?cli.config, "configuration ready");

    match cli.command {
        Commands::Minify { input, output, strategy, json } => {
            let text = read_input(&input, "Input")?;
            let set = StrategySet::from_tags_with_aliases(&strategy);
            let pipeline = MinificationPipeline::from_config(&config.minifier)?;
            let result = pipeline.minify_detailed(&text, &set);

            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, &result.output)
                .with_context(|| format!("failed to write {}", output.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Minified {} -> {}", input.display(), output.display());
                println!("Strategies: {set}");
                println!("Original size: {} chars", result.original_len);
                println!("Minified size: {} chars", result.minified_len);
                println!("Reduction: {:.1}%", result.reduction_pct);
            }
            Ok(true)
        }

        Commands::Validate { original, minified, threshold } => {
            let original_text = read_input(&original, "Original")?;
            let minified_text = read_input(&minified, "Minified")?;
            let threshold = threshold.unwrap_or(config.validation.threshold);

            let validator = SemanticValidator::new(Arc::new(TermVectorScorer::new()));
            let report = validator.validate(&original_text, &minified_text, threshold);
            println!(
                "{}",
                report.render(&original.display().to_string(), &minified.display().to_string())
            );

            Ok(report.passes_threshold)
        }

        Commands::Benchmark { input_dir, output, no_validation, encoding } => {
            if !input_dir.exists() {
                bail!("input directory '{}' not found", input_dir.display());
            }
            if !input_dir.is_dir() {
                bail!("'{}' is not a directory", input_dir.display());
            }
            if let Some(encoding) = encoding {
                config.benchmark.encoding = encoding;
            }
            if no_validation {
                config.benchmark.validate = false;
            }

            let output = match output {
                Some(path) => path,
                None => {
                    let dir = &config.benchmark.results_dir;
                    let run = next_run_number(dir, RUN_PREFIX)?;
                    format_run_path(dir, run, RESULTS_SUFFIX)
                }
            };

            let benchmark = Benchmark::from_config(&config)?;
            let report = benchmark.benchmark_directory(&input_dir)?;
            if report.rows.is_empty() {
                println!("No markdown files found in {}", input_dir.display());
                return Ok(true);
            }

            report.write_csv(&output)?;
            println!("Results saved to {}", output.display());
            println!("{}", report.render_summary());
            Ok(true)
        }
    }
}
