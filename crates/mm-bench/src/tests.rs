use crate::benchmark::*;
use crate::runs::*;
use crate::similarity::*;
use crate::tokens::*;
use crate::validator::*;
use mm_core::{MinimarkConfig, MmError, Strategy};
use mm_minifier::MinificationPipeline;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const DOC: &str = "# Guide\n\nThis is **very** important, please read the [docs](https://x.io).\n\n- Utilize the API frequently.\n";

/// Whitespace-separated word count; keeps tests independent of BPE data.
struct WordCounter;

impl TokenCount for WordCounter {
    fn count_tokens(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

fn bench() -> Benchmark {
    Benchmark::new(MinificationPipeline::new(), Arc::new(WordCounter))
}

// ========== Tokens ==========

#[test]
fn test_counter_cl100k() {
    let counter = TokenCounter::cl100k().unwrap();
    assert_eq!(counter.encoding(), "cl100k_base");
    assert_eq!(counter.count(""), 0);
    assert!(counter.count("hello world") >= 2);
}

#[test]
fn test_counter_cached_matches_uncached() {
    let counter = TokenCounter::new("cl100k_base", 100).unwrap();
    let text = "The quick brown fox jumps over the lazy dog.";
    let direct = counter.count(text);
    assert_eq!(counter.count_cached(text), direct);
    assert_eq!(counter.count_cached(text), direct);
    assert_eq!(counter.count_tokens(text), direct);
}

#[test]
fn test_counter_unknown_encoding() {
    let err = TokenCounter::new("gpt-9000", 10).err().unwrap();
    assert!(matches!(err, MmError::Tokenizer(_)));
}

// ========== Similarity ==========

#[test]
fn test_term_vector_identical() {
    let s = TermVectorScorer::new();
    assert!((s.similarity("same words here", "same words here") - 1.0).abs() < 1e-9);
}

#[test]
fn test_term_vector_case_insensitive() {
    let s = TermVectorScorer::new();
    assert!((s.similarity("Hello World", "hello world") - 1.0).abs() < 1e-9);
}

#[test]
fn test_term_vector_disjoint() {
    let s = TermVectorScorer::new();
    assert_eq!(s.similarity("alpha beta", "gamma delta"), 0.0);
}

#[test]
fn test_term_vector_empty_side() {
    let s = TermVectorScorer::new();
    assert_eq!(s.similarity("", "something"), 0.0);
    assert_eq!(s.similarity("", ""), 1.0);
}

#[test]
fn test_term_vector_partial_overlap() {
    let s = TermVectorScorer::new();
    let score = s.similarity("the cat sat on the mat", "cat sat mat");
    assert!(score > 0.5 && score < 1.0, "score = {score}");
}

#[test]
fn test_lazy_scorer_builds_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    let lazy = LazyScorer::new(move || {
        c.fetch_add(1, Ordering::SeqCst);
        Arc::new(TermVectorScorer::new())
    });
    assert!(!lazy.is_initialized());
    lazy.similarity("a b", "a b");
    lazy.similarity("a b", "b c");
    assert!(lazy.is_initialized());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// ========== Validator ==========

#[test]
fn test_validator_pass() {
    let v = SemanticValidator::new(Arc::new(TermVectorScorer::new()));
    let report = v.validate("the cat sat", "the cat sat", DEFAULT_THRESHOLD);
    assert!(report.passes_threshold);
    assert!(report.degradation_pct.abs() < 1e-9);
    assert_eq!(report.threshold, DEFAULT_THRESHOLD);
}

#[test]
fn test_validator_fail() {
    let v = SemanticValidator::new(Arc::new(TermVectorScorer::new()));
    let report = v.validate("alpha beta", "gamma", 0.85);
    assert!(!report.passes_threshold);
    assert!((report.degradation_pct - 100.0).abs() < 1e-9);
}

#[test]
fn test_validator_render() {
    let v = SemanticValidator::new(Arc::new(TermVectorScorer::new()));
    let out = v.validate("a b", "a b", 0.9).render("in.md", "out.md");
    assert!(out.contains("Status:           PASS"));
    assert!(out.contains("in.md"));
}

// ========== Runs ==========

#[test]
fn test_runs_first_number() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results");
    assert_eq!(next_run_number(&results, RUN_PREFIX).unwrap(), 1);
    assert!(results.is_dir());
}

#[test]
fn test_runs_next_after_existing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("run_001_results.csv"), "").unwrap();
    std::fs::write(dir.path().join("run_007_results.csv"), "").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "").unwrap();
    assert_eq!(next_run_number(dir.path(), RUN_PREFIX).unwrap(), 8);
}

#[test]
fn test_runs_format_path() {
    let p = format_run_path(std::path::Path::new("out"), 3, "_results.csv");
    assert_eq!(p, std::path::Path::new("out").join("run_003_results.csv"));
}

#[test]
fn test_runs_latest_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("run_002_results.csv"), "").unwrap();
    std::fs::write(dir.path().join("run_010_results.csv"), "").unwrap();
    std::fs::write(dir.path().join("run_011_chart.png"), "").unwrap();
    let latest = latest_run_file(dir.path(), "_results.csv").unwrap();
    assert!(latest.ends_with("run_010_results.csv"));
}

#[test]
fn test_runs_latest_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = latest_run_file(dir.path(), "_results.csv").unwrap_err();
    assert!(matches!(err, MmError::NotFound { .. }));
    let err = latest_run_file(&dir.path().join("nope"), "_results.csv").unwrap_err();
    assert!(matches!(err, MmError::NotFound { .. }));
}

// ========== Benchmark ==========

#[test]
fn test_configs_shape() {
    let names: Vec<_> = STRATEGY_CONFIGS.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec!["baseline", "syntax_only", "syntax_stopwords", "syntax_stopwords_simplify", "all_strategies"]
    );
    assert!(STRATEGY_CONFIGS[0].1.is_empty());
    assert_eq!(STRATEGY_CONFIGS[4].1, &Strategy::ALL[..]);
}

#[test]
fn test_benchmark_text_rows() {
    let rows = bench().benchmark_text("doc.md", DOC);
    assert_eq!(rows.len(), STRATEGY_CONFIGS.len());

    let baseline = &rows[0];
    assert_eq!(baseline.strategy, "baseline");
    assert_eq!(baseline.minified_tokens, baseline.original_tokens);
    assert_eq!(baseline.reduction_pct, 0.0);
    assert!(baseline.semantic_similarity.is_none());
    assert_eq!(baseline.minified_chars, baseline.original_chars);

    for row in &rows[1..] {
        assert_eq!(row.file, "doc.md");
        assert!(row.semantic_similarity.is_some());
        assert!(row.minified_chars <= row.original_chars);
    }
}

#[test]
fn test_benchmark_without_validation() {
    let b = bench().validate(false);
    let rows = b.benchmark_text("doc.md", DOC);
    assert!(rows.iter().all(|r| r.semantic_similarity.is_none()));
    assert!(!b.scorer().is_initialized());
}

#[test]
fn test_benchmark_zero_tokens() {
    let rows = bench().benchmark_text("empty.md", "");
    assert!(rows.iter().all(|r| r.original_tokens == 0 && r.reduction_pct == 0.0));
}

#[test]
fn test_benchmark_file_missing() {
    let err = bench().benchmark_file("/definitely/not/here.md").unwrap_err();
    assert!(matches!(err, MmError::NotFound { .. }));
}

#[test]
fn test_benchmark_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.md"), DOC).unwrap();
    std::fs::write(dir.path().join("a.md"), "Some **plain** text.").unwrap();
    std::fs::write(dir.path().join("skip.txt"), DOC).unwrap();

    let report = bench().benchmark_directory(dir.path()).unwrap();
    assert_eq!(report.files, 2);
    assert_eq!(report.rows.len(), 2 * STRATEGY_CONFIGS.len());
    assert_eq!(report.rows[0].file, "a.md");
    assert_eq!(report.rows.last().unwrap().file, "b.md");
}

#[test]
fn test_benchmark_directory_errors() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("one.md");
    std::fs::write(&file, DOC).unwrap();

    let err = bench().benchmark_directory(dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, MmError::NotFound { .. }));
    let err = bench().benchmark_directory(&file).unwrap_err();
    assert!(matches!(err, MmError::NotADirectory { .. }));
}

#[test]
fn test_benchmark_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let report = bench().benchmark_directory(dir.path()).unwrap();
    assert_eq!(report.files, 0);
    assert!(report.rows.is_empty());
    assert!(report.summary().is_empty());
}

#[test]
fn test_report_csv() {
    let dir = tempfile::tempdir().unwrap();
    let report = BenchmarkReport {
        generated_at: chrono::Utc::now(),
        files: 1,
        rows: bench().benchmark_text("odd, \"name\".md", DOC),
    };
    let path = dir.path().join("nested").join("run_001_results.csv");
    report.write_csv(&path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), 1 + STRATEGY_CONFIGS.len());
    assert!(lines[1].starts_with("\"odd, \"\"name\"\".md\",baseline,"));
    assert_eq!(lines[1].split(',').nth(6), Some(""));
}

#[test]
fn test_report_summary() {
    let rows = vec![
        BenchmarkRow {
            file: "a.md".into(),
            strategy: "syntax_only".into(),
            original_tokens: 10,
            minified_tokens: 8,
            reduction_pct: 20.0,
            semantic_similarity: Some(0.9),
            processing_time_ms: 0.1,
            original_chars: 50,
            minified_chars: 40,
        },
        BenchmarkRow {
            file: "b.md".into(),
            strategy: "syntax_only".into(),
            original_tokens: 10,
            minified_tokens: 6,
            reduction_pct: 40.0,
            semantic_similarity: Some(0.7),
            processing_time_ms: 0.1,
            original_chars: 50,
            minified_chars: 30,
        },
    ];
    let report = BenchmarkReport { generated_at: chrono::Utc::now(), files: 2, rows };
    let summary = report.summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].files, 2);
    assert!((summary[0].avg_reduction_pct - 30.0).abs() < 1e-9);
    assert!((summary[0].avg_similarity.unwrap() - 0.8).abs() < 1e-9);

    let rendered = report.render_summary();
    assert!(rendered.contains("BENCHMARK SUMMARY"));
    assert!(rendered.contains("Avg token reduction: 30.0%"));
    assert!(rendered.contains("Avg semantic similarity: 0.8000"));
}

#[test]
fn test_benchmark_from_config() {
    let mut config = MinimarkConfig::default();
    config.benchmark.validate = false;
    let rows = Benchmark::from_config(&config).unwrap().benchmark_text("x.md", DOC);
    assert!(rows[1].original_tokens > 0);
    assert!(rows.iter().all(|r| r.semantic_similarity.is_none()));

    config.benchmark.encoding = "nope".into();
    assert!(Benchmark::from_config(&config).is_err());
}

// ========== Properties ==========

proptest! {
    #[test]
    fn prop_similarity_in_unit_range(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let s = TermVectorScorer::new().similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn prop_similarity_symmetric(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let scorer = TermVectorScorer::new();
        prop_assert!((scorer.similarity(&a, &b) - scorer.similarity(&b, &a)).abs() < 1e-9);
    }
}
