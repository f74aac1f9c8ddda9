use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mm_minifier::{MinificationPipeline, StrategySet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const BLOCKS: &[&str] = &[
    "# Getting Started\n\n",
    "This is **very** important: in order to utilize the API you basically need a key. ",
    "- Install the *CLI* with `cargo install minimark`\n",
    "1. Read the [docs](https://example.com/docs) carefully.\n",
    "```rust\nfn main() { println!(\"hello\"); }\n```\n",
    "I think the configuration is quite straightforward, and it seems the defaults work. ",
    "\n---\n\n",
    "Please kindly demonstrate the numerous additional options that frequently help. ",
];

fn generate_markdown(size_kb: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        if let Some(block) = BLOCKS.choose(&mut rng) {
            text.push_str(block);
        }
    }
    text
}

fn bench_strategies(c: &mut Criterion) {
    let pipeline = MinificationPipeline::new();
    let text_10k = generate_markdown(10);

    for tag in ["syntax", "stopwords", "simplify", "synonyms"] {
        let set = StrategySet::from_tags([tag]);
        c.bench_function(&format!("minify_{tag}_10kb"), |b| {
            b.iter(|| black_box(pipeline.minify(black_box(&text_10k), &set)))
        });
    }
}

fn bench_all(c: &mut Criterion) {
    let pipeline = MinificationPipeline::new();
    let set = StrategySet::all();
    let text_1k = generate_markdown(1);
    let text_10k = generate_markdown(10);
    let text_100k = generate_markdown(100);

    c.bench_function("minify_all_1kb", |b| {
        b.iter(|| black_box(pipeline.minify(black_box(&text_1k), &set)))
    });
    c.bench_function("minify_all_10kb", |b| {
        b.iter(|| black_box(pipeline.minify(black_box(&text_10k), &set)))
    });
    c.bench_function("minify_all_100kb", |b| {
        b.iter(|| black_box(pipeline.minify(black_box(&text_100k), &set)))
    });
}

criterion_group!(benches, bench_strategies, bench_all);
criterion_main!(benches);
