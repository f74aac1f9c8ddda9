use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mm_core::{MinimarkConfig, StrategySet};

fn bench_strategy_set(c: &mut Criterion) {
    let tags = ["synonyms", "simplify", "junk", "stopwords", "syntax", "syntax"];
    c.bench_function("strategy_set_from_tags", |b| {
        b.iter(|| black_box(StrategySet::from_tags(black_box(&tags))))
    });
    c.bench_function("strategy_set_aliases", |b| {
        b.iter(|| black_box(StrategySet::from_tags_with_aliases(black_box(["all"]))))
    });
}

fn bench_config_parse(c: &mut Criterion) {
    let raw = "[minifier]\nsynonym_min_len = 6\n\n[benchmark]\nencoding = \"o200k_base\"\nvalidate = false\n";
    c.bench_function("config_from_toml", |b| {
        b.iter(|| black_box(MinimarkConfig::from_toml_str(black_box(raw)).unwrap()))
    });
}

criterion_group!(benches, bench_strategy_set, bench_config_parse);
criterion_main!(benches);
