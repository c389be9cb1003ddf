use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use phrasecorpus::annotate::{pipe, PipeConfig, RuleAnnotator};

const NB_REVIEWS: usize = 2_000;

fn reviews() -> Vec<String> {
    (0..NB_REVIEWS)
        .map(|i| {
            format!(
                "Review {} of a nice place. The ice cream was great!\nWould come back with friends.",
                i
            )
        })
        .collect()
}

fn annotate_all(texts: &[String], config: &PipeConfig) -> usize {
    pipe(&RuleAnnotator, texts.iter().cloned().map(Ok), config)
        .unwrap()
        .map(|doc| doc.unwrap().tokens().count())
        .sum()
}

fn bench_batch_sizes(c: &mut Criterion) {
    let texts = reviews();
    let mut group = c.benchmark_group("pipe");
    for batch_size in [1, 100, 1000, 10_000] {
        let config = PipeConfig {
            batch_size,
            n_threads: 0,
        };
        group.bench_with_input(
            BenchmarkId::new("batch_size", batch_size),
            &config,
            |b, config| b.iter(|| annotate_all(&texts, config)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_batch_sizes);
criterion_main!(benches);
