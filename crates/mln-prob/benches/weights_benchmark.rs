use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_weight_conversions(c: &mut Criterion) {
    let probs: Vec<f64> = (0..10_000).map(|i| ((i as f64) + 0.5) / 10_000.0).collect();

    c.bench_function("logit_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &probs {
                acc += mln_prob::logit(p);
            }
            black_box(acc)
        })
    });

    let weights: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 - 5.0).collect();
    c.bench_function("logistic_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &w in &weights {
                acc += mln_prob::logistic(w);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_weight_conversions);
criterion_main!(benches);
