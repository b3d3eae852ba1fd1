use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swn_core::rng::RngHandle;
use swn_graph::watts_strogatz;

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("watts_strogatz_5k", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed_pair(42, 43);
            let graph = watts_strogatz(&mut rng, 5_000, 6, 0.1).unwrap();
            black_box(graph);
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
