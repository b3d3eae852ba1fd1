use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swn_core::rng::RngHandle;
use swn_graph::{force_directed_layout, watts_strogatz, LayoutParams};

fn layout_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed_pair(1, 2);
    let template = watts_strogatz(&mut rng, 100, 4, 0.1).unwrap();
    c.bench_function("layout_100_nodes_100_iterations", |b| {
        b.iter(|| {
            let mut graph = template.clone();
            let mut rng = RngHandle::from_seed_pair(3, 4);
            force_directed_layout(&mut rng, &LayoutParams::new(100, 10_000.0), &mut graph)
                .unwrap();
            black_box(graph);
        });
    });
}

criterion_group!(benches, layout_bench);
criterion_main!(benches);
