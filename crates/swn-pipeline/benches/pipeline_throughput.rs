use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swn_pipeline::{run, RandomGraphRequest};

fn pipeline_bench(c: &mut Criterion) {
    let request = RandomGraphRequest {
        num_nodes: 60,
        layout_iterations: 200,
        ..RandomGraphRequest::default()
    };
    c.bench_function("pipeline_60_nodes", |b| {
        b.iter(|| {
            let response = run(&request).unwrap();
            black_box(response);
        });
    });
}

criterion_group!(benches, pipeline_bench);
criterion_main!(benches);
