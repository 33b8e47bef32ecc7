use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pooling_testgen::oracle::sequence::tensor_data;
use pooling_testgen::oracle::{PoolRequest, PoolingOracle};
use pooling_testgen::{
    Generator, GeneratorConfig, InputShape, Padding, PoolingOp, ReferencePooling, TestCaseGroup,
};

fn bench_reference_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_pool");

    // Largest shapes each window produces in the fixture set
    let configs = vec![
        (3, 2, 8),   // avg 3/2 tops out at 8
        (5, 1, 8),   // 5/1 even base
        (11, 4, 18), // largest generated extent
    ];

    for (window, stride, extent) in configs {
        let shape = InputShape::new(3, extent, extent, 4);
        let input = tensor_data(shape.element_count(), 16_777_216.0);

        for op in [PoolingOp::Max, PoolingOp::Average] {
            let request = PoolRequest {
                op,
                shape,
                window,
                stride,
                padding: Padding::Same,
            };
            let id = format!("{op}_w{window}_s{stride}_{shape}");
            group.bench_with_input(BenchmarkId::from_parameter(&id), &request, |bench, req| {
                bench.iter(|| {
                    let out = ReferencePooling.pool(black_box(req), black_box(&input)).unwrap();
                    black_box(out);
                });
            });
        }
    }

    group.finish();
}

fn bench_render_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_group");
    group.sample_size(10);

    let generator = Generator::new(GeneratorConfig::new());
    for g in [
        TestCaseGroup::new(PoolingOp::Max, 1, 1),
        TestCaseGroup::new(PoolingOp::Average, 7, 1),
        TestCaseGroup::new(PoolingOp::Max, 11, 4),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(g.file_stem()), &g, |bench, g| {
            bench.iter(|| {
                let rendered = generator.render_group(black_box(*g)).unwrap();
                black_box(rendered);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reference_pool, bench_render_group);
criterion_main!(benches);
