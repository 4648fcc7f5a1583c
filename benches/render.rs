use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prismtrace::presets;
use prismtrace::{Camera, CameraConfig};

fn criterion_benchmark(c: &mut Criterion) {
    let camera = Camera::new(CameraConfig::looking_along_y(160, 120)).unwrap();
    let spheres = presets::spheres().unwrap();
    let mirror_box = presets::mirror_box().unwrap();
    let threads = rayon::current_num_threads();

    c.bench_function("spheres 160x120", |b| {
        b.iter(|| camera.render(black_box(&spheres), threads).unwrap())
    });
    c.bench_function("mirror box 160x120", |b| {
        b.iter(|| camera.render(black_box(&mirror_box), threads).unwrap())
    });
    c.bench_function("mirror box 160x120 single worker", |b| {
        b.iter(|| camera.render(black_box(&mirror_box), 1).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
