//! Benchmark for world generation.
//!
//! TARGET: default 32x64 world well under a millisecond
//!
//! Run with: cargo bench --package blockworld_procedural --bench generator_benchmark

use blockworld_core::GridShape;
use blockworld_procedural::{GridGenerator, SimplexNoise, WorldSeed};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn benchmark_noise_sample(c: &mut Criterion) {
    let noise = SimplexNoise::new(WorldSeed::new(42));

    c.bench_function("octaved_noise_4_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.octaved(black_box(x), black_box(x * 0.7), 4, 0.5, 2.0))
        });
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (rows, cols) in [(32, 64), (128, 256), (512, 512)] {
        let Ok(shape) = GridShape::new(rows, cols) else {
            continue;
        };
        let generator = GridGenerator::new(shape);
        group.throughput(Throughput::Elements(shape.cell_count() as u64));
        group.bench_function(format!("{rows}x{cols}"), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(generator.generate(WorldSeed::new(seed)))
            });
        });
    }

    group.finish();
}

fn benchmark_text_seed(c: &mut Criterion) {
    c.bench_function("seed_from_text", |b| {
        b.iter(|| black_box(WorldSeed::from_text(black_box("a fairly typical request body"))));
    });
}

criterion_group!(benches, benchmark_noise_sample, benchmark_generate, benchmark_text_seed);
criterion_main!(benches);
