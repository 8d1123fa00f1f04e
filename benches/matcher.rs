//! Benchmarks for the voxel structure matcher.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;

use voxmatch::canonical::canonicalize;
use voxmatch::generator::{generate_structure, generate_structure_seeded};
use voxmatch::rotation::{rotate_structure, ROTATIONS};
use voxmatch::{check_match, compute_diff};

/// Benchmark a full rotation check that succeeds late in the table.
fn bench_check_match_hit(c: &mut Criterion) {
    let target = generate_structure_seeded(40, 7);
    let built = rotate_structure(&target, &ROTATIONS[17]);

    c.bench_function("check_match_hit", |b| {
        b.iter(|| check_match(black_box(&built), black_box(&target)))
    });
}

/// Benchmark a check that must scan all 24 rotations without a match.
fn bench_check_match_miss(c: &mut Criterion) {
    let target = generate_structure_seeded(40, 7);
    let built = generate_structure_seeded(40, 8);

    c.bench_function("check_match_miss", |b| {
        b.iter(|| check_match(black_box(&built), black_box(&target)))
    });
}

/// Benchmark canonicalizing a mid-sized structure.
fn bench_canonicalize(c: &mut Criterion) {
    let structure = generate_structure_seeded(40, 7);

    c.bench_function("canonicalize", |b| {
        b.iter(|| canonicalize(black_box(&structure)))
    });
}

/// Benchmark computing the cell diff for a near miss.
fn bench_compute_diff(c: &mut Criterion) {
    let target = generate_structure_seeded(40, 7);
    let mut built = rotate_structure(&target, &ROTATIONS[9]);
    let sacrifice = built.iter().next().copied();
    if let Some(sacrifice) = sacrifice {
        built.remove(&sacrifice);
        built.insert(sacrifice.translated(0, 0, 50));
    }
    let rotation_index = check_match(&built, &target)
        .map(|result| result.rotation_index)
        .unwrap_or(0);

    c.bench_function("compute_diff", |b| {
        b.iter(|| compute_diff(black_box(&built), black_box(&target), rotation_index))
    });
}

/// Benchmark random-walk target generation.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(50);
    group.bench_function("size_100", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| generate_structure(black_box(100), &mut rng))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_check_match_hit,
    bench_check_match_miss,
    bench_canonicalize,
    bench_compute_diff,
    bench_generate
);
criterion_main!(benches);
