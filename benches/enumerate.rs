//! Benchmarks for polyomino enumeration.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use polyomino_enum::{
    compute::{Canonicalizer, Enumerator, Shape, enumerate, extensions},
    schema::EquivalenceMode,
};

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    group.sample_size(10);

    for size in [6, 8, 10] {
        for mode in EquivalenceMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(mode.name(), size),
                &size,
                |b, &size| {
                    b.iter(|| enumerate(black_box(size), mode));
                },
            );
        }
    }

    group.finish();
}

fn bench_level_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_growth");

    // Canonicalize every growth of the free octominoes.
    let mut engine = Enumerator::new(8, EquivalenceMode::Free);
    engine.finish(|_| {});
    let level: Vec<Shape> = engine.level(8).into_iter().flatten().cloned().collect();

    for mode in EquivalenceMode::ALL {
        let canon = Canonicalizer::new(mode);
        group.bench_with_input(
            BenchmarkId::from_parameter(mode.name()),
            &level,
            |b, level| {
                b.iter(|| {
                    let mut n = 0usize;
                    for shape in level {
                        for growth in extensions(black_box(shape)) {
                            n += canon.canonical(&growth).size();
                        }
                    }
                    n
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_level_growth);
criterion_main!(benches);
