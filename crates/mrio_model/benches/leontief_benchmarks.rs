//! Criterion benchmarks for the Leontief factorisation and solve.
//!
//! Benchmarks cover:
//! - Factorisation of `I − A` at the production size (93) and larger grids
//! - Factorised solve against the full final-demand matrix
//! - Explicit inverse materialisation for comparison

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mrio_model::coefficients::technical_coefficients;
use mrio_model::leontief::{LeontiefConfig, LeontiefSystem};
use nalgebra::{DMatrix, DVector};

/// Deterministic synthetic coefficient inputs with column sums below one.
fn synthetic_inputs(n: usize, regions: usize) -> (DMatrix<f64>, DMatrix<f64>) {
    let intermediate_use =
        DMatrix::from_fn(n, n, |i, j| 1.0 + ((i * 31 + j * 7) % 13) as f64 * 0.25);
    let total_input = DVector::from_fn(n, |i, _| 8.0 * n as f64 + (i % 9) as f64 * 10.0);
    let coefficients = technical_coefficients(&intermediate_use, &total_input);
    let final_demand = DMatrix::from_fn(n, regions, |i, s| 2.0 + ((i + 5 * s) % 7) as f64);
    (coefficients, final_demand)
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("leontief_factorize");
    let config = LeontiefConfig::default();

    for n in [93, 186, 372] {
        let (coefficients, _) = synthetic_inputs(n, 31);
        group.bench_with_input(BenchmarkId::new("factorize", n), &n, |b, _| {
            b.iter(|| {
                let system =
                    LeontiefSystem::factorize(black_box(&coefficients), &config).unwrap();
                black_box(system.condition_estimate())
            });
        });
    }

    group.finish();
}

fn bench_solve_vs_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("leontief_apply");
    let config = LeontiefConfig::default();

    let n = 93;
    let (coefficients, final_demand) = synthetic_inputs(n, 31);
    let system = LeontiefSystem::factorize(&coefficients, &config).unwrap();

    group.bench_function("factorised_solve", |b| {
        b.iter(|| black_box(system.solve(black_box(&final_demand)).unwrap()));
    });

    group.bench_function("explicit_inverse_multiply", |b| {
        b.iter(|| {
            let inverse = system.inverse().unwrap();
            black_box(inverse * black_box(&final_demand))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_factorize, bench_solve_vs_inverse);
criterion_main!(benches);
