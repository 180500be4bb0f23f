//! Benchmarks comparing Rational against num-rational
//!
//! Run with: cargo bench --bench rational_benchmarks
//!
//! num-rational reduces after every operation; Rational defers reduction to
//! equality, comparison and display. The suites below measure both the
//! per-operation cost and the payoff on chained workloads.
//!
//! Key Performance Metrics:
//! - Construction (div_by, parse)
//! - Arithmetic operations (add, mul)
//! - Comparison operations
//! - Reduction and rendering
//! - Real-world workload (harmonic series)

use big_ratio::{BigInt, Rational};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_rational::BigRational;

fn big(s: &str) -> BigInt {
    s.parse().expect("benchmark literal")
}

/// Operand pairs of increasing magnitude
fn operand_cases() -> Vec<(&'static str, (BigInt, BigInt), (BigInt, BigInt))> {
    vec![
        (
            "small",
            (BigInt::from(1), BigInt::from(2)),
            (BigInt::from(1), BigInt::from(3)),
        ),
        (
            "medium",
            (BigInt::from(999_999u64), BigInt::from(1_000_000u64)),
            (BigInt::from(999_998u64), BigInt::from(1_000_001u64)),
        ),
        (
            "large",
            (
                big("912016490186296920119201192141970416029"),
                big("1824032980372593840238402384283940832057"),
            ),
            (
                big("340282366920938463463374607431768211297"),
                big("170141183460469231731687303715884105757"),
            ),
        ),
    ]
}

// ============================================================================
// BASIC OPERATIONS
// ============================================================================

/// Benchmark construction from integer pairs
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("Rational::div_by", |b| {
        b.iter(|| {
            let r = Rational::div_by(black_box(12345i64), black_box(67890i64)).unwrap();
            black_box(r);
        })
    });

    group.bench_function("num-rational", |b| {
        b.iter(|| {
            let r = BigRational::new(
                black_box(BigInt::from(12345)),
                black_box(BigInt::from(67890)),
            );
            black_box(r);
        })
    });

    group.bench_function("Rational::parse", |b| {
        b.iter(|| {
            let r: Rational = black_box("117/1098").parse().unwrap();
            black_box(r);
        })
    });

    group.finish();
}

/// Benchmark addition and multiplication (unreduced vs always-reduced)
fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for (name, (n1, d1), (n2, d2)) in operand_cases() {
        let r1 = Rational::new_raw(n1.clone(), d1.clone());
        let r2 = Rational::new_raw(n2.clone(), d2.clone());
        let q1 = BigRational::new(n1, d1);
        let q2 = BigRational::new(n2, d2);

        group.bench_with_input(
            BenchmarkId::new("Rational/add", name),
            &(r1.clone(), r2.clone()),
            |b, (r1, r2)| b.iter(|| black_box(r1 + black_box(r2))),
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational/add", name),
            &(q1.clone(), q2.clone()),
            |b, (q1, q2)| b.iter(|| black_box(q1 + black_box(q2))),
        );

        group.bench_with_input(
            BenchmarkId::new("Rational/mul", name),
            &(r1, r2),
            |b, (r1, r2)| b.iter(|| black_box(r1 * black_box(r2))),
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational/mul", name),
            &(q1, q2),
            |b, (q1, q2)| b.iter(|| black_box(q1 * black_box(q2))),
        );
    }

    group.finish();
}

/// Benchmark exact comparison (cross-multiplication)
fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    for (name, (n1, d1), (n2, d2)) in operand_cases() {
        let r1 = Rational::new_raw(n1.clone(), d1.clone());
        let r2 = Rational::new_raw(n2.clone(), d2.clone());
        let q1 = BigRational::new(n1, d1);
        let q2 = BigRational::new(n2, d2);

        group.bench_with_input(
            BenchmarkId::new("Rational", name),
            &(r1, r2),
            |b, (r1, r2)| b.iter(|| black_box(r1 < black_box(r2))),
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational", name),
            &(q1, q2),
            |b, (q1, q2)| b.iter(|| black_box(q1 < black_box(q2))),
        );
    }

    group.finish();
}

/// Benchmark explicit reduction and canonical rendering
fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    let test_cases = vec![
        ("small", (6i64, 8i64)),
        ("medium", (123_456, 789_012)),
        ("coprime", (999_983, 999_979)), // Two large primes - no reduction
    ];

    for (name, (n, d)) in test_cases {
        let r = Rational::div_by(n, d).unwrap();

        group.bench_with_input(BenchmarkId::new("reduce", name), &r, |b, r| {
            b.iter(|| black_box(r.reduce().unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("to_string", name), &r, |b, r| {
            b.iter(|| black_box(r.to_string()))
        });
    }

    group.finish();
}

// ============================================================================
// REAL-WORLD WORKLOADS
// ============================================================================

/// Harmonic series H(n): accumulate unreduced, reduce once at the end
fn bench_harmonic_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_series");

    for terms in [10u32, 50] {
        group.bench_with_input(BenchmarkId::new("Rational", terms), &terms, |b, &terms| {
            b.iter(|| {
                let mut sum = Rational::zero();
                for k in 1..=terms {
                    sum = &sum + &Rational::div_by(1, k).unwrap();
                }
                black_box(sum.reduce().unwrap())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("num-rational", terms),
            &terms,
            |b, &terms| {
                b.iter(|| {
                    let mut sum = BigRational::from_integer(BigInt::from(0));
                    for k in 1..=terms {
                        sum += BigRational::new(BigInt::from(1), BigInt::from(k));
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_arithmetic,
    bench_comparison,
    bench_reduction,
    bench_harmonic_series
);
criterion_main!(benches);
