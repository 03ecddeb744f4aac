// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Naive per-element loops against the VML routines at a fixed length.
//!
//! Run with: cargo bench --bench vml_vs_naive
//! Add `--features linked` to measure the linker-bound kernel instead.
//! VML groups are skipped when the runtime cannot be opened.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use tracing_subscriber::EnvFilter;
use vml_bindings::{Complex64, MklComplex16, Vml, VmlAccuracy};

const SIZE: usize = 400;

/// Inputs shared by every benchmark in a run.
struct Samples {
    /// In `[-1, 1]`, valid for `asin`.
    values1: Vec<f64>,
    values2: Vec<f64>,
    cvalues1: Vec<Complex64>,
    cvalues2: Vec<Complex64>,
    mkl_cvalues1: Vec<MklComplex16>,
    mkl_cvalues2: Vec<MklComplex16>,
}

impl Samples {
    fn generate() -> Self {
        let mut rng = rand::rng();
        let values1: Vec<f64> = (0..SIZE).map(|_| rng.random_range(-1.0..=1.0)).collect();
        let values2: Vec<f64> = (0..SIZE).map(|_| rng.random_range(-100.0..100.0)).collect();
        let mut complex = || -> Vec<Complex64> {
            (0..SIZE)
                .map(|_| Complex64::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
                .collect()
        };
        let cvalues1 = complex();
        let cvalues2 = complex();
        let mkl_cvalues1 = cvalues1.iter().copied().map(MklComplex16::from).collect();
        let mkl_cvalues2 = cvalues2.iter().copied().map(MklComplex16::from).collect();
        Samples {
            values1,
            values2,
            cvalues1,
            cvalues2,
            mkl_cvalues1,
            mkl_cvalues2,
        }
    }
}

fn bench_naive(c: &mut Criterion, s: &Samples) {
    let mut group = c.benchmark_group("naive");
    let mut r = vec![0.0; SIZE];
    let mut cr = vec![Complex64::new(0.0, 0.0); SIZE];

    group.bench_function("asin", |b| {
        b.iter(|| {
            for (o, x) in r.iter_mut().zip(&s.values1) {
                *o = x.asin();
            }
            black_box(&r);
        })
    });
    group.bench_function("cos", |b| {
        b.iter(|| {
            for (o, x) in r.iter_mut().zip(&s.values2) {
                *o = x.cos();
            }
            black_box(&r);
        })
    });
    group.bench_function("asin_then_cos", |b| {
        b.iter(|| {
            for (o, x) in r.iter_mut().zip(&s.values1) {
                *o = x.asin().cos();
            }
            black_box(&r);
        })
    });
    group.bench_function("complex_multiply", |b| {
        b.iter(|| {
            for ((o, x), y) in cr.iter_mut().zip(&s.cvalues1).zip(&s.cvalues2) {
                *o = x * y;
            }
            black_box(&cr);
        })
    });
    group.bench_function("multiply", |b| {
        b.iter(|| {
            for ((o, x), y) in r.iter_mut().zip(&s.values1).zip(&s.values2) {
                *o = x * y;
            }
            black_box(&r);
        })
    });
    group.bench_function("add", |b| {
        b.iter(|| {
            for ((o, x), y) in r.iter_mut().zip(&s.values1).zip(&s.values2) {
                *o = x + y;
            }
            black_box(&r);
        })
    });
    group.bench_function("subtract", |b| {
        b.iter(|| {
            for ((o, x), y) in r.iter_mut().zip(&s.values1).zip(&s.values2) {
                *o = x - y;
            }
            black_box(&r);
        })
    });
    group.finish();
}

fn bench_vml(c: &mut Criterion, s: &Samples, vml: &Vml) {
    let mut group = c.benchmark_group("vml");
    let mut r = vec![0.0; SIZE];
    let mut r2 = vec![0.0; SIZE];
    let mut cr = vec![Complex64::new(0.0, 0.0); SIZE];
    let mut mr = vec![MklComplex16::default(); SIZE];

    group.bench_function("asin", |b| {
        b.iter(|| {
            vml.asin(black_box(&s.values1), &mut r).unwrap();
            black_box(&r);
        })
    });
    group.bench_function("cos", |b| {
        b.iter(|| {
            vml.cos(black_box(&s.values2), &mut r).unwrap();
            black_box(&r);
        })
    });
    group.bench_function("asin_then_cos", |b| {
        b.iter(|| {
            vml.asin(black_box(&s.values1), &mut r).unwrap();
            vml.cos(&r, &mut r2).unwrap();
            black_box(&r2);
        })
    });
    for mode in VmlAccuracy::ALL {
        group.bench_with_input(BenchmarkId::new("complex_multiply", mode), &mode, |b, &mode| {
            b.iter(|| {
                vml.multiply(&s.cvalues1, &s.cvalues2, &mut cr, mode).unwrap();
                black_box(&cr);
            })
        });
    }
    group.bench_function("complex_multiply_native", |b| {
        b.iter(|| {
            vml.multiply_native(&s.mkl_cvalues1, &s.mkl_cvalues2, &mut mr).unwrap();
            black_box(&mr);
        })
    });
    for mode in VmlAccuracy::ALL {
        group.bench_with_input(BenchmarkId::new("multiply", mode), &mode, |b, &mode| {
            b.iter(|| {
                vml.multiply(&s.values1, &s.values2, &mut r, mode).unwrap();
                black_box(&r);
            })
        });
    }
    group.bench_function("add", |b| {
        b.iter(|| {
            vml.add(&s.values1, &s.values2, &mut r, VmlAccuracy::default()).unwrap();
            black_box(&r);
        })
    });
    group.bench_function("subtract", |b| {
        b.iter(|| {
            vml.subtract(&s.values1, &s.values2, &mut r, VmlAccuracy::default()).unwrap();
            black_box(&r);
        })
    });
    group.finish();
}

fn vml_vs_naive(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let samples = Samples::generate();
    bench_naive(c, &samples);

    match <Vml>::open() {
        Ok(vml) => bench_vml(c, &samples, &vml),
        Err(e) => eprintln!("skipping VML benchmarks: {e}"),
    }
}

criterion_group!(benches, vml_vs_naive);
criterion_main!(benches);
