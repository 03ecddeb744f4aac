#![allow(unused)]

use num_complex::Complex64;
use num_traits::Float;
use std::fmt::Display;

pub fn assert_close<T: Float + Display>(a: T, e: T, tol: T) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = T::one().max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

pub fn assert_slice_close<T: Float + Display>(a: &[T], e: &[T], tol: T) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert!(
                ai.is_infinite() && ai.is_sign_positive() == ei.is_sign_positive(),
                "idx {i}: expected {ei}, got {ai}"
            );
            continue;
        }
        let scale = T::one().max(ei.abs());
        let ok = (ai - ei).abs() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

pub fn assert_complex_close(a: &[Complex64], e: &[Complex64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (ai, ei)) in a.iter().zip(e.iter()).enumerate() {
        let scale = 1.0_f64.max(ei.norm());
        let ok = (ai - ei).norm() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

/// Largest relative error of `got` against `expect`.
pub fn max_rel_error(got: &[f64], expect: &[f64]) -> f64 {
    got.iter()
        .zip(expect.iter())
        .map(|(g, e)| (g - e).abs() / 1.0_f64.max(e.abs()))
        .fold(0.0, f64::max)
}
