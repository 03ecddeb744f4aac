// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! C-side integer types and entry point signatures of the VML runtime.
//!
//! `mkl_rt` defaults to the LP64 interface, so `MKL_INT` is 32-bit. The `mode` argument of
//! the `vm*` routines is always `MKL_INT64`.

pub type MklInt = i32;
pub type MklInt64 = i64;

/// `v?Op(n, a, r)`
pub type UnaryFn<T> = unsafe extern "C" fn(n: MklInt, a: *const T, r: *mut T);

/// `v?Op(n, a, b, r)`
pub type BinaryFn<T> = unsafe extern "C" fn(n: MklInt, a: *const T, b: *const T, r: *mut T);

/// `vm?Op(n, a, b, r, mode)`
pub type BinaryModeFn<T> =
    unsafe extern "C" fn(n: MklInt, a: *const T, b: *const T, r: *mut T, mode: MklInt64);

/// `vm?OpI(n, a, inca, b, incb, r, incr, mode)`
pub type StridedBinaryModeFn<T> = unsafe extern "C" fn(
    n: MklInt,
    a: *const T,
    inca: MklInt,
    b: *const T,
    incb: MklInt,
    r: *mut T,
    incr: MklInt,
    mode: MklInt64,
);
