// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Element Dispatch** - *Per-Type Entry Point Selection*
//!
//! Sealed traits mapping an element type to its VML routine, so `Vml::cos` accepts
//! `f64`, `Complex64` and `MklComplex16` buffers through one method, and `Vml::multiply`
//! accepts `f64` and `Complex64`.
//!
//! `Complex64` buffers are viewed as `MklComplex16` through the layout adapter before
//! they cross the boundary; no element is copied. Native `MklComplex16` multiply has its
//! own mode-less routine and lives on `Vml::multiply_native`.

use num_complex::Complex64;

use crate::kernels::dispatch::VmlKernel;
use crate::kernels::ffi::{MklInt, MklInt64};
use crate::layout::{MklComplex16, as_native, as_native_mut};
use crate::operators::ElementKind;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for num_complex::Complex64 {}
    impl Sealed for crate::layout::MklComplex16 {}
}

/// Element types with cosine and arcsine routines.
///
/// The methods are the raw dispatch step beneath [`Vml`](crate::vml::Vml), which checks
/// lengths before calling them.
pub trait VmlUnary: sealed::Sealed + Copy {
    /// Element family used for entry point routing.
    const KIND: ElementKind;

    /// # Safety
    /// `0 <= n <= a.len()` and `n <= r.len()`.
    unsafe fn cos<K: VmlKernel>(kernel: &K, n: MklInt, a: &[Self], r: &mut [Self]);

    /// # Safety
    /// `0 <= n <= x.len()`.
    unsafe fn cos_in_place<K: VmlKernel>(kernel: &K, n: MklInt, x: &mut [Self]);

    /// # Safety
    /// `0 <= n <= a.len()` and `n <= r.len()`.
    unsafe fn asin<K: VmlKernel>(kernel: &K, n: MklInt, a: &[Self], r: &mut [Self]);

    /// # Safety
    /// `0 <= n <= x.len()`.
    unsafe fn asin_in_place<K: VmlKernel>(kernel: &K, n: MklInt, x: &mut [Self]);
}

/// Element types with an accuracy-selectable multiply routine (`vmdMul`, `vmzMul`).
pub trait VmlMul: sealed::Sealed + Copy {
    const KIND: ElementKind;

    /// # Safety
    /// `0 <= n <= a.len()`, `n <= b.len()` and `n <= r.len()`.
    unsafe fn mul<K: VmlKernel>(
        kernel: &K,
        n: MklInt,
        a: &[Self],
        b: &[Self],
        r: &mut [Self],
        mode: MklInt64,
    );
}

/// Implements `VmlUnary` for a type the kernel takes directly.
macro_rules! impl_vml_unary_native {
    ($ty:ty, $kind:expr, $cos:ident, $asin:ident) => {
        impl VmlUnary for $ty {
            const KIND: ElementKind = $kind;

            #[inline(always)]
            unsafe fn cos<K: VmlKernel>(kernel: &K, n: MklInt, a: &[Self], r: &mut [Self]) {
                unsafe { kernel.$cos(n, a.as_ptr(), r.as_mut_ptr()) }
            }

            #[inline(always)]
            unsafe fn cos_in_place<K: VmlKernel>(kernel: &K, n: MklInt, x: &mut [Self]) {
                let p = x.as_mut_ptr();
                unsafe { kernel.$cos(n, p, p) }
            }

            #[inline(always)]
            unsafe fn asin<K: VmlKernel>(kernel: &K, n: MklInt, a: &[Self], r: &mut [Self]) {
                unsafe { kernel.$asin(n, a.as_ptr(), r.as_mut_ptr()) }
            }

            #[inline(always)]
            unsafe fn asin_in_place<K: VmlKernel>(kernel: &K, n: MklInt, x: &mut [Self]) {
                let p = x.as_mut_ptr();
                unsafe { kernel.$asin(n, p, p) }
            }
        }
    };
}

impl_vml_unary_native!(f64, ElementKind::Real, vd_cos, vd_asin);
impl_vml_unary_native!(MklComplex16, ElementKind::NativeComplex, vz_cos, vz_asin);

impl VmlUnary for Complex64 {
    const KIND: ElementKind = ElementKind::Complex;

    #[inline(always)]
    unsafe fn cos<K: VmlKernel>(kernel: &K, n: MklInt, a: &[Self], r: &mut [Self]) {
        unsafe { MklComplex16::cos(kernel, n, as_native(a), as_native_mut(r)) }
    }

    #[inline(always)]
    unsafe fn cos_in_place<K: VmlKernel>(kernel: &K, n: MklInt, x: &mut [Self]) {
        unsafe { MklComplex16::cos_in_place(kernel, n, as_native_mut(x)) }
    }

    #[inline(always)]
    unsafe fn asin<K: VmlKernel>(kernel: &K, n: MklInt, a: &[Self], r: &mut [Self]) {
        unsafe { MklComplex16::asin(kernel, n, as_native(a), as_native_mut(r)) }
    }

    #[inline(always)]
    unsafe fn asin_in_place<K: VmlKernel>(kernel: &K, n: MklInt, x: &mut [Self]) {
        unsafe { MklComplex16::asin_in_place(kernel, n, as_native_mut(x)) }
    }
}

impl VmlMul for f64 {
    const KIND: ElementKind = ElementKind::Real;

    #[inline(always)]
    unsafe fn mul<K: VmlKernel>(
        kernel: &K,
        n: MklInt,
        a: &[Self],
        b: &[Self],
        r: &mut [Self],
        mode: MklInt64,
    ) {
        unsafe { kernel.vmd_mul(n, a.as_ptr(), b.as_ptr(), r.as_mut_ptr(), mode) }
    }
}

impl VmlMul for Complex64 {
    const KIND: ElementKind = ElementKind::Complex;

    #[inline(always)]
    unsafe fn mul<K: VmlKernel>(
        kernel: &K,
        n: MklInt,
        a: &[Self],
        b: &[Self],
        r: &mut [Self],
        mode: MklInt64,
    ) {
        let (a, b, r) = (as_native(a), as_native(b), as_native_mut(r));
        unsafe { kernel.vmz_mul(n, a.as_ptr(), b.as_ptr(), r.as_mut_ptr(), mode) }
    }
}
