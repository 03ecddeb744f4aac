// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Layout Adapter** - *Zero-Copy Complex Views*
//!
//! The VML complex routines take `MKL_Complex16`, a C struct `{ double real; double imag; }`.
//! `num_complex::Complex64` is `#[repr(C)] { re: f64, im: f64 }`, the same bytes.
//!
//! [`MklComplex16`] is a `#[repr(transparent)]` wrapper over `Complex64` rather than a second
//! struct, so there is one layout definition and the two views cannot drift apart. The
//! slice views below are pure reinterpretations: no allocation, no element copy, no failure,
//! any length including zero.

use bytemuck::TransparentWrapper;
use num_complex::Complex64;

/// Native complex double as the VML runtime expects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, TransparentWrapper)]
#[repr(transparent)]
pub struct MklComplex16(Complex64);

const _: () = {
    assert!(core::mem::size_of::<MklComplex16>() == 2 * core::mem::size_of::<f64>());
    assert!(core::mem::align_of::<MklComplex16>() == core::mem::align_of::<f64>());
    assert!(core::mem::offset_of!(Complex64, re) == 0);
    assert!(core::mem::offset_of!(Complex64, im) == core::mem::size_of::<f64>());
};

impl MklComplex16 {
    #[inline]
    pub const fn new(real: f64, imag: f64) -> Self {
        MklComplex16(Complex64::new(real, imag))
    }

    /// Real field.
    #[inline]
    pub const fn real(&self) -> f64 {
        self.0.re
    }

    /// Imaginary field.
    #[inline]
    pub const fn imag(&self) -> f64 {
        self.0.im
    }

    #[inline]
    pub const fn into_complex(self) -> Complex64 {
        self.0
    }
}

impl From<Complex64> for MklComplex16 {
    #[inline]
    fn from(value: Complex64) -> Self {
        MklComplex16(value)
    }
}

impl From<MklComplex16> for Complex64 {
    #[inline]
    fn from(value: MklComplex16) -> Self {
        value.0
    }
}

/// Views complex values in the native layout.
#[inline(always)]
pub fn as_native(values: &[Complex64]) -> &[MklComplex16] {
    MklComplex16::wrap_slice(values)
}

/// Mutable native view; writes through it land in the original `Complex64` buffer.
#[inline(always)]
pub fn as_native_mut(values: &mut [Complex64]) -> &mut [MklComplex16] {
    MklComplex16::wrap_slice_mut(values)
}

/// Views native values as `Complex64`.
#[inline(always)]
pub fn as_complex(values: &[MklComplex16]) -> &[Complex64] {
    MklComplex16::peel_slice(values)
}

#[inline(always)]
pub fn as_complex_mut(values: &mut [MklComplex16]) -> &mut [Complex64] {
    MklComplex16::peel_slice_mut(values)
}
