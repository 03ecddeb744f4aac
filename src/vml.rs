// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Binding Surface** - *Checked Elementwise VML Operations*
//!
//! [`Vml`] is the safe entry point. Every method:
//!
//! 1. routes operator + element kind + variant to its entry point;
//! 2. checks that `r` (and `b` for binary operations) holds at least `a.len()` elements,
//!    returning [`VmlError::InvalidArgument`] before anything reaches the kernel;
//! 3. forwards a count derived from `a.len()` only, so spare capacity in `r`/`b` is
//!    never touched;
//! 4. writes results into `r` in place and nowhere else.
//!
//! Zero-length inputs return `Ok` without calling the kernel.
//!
//! ## Strided variants
//! `multiply_strided`, `add_strided` and `subtract_strided` address every buffer at
//! `increment` and process `ceil(a.len() / increment)` elements: indices
//! `0, increment, 2 * increment, ...` below `a.len()`. All other positions of `r` are
//! left as they were.
//!
//! ## Accuracy
//! Binary operations take a [`VmlAccuracy`] per call; pass `VmlAccuracy::default()` for
//! high accuracy. It changes which routine variant runs, never the contract.
//! `multiply_native` and the transcendental routines take none and run under the
//! runtime's global mode.

use num_complex::Complex64;
use tracing::debug;

use crate::config::DEFAULT_ACCURACY;
use crate::errors::VmlError;
use crate::kernels::dispatch::{DefaultKernel, VmlKernel};
use crate::kernels::element::{VmlMul, VmlUnary};
use crate::kernels::ffi::MklInt;
use crate::kernels::symbols::VmlSymbol;
use crate::layout::MklComplex16;
use crate::operators::{CallVariant, ElementKind, VmlAccuracy, VmlOperator};
use crate::utils::{confirm_capacity, confirm_increment, strided_count, to_mkl_int};

/// Checked elementwise operations over a VML kernel.
///
/// Holds no mutable state; share it freely across threads working on disjoint buffers.
#[derive(Debug)]
pub struct Vml<K: VmlKernel = DefaultKernel> {
    kernel: K,
}

impl<K: VmlKernel> Vml<K> {
    /// Opens the kernel and wraps it.
    ///
    /// For the loaded kernel this is where a missing runtime or entry point surfaces.
    pub fn open() -> Result<Self, VmlError> {
        let kernel = K::open()?;
        debug!(kernel = kernel.describe(), "VML kernel ready");
        Ok(Vml { kernel })
    }

    /// Wraps an already-open kernel.
    pub fn with_kernel(kernel: K) -> Self {
        Vml { kernel }
    }

    /// The underlying kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    // --- Transcendental ---

    /// `r[i] = cos(a[i])` for `i < a.len()`.
    pub fn cos<T: VmlUnary>(&self, a: &[T], r: &mut [T]) -> Result<(), VmlError> {
        let symbol = entry_point(VmlOperator::Cos, T::KIND, CallVariant::Unit)?;
        let Some(n) = unary_count(symbol, a.len(), r.len())? else {
            return Ok(());
        };
        unsafe { T::cos(&self.kernel, n, a, r) };
        Ok(())
    }

    /// `x[i] = cos(x[i])`.
    pub fn cos_in_place<T: VmlUnary>(&self, x: &mut [T]) -> Result<(), VmlError> {
        let symbol = entry_point(VmlOperator::Cos, T::KIND, CallVariant::Unit)?;
        let Some(n) = unary_count(symbol, x.len(), x.len())? else {
            return Ok(());
        };
        unsafe { T::cos_in_place(&self.kernel, n, x) };
        Ok(())
    }

    /// `r[i] = asin(a[i])` for `i < a.len()`.
    ///
    /// Real inputs outside `[-1, 1]` produce NaN.
    pub fn asin<T: VmlUnary>(&self, a: &[T], r: &mut [T]) -> Result<(), VmlError> {
        let symbol = entry_point(VmlOperator::Asin, T::KIND, CallVariant::Unit)?;
        let Some(n) = unary_count(symbol, a.len(), r.len())? else {
            return Ok(());
        };
        unsafe { T::asin(&self.kernel, n, a, r) };
        Ok(())
    }

    /// `x[i] = asin(x[i])`.
    pub fn asin_in_place<T: VmlUnary>(&self, x: &mut [T]) -> Result<(), VmlError> {
        let symbol = entry_point(VmlOperator::Asin, T::KIND, CallVariant::Unit)?;
        let Some(n) = unary_count(symbol, x.len(), x.len())? else {
            return Ok(());
        };
        unsafe { T::asin_in_place(&self.kernel, n, x) };
        Ok(())
    }

    // --- Arithmetic ---

    /// `r[i] = a[i] * b[i]` for `i < a.len()`, over `f64` or `Complex64`.
    pub fn multiply<T: VmlMul>(
        &self,
        a: &[T],
        b: &[T],
        r: &mut [T],
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        let symbol = entry_point(VmlOperator::Multiply, T::KIND, CallVariant::Unit)?;
        let Some(n) = binary_count(symbol, a.len(), b.len(), r.len())? else {
            return Ok(());
        };
        unsafe { T::mul(&self.kernel, n, a, b, r, accuracy.mode()) };
        Ok(())
    }

    /// Complex multiply with the default accuracy.
    ///
    /// Shorthand for `multiply(a, b, r, DEFAULT_ACCURACY)` on structured complex buffers.
    pub fn multiply_complex(
        &self,
        a: &[Complex64],
        b: &[Complex64],
        r: &mut [Complex64],
    ) -> Result<(), VmlError> {
        self.multiply(a, b, r, DEFAULT_ACCURACY)
    }

    /// `r[i] = a[i] * b[i]` over buffers already in the native complex layout.
    ///
    /// Calls `vzMul`, which has no accuracy argument.
    pub fn multiply_native(
        &self,
        a: &[MklComplex16],
        b: &[MklComplex16],
        r: &mut [MklComplex16],
    ) -> Result<(), VmlError> {
        let symbol = entry_point(
            VmlOperator::Multiply,
            ElementKind::NativeComplex,
            CallVariant::Unit,
        )?;
        let Some(n) = binary_count(symbol, a.len(), b.len(), r.len())? else {
            return Ok(());
        };
        unsafe { self.kernel.vz_mul(n, a.as_ptr(), b.as_ptr(), r.as_mut_ptr()) };
        Ok(())
    }

    /// `r[k] = a[k] * b[k]` for `k = 0, increment, 2 * increment, ...` below `a.len()`.
    pub fn multiply_strided(
        &self,
        a: &[f64],
        b: &[f64],
        r: &mut [f64],
        increment: usize,
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        self.real_strided(VmlOperator::Multiply, a, b, r, increment, accuracy)
    }

    /// `r[i] = a[i] + b[i]` for `i < a.len()`.
    pub fn add(
        &self,
        a: &[f64],
        b: &[f64],
        r: &mut [f64],
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        self.real_unit(VmlOperator::Add, a, b, r, accuracy)
    }

    /// `r[k] = a[k] + b[k]` for `k = 0, increment, 2 * increment, ...` below `a.len()`.
    pub fn add_strided(
        &self,
        a: &[f64],
        b: &[f64],
        r: &mut [f64],
        increment: usize,
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        self.real_strided(VmlOperator::Add, a, b, r, increment, accuracy)
    }

    /// `r[i] = a[i] - b[i]` for `i < a.len()`.
    pub fn subtract(
        &self,
        a: &[f64],
        b: &[f64],
        r: &mut [f64],
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        self.real_unit(VmlOperator::Subtract, a, b, r, accuracy)
    }

    /// `r[k] = a[k] - b[k]` for `k = 0, increment, 2 * increment, ...` below `a.len()`.
    pub fn subtract_strided(
        &self,
        a: &[f64],
        b: &[f64],
        r: &mut [f64],
        increment: usize,
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        self.real_strided(VmlOperator::Subtract, a, b, r, increment, accuracy)
    }

    /// Unit-stride real add/subtract.
    fn real_unit(
        &self,
        op: VmlOperator,
        a: &[f64],
        b: &[f64],
        r: &mut [f64],
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        let symbol = entry_point(op, ElementKind::Real, CallVariant::Unit)?;
        let Some(n) = binary_count(symbol, a.len(), b.len(), r.len())? else {
            return Ok(());
        };
        let (pa, pb, pr, mode) = (a.as_ptr(), b.as_ptr(), r.as_mut_ptr(), accuracy.mode());
        unsafe {
            match symbol {
                VmlSymbol::VmdAdd => self.kernel.vmd_add(n, pa, pb, pr, mode),
                VmlSymbol::VmdSub => self.kernel.vmd_sub(n, pa, pb, pr, mode),
                other => return Err(unbound(other, CallVariant::Unit)),
            }
        }
        Ok(())
    }

    /// Strided real multiply/add/subtract.
    fn real_strided(
        &self,
        op: VmlOperator,
        a: &[f64],
        b: &[f64],
        r: &mut [f64],
        increment: usize,
        accuracy: VmlAccuracy,
    ) -> Result<(), VmlError> {
        let symbol = entry_point(op, ElementKind::Real, CallVariant::Strided)?;
        let fname = symbol.name();
        confirm_capacity(fname, "b", a.len(), b.len())?;
        confirm_capacity(fname, "r", a.len(), r.len())?;
        let inc = confirm_increment(fname, increment)?;
        // The last index visited is (n - 1) * increment < a.len(), so every buffer covers it.
        let n = to_mkl_int(fname, strided_count(a.len(), increment))?;
        if n == 0 {
            return Ok(());
        }

        let (pa, pb, pr, mode) = (a.as_ptr(), b.as_ptr(), r.as_mut_ptr(), accuracy.mode());
        unsafe {
            match symbol {
                VmlSymbol::VmdMulI => self.kernel.vmd_mul_i(n, pa, inc, pb, inc, pr, inc, mode),
                VmlSymbol::VmdAddI => self.kernel.vmd_add_i(n, pa, inc, pb, inc, pr, inc, mode),
                VmlSymbol::VmdSubI => self.kernel.vmd_sub_i(n, pa, inc, pb, inc, pr, inc, mode),
                other => return Err(unbound(other, CallVariant::Strided)),
            }
        }
        Ok(())
    }
}

/// Looks up the entry point, failing for combinations this crate does not bind.
#[inline(always)]
fn entry_point(
    op: VmlOperator,
    kind: ElementKind,
    variant: CallVariant,
) -> Result<VmlSymbol, VmlError> {
    VmlSymbol::route(op, kind, variant).ok_or_else(|| {
        VmlError::InvalidArgument(format!("no {variant} {kind} entry point for {op}"))
    })
}

fn unbound(symbol: VmlSymbol, variant: CallVariant) -> VmlError {
    VmlError::InvalidArgument(format!("{symbol} is not a real {variant} arithmetic routine"))
}

/// Validates a unary call and returns the count, or `None` when there is nothing to do.
#[inline(always)]
fn unary_count(symbol: VmlSymbol, a_len: usize, r_len: usize) -> Result<Option<MklInt>, VmlError> {
    confirm_capacity(symbol.name(), "r", a_len, r_len)?;
    nonzero_count(symbol, a_len)
}

/// Validates a binary call and returns the count, or `None` when there is nothing to do.
#[inline(always)]
fn binary_count(
    symbol: VmlSymbol,
    a_len: usize,
    b_len: usize,
    r_len: usize,
) -> Result<Option<MklInt>, VmlError> {
    confirm_capacity(symbol.name(), "b", a_len, b_len)?;
    confirm_capacity(symbol.name(), "r", a_len, r_len)?;
    nonzero_count(symbol, a_len)
}

#[inline(always)]
fn nonzero_count(symbol: VmlSymbol, len: usize) -> Result<Option<MklInt>, VmlError> {
    let n = to_mkl_int(symbol.name(), len)?;
    Ok((n > 0).then_some(n))
}
