// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Kernel Dispatch Module** - *Foreign Call Seam*
//!
//! [`VmlKernel`] is the one interface over the native VML routines. It has two
//! implementations, picked at build time:
//!
//! - [`DynamicKernel`](crate::kernels::dynamic::DynamicKernel): opens `mkl_rt` at run
//!   time and calls through resolved function addresses. The default.
//! - `LinkedKernel`: calls `extern "C"` declarations bound by the linker. Enabled with
//!   the `linked` feature.
//!
//! [`DefaultKernel`] names whichever the build selected. Callers never branch on it.
//!
//! ## Buffers across the boundary
//! Each method takes raw pointers derived from slices the caller borrows for the whole
//! call, so the memory cannot move, be freed or be mutated elsewhere until the routine
//! returns. The borrow ends on every exit path, unwinding included. Nothing is retained.

use crate::errors::VmlError;
use crate::kernels::ffi::{MklInt, MklInt64};
use crate::layout::MklComplex16;

/// Kernel implementation the crate uses when none is named.
#[cfg(feature = "linked")]
pub type DefaultKernel = crate::kernels::linked::LinkedKernel;

/// Kernel implementation the crate uses when none is named.
#[cfg(not(feature = "linked"))]
pub type DefaultKernel = crate::kernels::dynamic::DynamicKernel;

/// The native VML entry points, one method per routine.
///
/// # Safety
/// Every method forwards to a native routine. Callers must ensure:
/// - `n >= 0`;
/// - every input pointer is valid for reads and the output pointer valid for writes
///   of all elements the routine addresses (`n`, or `1 + (n - 1) * inc` for strided
///   routines);
/// - no other thread mutates those buffers during the call.
///
/// Input and output may be the same pointer; the runtime supports in-place operation.
/// `mode`, where a routine takes one, is one of the `VmlAccuracy` codes.
pub trait VmlKernel: Send + Sync + Sized {
    /// Acquires the kernel. For the loaded form this opens the runtime and resolves
    /// every entry point; a missing library or symbol fails here, never per call.
    fn open() -> Result<Self, VmlError>;

    /// Human-readable description for logs.
    fn describe(&self) -> &str;

    /// `vdCos`
    unsafe fn vd_cos(&self, n: MklInt, a: *const f64, r: *mut f64);
    /// `vzCos`
    unsafe fn vz_cos(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16);
    /// `vdAsin`
    unsafe fn vd_asin(&self, n: MklInt, a: *const f64, r: *mut f64);
    /// `vzAsin`
    unsafe fn vz_asin(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16);

    /// `vmdMul`
    unsafe fn vmd_mul(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64);
    /// `vmzMul`
    unsafe fn vmz_mul(
        &self,
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
        mode: MklInt64,
    );
    /// `vzMul`
    unsafe fn vz_mul(
        &self,
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
    );
    /// `vmdAdd`
    unsafe fn vmd_add(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64);
    /// `vmdSub`
    unsafe fn vmd_sub(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64);

    /// `vmdMulI`
    #[allow(clippy::too_many_arguments)]
    unsafe fn vmd_mul_i(
        &self,
        n: MklInt,
        a: *const f64,
        inca: MklInt,
        b: *const f64,
        incb: MklInt,
        r: *mut f64,
        incr: MklInt,
        mode: MklInt64,
    );
    /// `vmdAddI`
    #[allow(clippy::too_many_arguments)]
    unsafe fn vmd_add_i(
        &self,
        n: MklInt,
        a: *const f64,
        inca: MklInt,
        b: *const f64,
        incb: MklInt,
        r: *mut f64,
        incr: MklInt,
        mode: MklInt64,
    );
    /// `vmdSubI`
    #[allow(clippy::too_many_arguments)]
    unsafe fn vmd_sub_i(
        &self,
        n: MklInt,
        a: *const f64,
        inca: MklInt,
        b: *const f64,
        incb: MklInt,
        r: *mut f64,
        incr: MklInt,
        mode: MklInt64,
    );
}
