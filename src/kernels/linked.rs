// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Linked Kernel** - *Link-Time Bound VML Entry Points*
//!
//! `extern "C"` declarations of the VML routines, bound to `mkl_rt` by the linker.
//! Enabled with the `linked` feature; `build.rs` adds `$MKLROOT/lib` to the search path.
//!
//! Results are identical to [`DynamicKernel`](crate::kernels::dynamic::DynamicKernel);
//! only the call mechanism differs.

use tracing::info;

use crate::errors::VmlError;
use crate::kernels::dispatch::VmlKernel;
use crate::kernels::ffi::{MklInt, MklInt64};
use crate::layout::MklComplex16;

#[link(name = "mkl_rt")]
extern "C" {
    fn vdCos(n: MklInt, a: *const f64, r: *mut f64);
    fn vzCos(n: MklInt, a: *const MklComplex16, r: *mut MklComplex16);
    fn vdAsin(n: MklInt, a: *const f64, r: *mut f64);
    fn vzAsin(n: MklInt, a: *const MklComplex16, r: *mut MklComplex16);

    fn vmdMul(n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64);
    fn vmzMul(
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
        mode: MklInt64,
    );
    fn vzMul(n: MklInt, a: *const MklComplex16, b: *const MklComplex16, r: *mut MklComplex16);
    fn vmdAdd(n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64);
    fn vmdSub(n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64);

    fn vmdMulI(
        n: MklInt,
        a: *const f64,
        inca: MklInt,
        b: *const f64,
        incb: MklInt,
        r: *mut f64,
        incr: MklInt,
        mode: MklInt64,
    );
    fn vmdAddI(
        n: MklInt,
        a: *const f64,
        inca: MklInt,
        b: *const f64,
        incb: MklInt,
        r: *mut f64,
        incr: MklInt,
        mode: MklInt64,
    );
    fn vmdSubI(
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

/// VML kernel bound to `mkl_rt` at link time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedKernel;

impl VmlKernel for LinkedKernel {
    fn open() -> Result<Self, VmlError> {
        // A missing library or symbol already failed the link or the process load.
        info!("using link-time bound VML runtime");
        Ok(LinkedKernel)
    }

    fn describe(&self) -> &str {
        "mkl_rt (linked)"
    }

    #[inline(always)]
    unsafe fn vd_cos(&self, n: MklInt, a: *const f64, r: *mut f64) {
        unsafe { vdCos(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vz_cos(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16) {
        unsafe { vzCos(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vd_asin(&self, n: MklInt, a: *const f64, r: *mut f64) {
        unsafe { vdAsin(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vz_asin(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16) {
        unsafe { vzAsin(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vmd_mul(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        unsafe { vmdMul(n, a, b, r, mode) }
    }

    #[inline(always)]
    unsafe fn vmz_mul(
        &self,
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
        mode: MklInt64,
    ) {
        unsafe { vmzMul(n, a, b, r, mode) }
    }

    #[inline(always)]
    unsafe fn vz_mul(
        &self,
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
    ) {
        unsafe { vzMul(n, a, b, r) }
    }

    #[inline(always)]
    unsafe fn vmd_add(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        unsafe { vmdAdd(n, a, b, r, mode) }
    }

    #[inline(always)]
    unsafe fn vmd_sub(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        unsafe { vmdSub(n, a, b, r, mode) }
    }

    #[inline(always)]
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
    ) {
        unsafe { vmdMulI(n, a, inca, b, incb, r, incr, mode) }
    }

    #[inline(always)]
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
    ) {
        unsafe { vmdAddI(n, a, inca, b, incb, r, incr, mode) }
    }

    #[inline(always)]
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
    ) {
        unsafe { vmdSubI(n, a, inca, b, incb, r, incr, mode) }
    }
}
