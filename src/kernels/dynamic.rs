// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Loaded Kernel** - *Run-Time Resolved VML Entry Points*
//!
//! Opens `mkl_rt` with `libloading`, resolves every entry point in
//! [`VmlSymbol::ALL`] into a table of raw `extern "C"` function pointers, and calls
//! through those addresses. Resolution is all-or-nothing at open time: a kernel that
//! exists can make every call.
//!
//! The `Library` handle lives inside the kernel, so the resolved addresses stay valid
//! for as long as the kernel does.

use core::fmt;
use std::ffi::OsStr;

use libloading::{Library, Symbol};
use tracing::{debug, error, info};

use crate::config::library_candidates;
use crate::errors::VmlError;
use crate::kernels::dispatch::VmlKernel;
use crate::kernels::ffi::{
    BinaryFn, BinaryModeFn, MklInt, MklInt64, StridedBinaryModeFn, UnaryFn,
};
use crate::kernels::symbols::VmlSymbol;
use crate::layout::MklComplex16;

/// Resolved entry point addresses.
#[derive(Clone, Copy)]
struct EntryPoints {
    vd_cos: UnaryFn<f64>,
    vz_cos: UnaryFn<MklComplex16>,
    vd_asin: UnaryFn<f64>,
    vz_asin: UnaryFn<MklComplex16>,
    vmd_mul: BinaryModeFn<f64>,
    vmz_mul: BinaryModeFn<MklComplex16>,
    vz_mul: BinaryFn<MklComplex16>,
    vmd_add: BinaryModeFn<f64>,
    vmd_sub: BinaryModeFn<f64>,
    vmd_mul_i: StridedBinaryModeFn<f64>,
    vmd_add_i: StridedBinaryModeFn<f64>,
    vmd_sub_i: StridedBinaryModeFn<f64>,
}

/// VML kernel backed by a runtime-loaded `mkl_rt`.
pub struct DynamicKernel {
    entry: EntryPoints,
    library: String,
    // Keeps the resolved addresses alive. Declared last so it drops last.
    _handle: Library,
}

impl DynamicKernel {
    /// Opens a specific runtime library file or name.
    pub fn open_path(path: impl AsRef<OsStr>) -> Result<Self, VmlError> {
        let path = path.as_ref();
        let library = path.to_string_lossy().into_owned();
        debug!(library = %library, "opening VML runtime");

        // Safety: loading `mkl_rt` runs its initialisers, which have no preconditions
        // on the host process.
        let handle = unsafe { Library::new(path) }.map_err(|source| VmlError::LibraryLoad {
            library: library.clone(),
            source,
        })?;

        // Safety: each symbol is resolved with the signature oneMKL documents for it.
        let entry = unsafe {
            EntryPoints {
                vd_cos: resolve(&handle, &library, VmlSymbol::VdCos)?,
                vz_cos: resolve(&handle, &library, VmlSymbol::VzCos)?,
                vd_asin: resolve(&handle, &library, VmlSymbol::VdAsin)?,
                vz_asin: resolve(&handle, &library, VmlSymbol::VzAsin)?,
                vmd_mul: resolve(&handle, &library, VmlSymbol::VmdMul)?,
                vmz_mul: resolve(&handle, &library, VmlSymbol::VmzMul)?,
                vz_mul: resolve(&handle, &library, VmlSymbol::VzMul)?,
                vmd_add: resolve(&handle, &library, VmlSymbol::VmdAdd)?,
                vmd_sub: resolve(&handle, &library, VmlSymbol::VmdSub)?,
                vmd_mul_i: resolve(&handle, &library, VmlSymbol::VmdMulI)?,
                vmd_add_i: resolve(&handle, &library, VmlSymbol::VmdAddI)?,
                vmd_sub_i: resolve(&handle, &library, VmlSymbol::VmdSubI)?,
            }
        };

        info!(library = %library, entry_points = VmlSymbol::ALL.len(), "loaded VML runtime");
        Ok(DynamicKernel {
            entry,
            library,
            _handle: handle,
        })
    }

    /// Path or name the runtime was opened from.
    pub fn library(&self) -> &str {
        &self.library
    }
}

/// Looks up one entry point and copies its address out of the `Symbol`.
///
/// # Safety
/// `T` must be the function pointer type matching the native signature of `symbol`.
unsafe fn resolve<T: Copy>(
    handle: &Library,
    library: &str,
    symbol: VmlSymbol,
) -> Result<T, VmlError> {
    let found: Symbol<T> = unsafe { handle.get(symbol.c_name()) }.map_err(|source| {
        error!(library, symbol = symbol.name(), "VML entry point missing");
        VmlError::MissingSymbol {
            library: library.to_owned(),
            symbol: symbol.name(),
            source,
        }
    })?;
    Ok(*found)
}

impl fmt::Debug for DynamicKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicKernel")
            .field("library", &self.library)
            .finish_non_exhaustive()
    }
}

impl VmlKernel for DynamicKernel {
    fn open() -> Result<Self, VmlError> {
        let candidates = library_candidates();
        let mut last_err = None;
        for candidate in &candidates {
            match DynamicKernel::open_path(candidate) {
                Ok(kernel) => return Ok(kernel),
                Err(e) => {
                    debug!(library = %candidate, error = %e, "VML runtime candidate rejected");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| {
            VmlError::RuntimeUnavailable("no runtime library name known for this platform".into())
        }))
    }

    fn describe(&self) -> &str {
        &self.library
    }

    #[inline(always)]
    unsafe fn vd_cos(&self, n: MklInt, a: *const f64, r: *mut f64) {
        unsafe { (self.entry.vd_cos)(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vz_cos(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16) {
        unsafe { (self.entry.vz_cos)(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vd_asin(&self, n: MklInt, a: *const f64, r: *mut f64) {
        unsafe { (self.entry.vd_asin)(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vz_asin(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16) {
        unsafe { (self.entry.vz_asin)(n, a, r) }
    }

    #[inline(always)]
    unsafe fn vmd_mul(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        unsafe { (self.entry.vmd_mul)(n, a, b, r, mode) }
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
        unsafe { (self.entry.vmz_mul)(n, a, b, r, mode) }
    }

    #[inline(always)]
    unsafe fn vz_mul(
        &self,
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
    ) {
        unsafe { (self.entry.vz_mul)(n, a, b, r) }
    }

    #[inline(always)]
    unsafe fn vmd_add(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        unsafe { (self.entry.vmd_add)(n, a, b, r, mode) }
    }

    #[inline(always)]
    unsafe fn vmd_sub(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        unsafe { (self.entry.vmd_sub)(n, a, b, r, mode) }
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
        unsafe { (self.entry.vmd_mul_i)(n, a, inca, b, incb, r, incr, mode) }
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
        unsafe { (self.entry.vmd_add_i)(n, a, inca, b, incb, r, incr, mode) }
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
        unsafe { (self.entry.vmd_sub_i)(n, a, inca, b, incb, r, incr, mode) }
    }
}
