//! Test kernel that records every dispatched call and evaluates it with `std` maths,
//! so the binding surface can be checked without the VML runtime installed.
#![allow(unused)]

use std::sync::Mutex;

use num_complex::Complex64;
use vml_bindings::kernels::ffi::{MklInt, MklInt64};
use vml_bindings::kernels::symbols::VmlSymbol;
use vml_bindings::{MklComplex16, Vml, VmlError, VmlKernel};

/// One call as it reached the kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub symbol: VmlSymbol,
    pub n: MklInt,
    /// `(inca, incb, incr)` for strided routines.
    pub increments: Option<(MklInt, MklInt, MklInt)>,
    pub mode: Option<MklInt64>,
    /// Whether input and output were the same address.
    pub in_place: bool,
}

#[derive(Debug, Default)]
pub struct ReferenceKernel {
    calls: Mutex<Vec<Call>>,
}

impl ReferenceKernel {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Call> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn symbols(&self) -> Vec<VmlSymbol> {
        self.calls().into_iter().map(|c| c.symbol).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn unit(&self, symbol: VmlSymbol, n: MklInt, mode: Option<MklInt64>, in_place: bool) {
        self.record(Call {
            symbol,
            n,
            increments: None,
            mode,
            in_place,
        });
    }
}

pub fn reference_vml() -> Vml<ReferenceKernel> {
    Vml::with_kernel(ReferenceKernel::default())
}

unsafe fn map_unary<T: Copy>(n: MklInt, a: *const T, r: *mut T, f: impl Fn(T) -> T) {
    for i in 0..n as usize {
        unsafe { *r.add(i) = f(*a.add(i)) };
    }
}

unsafe fn map_binary<T: Copy>(
    n: MklInt,
    a: *const T,
    b: *const T,
    r: *mut T,
    f: impl Fn(T, T) -> T,
) {
    for i in 0..n as usize {
        unsafe { *r.add(i) = f(*a.add(i), *b.add(i)) };
    }
}

#[allow(clippy::too_many_arguments)]
unsafe fn map_strided(
    n: MklInt,
    a: *const f64,
    inca: MklInt,
    b: *const f64,
    incb: MklInt,
    r: *mut f64,
    incr: MklInt,
    f: impl Fn(f64, f64) -> f64,
) {
    for i in 0..n as usize {
        unsafe {
            *r.add(i * incr as usize) = f(*a.add(i * inca as usize), *b.add(i * incb as usize))
        };
    }
}

fn z(f: impl Fn(Complex64) -> Complex64) -> impl Fn(MklComplex16) -> MklComplex16 {
    move |x| f(x.into()).into()
}

impl VmlKernel for ReferenceKernel {
    fn open() -> Result<Self, VmlError> {
        Ok(ReferenceKernel::default())
    }

    fn describe(&self) -> &str {
        "reference"
    }

    unsafe fn vd_cos(&self, n: MklInt, a: *const f64, r: *mut f64) {
        self.unit(VmlSymbol::VdCos, n, None, a == r as *const f64);
        unsafe { map_unary(n, a, r, f64::cos) }
    }

    unsafe fn vz_cos(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16) {
        self.unit(VmlSymbol::VzCos, n, None, a == r as *const MklComplex16);
        unsafe { map_unary(n, a, r, z(|c| c.cos())) }
    }

    unsafe fn vd_asin(&self, n: MklInt, a: *const f64, r: *mut f64) {
        self.unit(VmlSymbol::VdAsin, n, None, a == r as *const f64);
        unsafe { map_unary(n, a, r, f64::asin) }
    }

    unsafe fn vz_asin(&self, n: MklInt, a: *const MklComplex16, r: *mut MklComplex16) {
        self.unit(VmlSymbol::VzAsin, n, None, a == r as *const MklComplex16);
        unsafe { map_unary(n, a, r, z(|c| c.asin())) }
    }

    unsafe fn vmd_mul(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        self.unit(VmlSymbol::VmdMul, n, Some(mode), false);
        unsafe { map_binary(n, a, b, r, |x, y| x * y) }
    }

    unsafe fn vmz_mul(
        &self,
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
        mode: MklInt64,
    ) {
        self.unit(VmlSymbol::VmzMul, n, Some(mode), false);
        unsafe {
            map_binary(n, a, b, r, |x, y| {
                (Complex64::from(x) * Complex64::from(y)).into()
            })
        }
    }

    unsafe fn vz_mul(
        &self,
        n: MklInt,
        a: *const MklComplex16,
        b: *const MklComplex16,
        r: *mut MklComplex16,
    ) {
        self.unit(VmlSymbol::VzMul, n, None, false);
        unsafe {
            map_binary(n, a, b, r, |x, y| {
                (Complex64::from(x) * Complex64::from(y)).into()
            })
        }
    }

    unsafe fn vmd_add(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        self.unit(VmlSymbol::VmdAdd, n, Some(mode), false);
        unsafe { map_binary(n, a, b, r, |x, y| x + y) }
    }

    unsafe fn vmd_sub(&self, n: MklInt, a: *const f64, b: *const f64, r: *mut f64, mode: MklInt64) {
        self.unit(VmlSymbol::VmdSub, n, Some(mode), false);
        unsafe { map_binary(n, a, b, r, |x, y| x - y) }
    }

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
        self.record(Call {
            symbol: VmlSymbol::VmdMulI,
            n,
            increments: Some((inca, incb, incr)),
            mode: Some(mode),
            in_place: false,
        });
        unsafe { map_strided(n, a, inca, b, incb, r, incr, |x, y| x * y) }
    }

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
        self.record(Call {
            symbol: VmlSymbol::VmdAddI,
            n,
            increments: Some((inca, incb, incr)),
            mode: Some(mode),
            in_place: false,
        });
        unsafe { map_strided(n, a, inca, b, incb, r, incr, |x, y| x + y) }
    }

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
        self.record(Call {
            symbol: VmlSymbol::VmdSubI,
            n,
            increments: Some((inca, incb, incr)),
            mode: Some(mode),
            in_place: false,
        });
        unsafe { map_strided(n, a, inca, b, incb, r, incr, |x, y| x - y) }
    }
}
