// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **vml-bindings** - *Safe Bindings over the oneMKL Vector Mathematics Runtime*
//!
//! Elementwise cosine, arcsine, multiply, add and subtract over caller-owned `f64` and
//! `Complex64` buffers, dispatched to Intel oneMKL's VML entry points in `mkl_rt`.
//!
//! Nothing here computes maths itself. The crate validates buffer lengths, reinterprets
//! complex buffers into the kernel's `{ real, imag }` layout without copying, and forwards
//! to the native routine.
//!
//! ## Kernel forms
//! - **Loaded** (default): `mkl_rt` is opened at run time and every entry point is
//!   resolved up front. Set `MKL_RT_LIBRARY` to point at a specific library file.
//! - **Linked** (`--features linked`): entry points are bound by the linker. Set
//!   `MKLROOT` at build time if `mkl_rt` is not on the default linker path.
//!
//! Both implement [`kernels::dispatch::VmlKernel`]; [`DefaultKernel`] picks one at build time.
//!
//! ## Usage
//! ```rust,ignore
//! use vml_bindings::{Vml, VmlAccuracy};
//!
//! let vml: Vml = Vml::open()?;
//! let a = [0.0, 1.0, -1.0];
//! let mut r = [0.0; 3];
//! vml.asin(&a, &mut r)?;
//!
//! let b = [2.0, 2.0, 2.0];
//! vml.multiply(&a, &b, &mut r, VmlAccuracy::Performance)?;
//! ```

pub mod config;
pub mod errors;
pub mod layout;
pub mod operators;
pub mod utils;
pub mod vml;

pub mod kernels {
    pub mod dispatch;
    pub mod dynamic;
    pub mod element;
    pub mod ffi;
    #[cfg(feature = "linked")]
    pub mod linked;
    pub mod symbols;
}

pub use errors::VmlError;
pub use kernels::dispatch::{DefaultKernel, VmlKernel};
pub use kernels::dynamic::DynamicKernel;
pub use kernels::element::{VmlMul, VmlUnary};
#[cfg(feature = "linked")]
pub use kernels::linked::LinkedKernel;
pub use layout::MklComplex16;
pub use num_complex::Complex64;
pub use operators::VmlAccuracy;
pub use vml::Vml;
