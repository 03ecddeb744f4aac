// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Entry Point Table** - *Operation to Native Symbol Routing*
//!
//! Every native routine the crate calls, and the single mapping from
//! operator + element kind + call variant to the routine.
//!
//! Calling the wrong routine is not detectable at the boundary: `vdCos` and `vdAsin` have
//! identical signatures. Every call site names its symbol through [`VmlSymbol::route`],
//! and the loaded kernel resolves exactly the names listed here.
//!
//! | Operator | Element                  | Variant | Symbol    |
//! |----------|--------------------------|---------|-----------|
//! | cos      | real                     | unit    | `vdCos`   |
//! | cos      | complex / native complex | unit    | `vzCos`   |
//! | asin     | real                     | unit    | `vdAsin`  |
//! | asin     | complex / native complex | unit    | `vzAsin`  |
//! | multiply | real                     | unit    | `vmdMul`  |
//! | multiply | complex                  | unit    | `vmzMul`  |
//! | multiply | native complex           | unit    | `vzMul`   |
//! | multiply | real                     | strided | `vmdMulI` |
//! | add      | real                     | unit    | `vmdAdd`  |
//! | add      | real                     | strided | `vmdAddI` |
//! | subtract | real                     | unit    | `vmdSub`  |
//! | subtract | real                     | strided | `vmdSubI` |
//!
//! `vzMul` is the mode-less complex multiply; it runs under the runtime's global
//! accuracy mode, as the transcendental routines do.

use core::fmt;

use crate::operators::{CallVariant, ElementKind, VmlOperator};

/// A native VML entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmlSymbol {
    VdCos,
    VzCos,
    VdAsin,
    VzAsin,
    VmdMul,
    VmzMul,
    VzMul,
    VmdMulI,
    VmdAdd,
    VmdAddI,
    VmdSub,
    VmdSubI,
}

impl VmlSymbol {
    /// Every entry point the crate binds.
    pub const ALL: [VmlSymbol; 12] = [
        VmlSymbol::VdCos,
        VmlSymbol::VzCos,
        VmlSymbol::VdAsin,
        VmlSymbol::VzAsin,
        VmlSymbol::VmdMul,
        VmlSymbol::VmzMul,
        VmlSymbol::VzMul,
        VmlSymbol::VmdMulI,
        VmlSymbol::VmdAdd,
        VmlSymbol::VmdAddI,
        VmlSymbol::VmdSub,
        VmlSymbol::VmdSubI,
    ];

    /// Exported symbol name.
    pub const fn name(self) -> &'static str {
        match self {
            VmlSymbol::VdCos => "vdCos",
            VmlSymbol::VzCos => "vzCos",
            VmlSymbol::VdAsin => "vdAsin",
            VmlSymbol::VzAsin => "vzAsin",
            VmlSymbol::VmdMul => "vmdMul",
            VmlSymbol::VmzMul => "vmzMul",
            VmlSymbol::VzMul => "vzMul",
            VmlSymbol::VmdMulI => "vmdMulI",
            VmlSymbol::VmdAdd => "vmdAdd",
            VmlSymbol::VmdAddI => "vmdAddI",
            VmlSymbol::VmdSub => "vmdSub",
            VmlSymbol::VmdSubI => "vmdSubI",
        }
    }

    /// NUL-terminated name for the dynamic loader.
    pub const fn c_name(self) -> &'static [u8] {
        match self {
            VmlSymbol::VdCos => b"vdCos\0",
            VmlSymbol::VzCos => b"vzCos\0",
            VmlSymbol::VdAsin => b"vdAsin\0",
            VmlSymbol::VzAsin => b"vzAsin\0",
            VmlSymbol::VmdMul => b"vmdMul\0",
            VmlSymbol::VmzMul => b"vmzMul\0",
            VmlSymbol::VzMul => b"vzMul\0",
            VmlSymbol::VmdMulI => b"vmdMulI\0",
            VmlSymbol::VmdAdd => b"vmdAdd\0",
            VmlSymbol::VmdAddI => b"vmdAddI\0",
            VmlSymbol::VmdSub => b"vmdSub\0",
            VmlSymbol::VmdSubI => b"vmdSubI\0",
        }
    }

    /// Whether the routine takes a trailing accuracy `mode` argument.
    pub const fn takes_mode(self) -> bool {
        !matches!(
            self,
            VmlSymbol::VdCos
                | VmlSymbol::VzCos
                | VmlSymbol::VdAsin
                | VmlSymbol::VzAsin
                | VmlSymbol::VzMul
        )
    }

    /// Whether the routine takes per-buffer strides.
    pub const fn is_strided(self) -> bool {
        matches!(self, VmlSymbol::VmdMulI | VmlSymbol::VmdAddI | VmlSymbol::VmdSubI)
    }

    /// The entry point for an operator over an element kind and variant.
    ///
    /// `None` for combinations the runtime has but this crate does not bind
    /// (complex add/subtract, strided transcendental and complex routines).
    pub const fn route(op: VmlOperator, kind: ElementKind, variant: CallVariant) -> Option<Self> {
        use CallVariant::{Strided, Unit};
        use ElementKind::{Complex, NativeComplex, Real};

        let symbol = match (op, kind, variant) {
            (VmlOperator::Cos, Real, Unit) => VmlSymbol::VdCos,
            (VmlOperator::Cos, Complex | NativeComplex, Unit) => VmlSymbol::VzCos,
            (VmlOperator::Asin, Real, Unit) => VmlSymbol::VdAsin,
            (VmlOperator::Asin, Complex | NativeComplex, Unit) => VmlSymbol::VzAsin,
            (VmlOperator::Multiply, Real, Unit) => VmlSymbol::VmdMul,
            (VmlOperator::Multiply, Complex, Unit) => VmlSymbol::VmzMul,
            (VmlOperator::Multiply, NativeComplex, Unit) => VmlSymbol::VzMul,
            (VmlOperator::Multiply, Real, Strided) => VmlSymbol::VmdMulI,
            (VmlOperator::Add, Real, Unit) => VmlSymbol::VmdAdd,
            (VmlOperator::Add, Real, Strided) => VmlSymbol::VmdAddI,
            (VmlOperator::Subtract, Real, Unit) => VmlSymbol::VmdSub,
            (VmlOperator::Subtract, Real, Strided) => VmlSymbol::VmdSubI,
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for VmlSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
