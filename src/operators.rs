// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Operators, element kinds and call variants used to route a call to its entry point,
//! plus the accuracy mode forwarded to the kernel.

use core::fmt;

use crate::errors::VmlError;
use crate::kernels::ffi::MklInt64;

/// Elementwise operations exposed by the binding surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmlOperator {
    /// Cosine (`cos(a)`)
    Cos,
    /// Arcsine (`asin(a)`)
    ///
    /// Real inputs outside `[-1, 1]` yield NaN, as the kernel defines.
    Asin,
    /// Multiplication (`a * b`)
    Multiply,
    /// Addition (`a + b`)
    Add,
    /// Subtraction (`a - b`)
    Subtract,
}

impl VmlOperator {
    /// Number of input buffers the operator reads.
    pub const fn arity(self) -> usize {
        match self {
            VmlOperator::Cos | VmlOperator::Asin => 1,
            VmlOperator::Multiply | VmlOperator::Add | VmlOperator::Subtract => 2,
        }
    }
}

impl fmt::Display for VmlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VmlOperator::Cos => "cos",
            VmlOperator::Asin => "asin",
            VmlOperator::Multiply => "multiply",
            VmlOperator::Add => "add",
            VmlOperator::Subtract => "subtract",
        };
        f.write_str(name)
    }
}

/// Element type family of a buffer, as the kernel sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `f64`
    Real,
    /// `Complex64`, viewed as the native layout at the boundary.
    Complex,
    /// `MklComplex16`, already in the native layout.
    NativeComplex,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Real => f.write_str("real"),
            ElementKind::Complex => f.write_str("complex"),
            ElementKind::NativeComplex => f.write_str("native complex"),
        }
    }
}

/// How buffers are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallVariant {
    /// Consecutive elements.
    Unit,
    /// Every `increment`-th element.
    Strided,
}

impl fmt::Display for CallVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallVariant::Unit => f.write_str("unit-stride"),
            CallVariant::Strided => f.write_str("strided"),
        }
    }
}

/// Accuracy/performance mode of the kernel routine.
///
/// The binding layer never interprets the mode; it forwards the numeric code and the
/// runtime picks the routine variant. Codes match oneMKL's `VML_LA`, `VML_HA` and `VML_EP`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VmlAccuracy {
    /// Low accuracy, faster.
    Low = 1,
    /// High accuracy.
    #[default]
    High = 2,
    /// Enhanced performance, roughly half the mantissa bits correct.
    Performance = 3,
}

impl VmlAccuracy {
    /// Every mode, in code order.
    pub const ALL: [VmlAccuracy; 3] = [VmlAccuracy::Low, VmlAccuracy::High, VmlAccuracy::Performance];

    /// The numeric code (1, 2 or 3).
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// The code as the kernel's 64-bit `mode` argument.
    pub const fn mode(self) -> MklInt64 {
        self as u32 as MklInt64
    }
}

impl TryFrom<u32> for VmlAccuracy {
    type Error = VmlError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(VmlAccuracy::Low),
            2 => Ok(VmlAccuracy::High),
            3 => Ok(VmlAccuracy::Performance),
            other => Err(VmlError::InvalidArgument(format!(
                "unknown accuracy mode code {other}, expected 1, 2 or 3"
            ))),
        }
    }
}

impl fmt::Display for VmlAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VmlAccuracy::Low => f.write_str("low"),
            VmlAccuracy::High => f.write_str("high"),
            VmlAccuracy::Performance => f.write_str("performance"),
        }
    }
}
