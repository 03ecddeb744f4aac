// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Contract Checks Ahead of Dispatch*
//!
//! Length, stride and count checks the binding surface runs before anything crosses
//! the foreign boundary.

use tracing::debug;

use crate::errors::{VmlError, log_length_mismatch};
use crate::kernels::ffi::MklInt;

/// Checks that a buffer holds at least `required` elements.
///
/// `role` names the buffer in the error (`"b"` for the second input, `"r"` for the output).
#[inline(always)]
pub fn confirm_capacity(
    fname: &str,
    role: &str,
    required: usize,
    actual: usize,
) -> Result<(), VmlError> {
    if actual < required {
        debug!(entry_point = fname, role, required, actual, "rejected short buffer");
        return Err(VmlError::InvalidArgument(log_length_mismatch(
            fname, role, required, actual,
        )));
    }
    Ok(())
}

/// Converts an element count to the kernel's integer type.
#[inline(always)]
pub fn to_mkl_int(fname: &str, value: usize) -> Result<MklInt, VmlError> {
    MklInt::try_from(value).map_err(|_| {
        debug!(entry_point = fname, value, "rejected count wider than MklInt");
        VmlError::InvalidArgument(format!(
            "{fname} => {value} exceeds the kernel's maximum count {}",
            MklInt::MAX
        ))
    })
}

/// Validates a stride and converts it to the kernel's integer type.
#[inline(always)]
pub fn confirm_increment(fname: &str, increment: usize) -> Result<MklInt, VmlError> {
    if increment == 0 {
        debug!(entry_point = fname, "rejected zero increment");
        return Err(VmlError::InvalidArgument(format!(
            "{fname} => increment must be at least 1"
        )));
    }
    MklInt::try_from(increment).map_err(|_| {
        debug!(entry_point = fname, increment, "rejected increment wider than MklInt");
        VmlError::InvalidArgument(format!(
            "{fname} => increment {increment} exceeds the kernel's maximum stride {}",
            MklInt::MAX
        ))
    })
}

/// Number of elements visited when stepping through `len` elements by `increment`.
///
/// Indices `0, increment, 2 * increment, ...` below `len`, i.e. `ceil(len / increment)`.
/// `increment` must be non-zero.
#[inline(always)]
pub const fn strided_count(len: usize, increment: usize) -> usize {
    len.div_ceil(increment)
}
