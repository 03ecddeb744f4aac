// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Binding Contract and Runtime Errors*
//!
//! ## Error Categories
//! - **Contract violations**: buffers shorter than the primary input, zero strides,
//!   or counts the native integer type cannot hold. Raised before any foreign call.
//! - **Runtime resolution**: the VML runtime library or one of its entry points could
//!   not be found. These are startup failures, surfaced when a kernel is opened.
//!
//! Faults inside the native kernel itself are not represented here: the only defence
//! is that nothing reaches it with an under-sized buffer.

use thiserror::Error;

/// Error type for all binding operations.
#[derive(Debug, Error)]
pub enum VmlError {
    /// A buffer, stride or count broke the call contract. Nothing was dispatched.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The runtime library could not be opened.
    #[error("Failed to load VML runtime `{library}`: {source}")]
    LibraryLoad {
        library: String,
        #[source]
        source: libloading::Error,
    },

    /// The runtime library was opened but lacks a required entry point.
    #[error("VML runtime `{library}` has no entry point `{symbol}`: {source}")]
    MissingSymbol {
        library: String,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    /// No library name is known for this platform and none was configured.
    #[error("VML runtime unavailable: {0}")]
    RuntimeUnavailable(String),
}

impl VmlError {
    /// True for contract violations raised before dispatch.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, VmlError::InvalidArgument(_))
    }
}

/// Creates a formatted message for a buffer that is shorter than the primary input.
///
/// # Arguments
/// * `fname` - Entry point the call was routed to
/// * `role` - Which buffer fell short (`"b"` or `"r"`)
/// * `required` - Length of the primary input
/// * `actual` - Length of the short buffer
pub fn log_length_mismatch(fname: &str, role: &str, required: usize, actual: usize) -> String {
    format!("{fname} => Length mismatch: `{role}` holds {actual}, input needs {required}")
}
