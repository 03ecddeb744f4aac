// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Configuration** - *Runtime Library Resolution*
//!
//! Where the loaded kernel looks for `mkl_rt`, and the accuracy used when a call names
//! none. The linked kernel ignores the library settings and is configured at build time
//! through `MKLROOT`.

use std::env;

use crate::operators::VmlAccuracy;

/// Accuracy used by the shorthand operations that take none.
pub const DEFAULT_ACCURACY: VmlAccuracy = VmlAccuracy::High;

/// Environment variable naming an explicit runtime library path.
///
/// When set and non-empty it replaces the platform candidate list entirely.
pub const LIBRARY_ENV_VAR: &str = "MKL_RT_LIBRARY";

/// Runtime library names tried in order, versioned name first.
#[cfg(target_os = "windows")]
pub const LIBRARY_CANDIDATES: &[&str] = &["mkl_rt.2.dll", "mkl_rt.dll"];

/// Runtime library names tried in order, versioned name first.
#[cfg(target_os = "macos")]
pub const LIBRARY_CANDIDATES: &[&str] = &["libmkl_rt.2.dylib", "libmkl_rt.dylib"];

/// Runtime library names tried in order, versioned name first.
#[cfg(all(unix, not(target_os = "macos")))]
pub const LIBRARY_CANDIDATES: &[&str] = &["libmkl_rt.so.2", "libmkl_rt.so"];

/// Runtime library names tried in order, versioned name first.
#[cfg(not(any(unix, target_os = "windows")))]
pub const LIBRARY_CANDIDATES: &[&str] = &[];

/// Library names the loaded kernel should try, honouring [`LIBRARY_ENV_VAR`].
pub fn library_candidates() -> Vec<String> {
    candidates_from(env::var(LIBRARY_ENV_VAR).ok())
}

/// Resolves the candidate list from an optional override.
pub fn candidates_from(override_path: Option<String>) -> Vec<String> {
    match override_path.map(|p| p.trim().to_owned()) {
        Some(path) if !path.is_empty() => vec![path],
        _ => LIBRARY_CANDIDATES.iter().map(|s| s.to_string()).collect(),
    }
}
