// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::env;
use std::path::PathBuf;

/// Library sub-directories of a oneMKL install, newest layout first.
const MKL_LIB_DIRS: [&str; 3] = ["lib", "lib/intel64", "lib/x64"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MKLROOT");

    // The run-time loaded kernel needs nothing from the linker.
    if env::var_os("CARGO_FEATURE_LINKED").is_none() {
        return;
    }

    // `MKLROOT` is exported by oneMKL's `setvars` scripts.
    // Without it we rely on the system linker path to find `mkl_rt`.
    let Some(root) = env::var_os("MKLROOT").map(PathBuf::from) else {
        println!(
            "cargo:warning=feature `linked` enabled without MKLROOT; expecting mkl_rt on the default linker path"
        );
        return;
    };

    let mut found = false;
    for sub in MKL_LIB_DIRS {
        let dir = root.join(sub);
        if dir.is_dir() {
            println!("cargo:rustc-link-search=native={}", dir.display());
            found = true;
        }
    }

    if !found {
        println!(
            "cargo:warning=MKLROOT={} has no lib directory; expecting mkl_rt on the default linker path",
            root.display()
        );
    }
}
