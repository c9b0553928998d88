// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Compile-time configuration options for the crate.
//!
//! Options are collected in a typed `const` rather than scattered `#[cfg]`
//! attributes, so every code path is type-checked whether or not an option is
//! enabled. The compiler folds the constant, so a disabled option costs
//! nothing at run time.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether a contract violation (for example `unwrap` on an `Err`) should
    /// be reported through `tracing` before the panic is raised.
    ///
    /// Enabled by default. Disabled with the `no_violation_logging` feature
    /// for builds that install their own panic reporting.
    pub(crate) log_violations: bool,
}

/// The unique `Config` instance. This is the only place in the crate where
/// Cargo features are allowed to influence code.
pub(crate) const CONFIG: Config = Config {
    log_violations: !cfg!(feature = "no_violation_logging"),
};
