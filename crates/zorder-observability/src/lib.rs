// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # zorder-observability
//!
//! Logging setup shared by zorder crates and the applications embedding them.
//!
//! Per-crate debug output is switched on with `--debug-<crate>` arguments
//! or the `ZORDER_DEBUG` environment variable.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known zorder crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "zorder",
    "zorder-codec",
    "zorder-config",
    "zorder-observability",
];
