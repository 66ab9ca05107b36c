// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Console logging initialization

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use zorder_config::{LogFormat, LoggingConfig};

use crate::cli::CrateDebugFlags;

/// Build the `EnvFilter` for a logging config plus per-crate debug flags.
///
/// # Errors
///
/// Fails if the resulting directive string does not parse.
pub fn build_filter(debug_flags: &CrateDebugFlags, logging: &LoggingConfig) -> Result<EnvFilter> {
    let directives = debug_flags.to_filter_string(&logging.level);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {}", directives))
}

/// Install a global console subscriber.
///
/// Text output is human-readable; JSON output includes file and line.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_logging(debug_flags: &CrateDebugFlags, logging: &LoggingConfig) -> Result<()> {
    let filter = build_filter(debug_flags, logging)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match logging.format {
        LogFormat::Text => builder
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .try_init(),
        LogFormat::Json => builder
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Initialize logging with default settings
pub fn init_logging_default(debug_flags: &CrateDebugFlags) -> Result<()> {
    init_logging(debug_flags, &LoggingConfig::default())
}
