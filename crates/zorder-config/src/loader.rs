// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later ones winning:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{validate_config, ConfigError, ConfigResult, LogFormat, ZorderConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zorder_codec::CodeWidth;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "zorder.toml";

/// Find the configuration file
///
/// Search order:
/// 1. `ZORDER_CONFIG_PATH` environment variable
/// 2. Current working directory: `./zorder.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("ZORDER_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by ZORDER_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet ZORDER_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<ZorderConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };
    debug!(path = %config_file.display(), "loading configuration");

    let content = fs::read_to_string(&config_file)?;
    let mut config: ZorderConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `ZORDER_CODE_WIDTH` -> `codec.width` (`32` or `64`)
/// - `ZORDER_LOG_LEVEL` -> `logging.level`
/// - `ZORDER_LOG_FORMAT` -> `logging.format` (`text` or `json`)
///
/// Unparseable values are ignored with a warning.
pub fn apply_environment_overrides(config: &mut ZorderConfig) {
    if let Ok(value) = env::var("ZORDER_CODE_WIDTH") {
        match value.parse::<CodeWidth>() {
            Ok(width) => config.codec.width = width,
            Err(e) => warn!("Ignoring ZORDER_CODE_WIDTH: {}", e),
        }
    }
    if let Ok(value) = env::var("ZORDER_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("ZORDER_LOG_FORMAT") {
        match value.parse::<LogFormat>() {
            Ok(format) => config.logging.format = format,
            Err(e) => warn!("Ignoring ZORDER_LOG_FORMAT: {}", e),
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// Recognized keys: `code_width`, `log_level`, `log_format`. Other keys are
/// left for the caller.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a recognized key has an unparseable value
pub fn apply_cli_overrides(
    config: &mut ZorderConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    if let Some(value) = cli_args.get("code_width") {
        config.codec.width = value
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("code_width: {}", e)))?;
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_format") {
        config.logging.format = value
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("log_format: {}", e)))?;
    }
    Ok(())
}
