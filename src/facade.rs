// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Width-configured entry point over the codec crate.

use serde_json::Value;
use zorder_codec::{args, CodeWidth, GeoMortonCode, MortonResult};

/// Morton codec bound to a code width chosen at runtime.
///
/// Geographic codes have a fixed length and ignore the width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zorder {
    width: CodeWidth,
}

impl Zorder {
    pub fn new(width: CodeWidth) -> Self {
        Self { width }
    }

    /// Codec configured from `[codec]` of a loaded config.
    #[cfg(feature = "config")]
    pub fn from_config(config: &zorder_config::ZorderConfig) -> Self {
        tracing::debug!(width = %config.codec.width, "configuring Morton codec");
        Self::new(config.codec.width)
    }

    /// Load `zorder.toml` (with environment overrides), install the
    /// tracing subscriber it describes and return the configured codec.
    ///
    /// # Errors
    ///
    /// Fails if the config cannot be loaded or a subscriber is already set.
    #[cfg(feature = "observability")]
    pub fn init() -> anyhow::Result<Self> {
        let config = zorder_config::load_config(None, None)?;
        let flags = zorder_observability::parse_debug_flags();
        zorder_observability::init_logging(&flags, &config.logging)?;
        Ok(Self::from_config(&config))
    }

    pub fn width(&self) -> CodeWidth {
        self.width
    }

    pub fn interleave2(&self, x: u32, y: u32) -> u64 {
        self.width.interleave2(x, y)
    }

    pub fn interleave3(&self, x: u32, y: u32, z: u32) -> u64 {
        self.width.interleave3(x, y, z)
    }

    pub fn interleave(&self, components: &[u32]) -> MortonResult<u64> {
        self.width.interleave(components)
    }

    pub fn deinterleave2(&self, code: u64) -> MortonResult<(u32, u32)> {
        self.width.deinterleave2(code)
    }

    pub fn deinterleave3(&self, code: u64) -> MortonResult<(u32, u32, u32)> {
        self.width.deinterleave3(code)
    }

    pub fn encode_latlng(&self, lat: f64, lng: f64) -> MortonResult<GeoMortonCode> {
        zorder_codec::encode_latlng(lat, lng)
    }

    pub fn interleave_latlng(&self, lat: f64, lng: f64) -> MortonResult<String> {
        zorder_codec::interleave_latlng(lat, lng)
    }

    pub fn deinterleave_latlng(&self, code: &str) -> MortonResult<(f64, f64)> {
        zorder_codec::deinterleave_latlng(code)
    }

    /// [`interleave`](Self::interleave) over JSON arguments.
    pub fn interleave_json(&self, values: &[Value]) -> MortonResult<u64> {
        args::interleave_args(self.width, values)
    }

    pub fn deinterleave2_json(&self, value: &Value) -> MortonResult<(u32, u32)> {
        args::deinterleave2_arg(self.width, value)
    }

    pub fn deinterleave3_json(&self, value: &Value) -> MortonResult<(u32, u32, u32)> {
        args::deinterleave3_arg(self.width, value)
    }

    pub fn interleave_latlng_json(&self, lat: &Value, lng: &Value) -> MortonResult<String> {
        args::interleave_latlng_args(lat, lng)
    }

    pub fn deinterleave_latlng_json(&self, value: &Value) -> MortonResult<(f64, f64)> {
        args::deinterleave_latlng_arg(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_64_bit() {
        let codec = Zorder::default();
        assert_eq!(codec.width(), CodeWidth::Bits64);
        assert_eq!(codec.interleave2(u32::MAX, u32::MAX), u64::MAX);
    }

    #[test]
    fn test_32_bit_rejects_wide_codes() {
        let codec = Zorder::new(CodeWidth::Bits32);
        assert!(codec.deinterleave2(1 << 40).is_err());
        assert!(codec.deinterleave2_json(&json!(1u64 << 40)).is_err());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_config() {
        let mut config = zorder_config::ZorderConfig::default();
        config.codec.width = CodeWidth::Bits32;
        assert_eq!(Zorder::from_config(&config).width(), CodeWidth::Bits32);
    }
}
