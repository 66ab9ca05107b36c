// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Integer bit interleaving (Morton / Z-order codes).

Two code widths are available as distinct types, [`Morton32`] and
[`Morton64`], sharing the [`MortonCodec`] trait. The free functions in this
module use the 64-bit codec. When the width is only known at runtime (for
example from configuration), use [`CodeWidth`].

Components wider than the per-component budget are silently truncated.
*/

mod bits32;
mod bits64;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MortonError, MortonResult};

pub use bits32::Morton32;
pub use bits64::Morton64;

/// The widest codec available on every supported target.
pub type NativeMorton = Morton64;

/// A Morton code family of a fixed width.
///
/// Component 0 occupies bit positions `0, k, 2k, ...`, component 1
/// occupies `1, k + 1, ...` and so on, where `k` is the number of components.
pub trait MortonCodec {
    /// Unsigned integer holding a code
    type Code: Copy + Ord + fmt::Debug + Into<u64>;

    /// Bits kept per component when interleaving two components
    const COMPONENT_BITS_2D: u32;
    /// Bits kept per component when interleaving three components
    const COMPONENT_BITS_3D: u32;

    fn interleave2(x: u32, y: u32) -> Self::Code;
    fn interleave3(x: u32, y: u32, z: u32) -> Self::Code;
    fn deinterleave2(code: Self::Code) -> (u32, u32);
    fn deinterleave3(code: Self::Code) -> (u32, u32, u32);

    /// Dispatch on the number of components (2 or 3).
    fn interleave(components: &[u32]) -> MortonResult<Self::Code> {
        match *components {
            [x, y] => Ok(Self::interleave2(x, y)),
            [x, y, z] => Ok(Self::interleave3(x, y, z)),
            _ => Err(MortonError::invalid(format!(
                "expected two or three components to interleave, got {}",
                components.len()
            ))),
        }
    }

    /// Largest component value that survives a 2D round trip.
    fn max_component_2d() -> u32 {
        low_bits(Self::COMPONENT_BITS_2D)
    }

    /// Largest component value that survives a 3D round trip.
    fn max_component_3d() -> u32 {
        low_bits(Self::COMPONENT_BITS_3D)
    }
}

fn low_bits(bits: u32) -> u32 {
    if bits >= u32::BITS {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Interleave two components into a 64-bit code.
///
/// # Example
/// ```
/// use zorder_codec::{deinterleave2, interleave2};
///
/// let code = interleave2(100, 30);
/// assert_eq!(deinterleave2(code), (100, 30));
/// ```
#[inline]
pub fn interleave2(x: u32, y: u32) -> u64 {
    NativeMorton::interleave2(x, y)
}

/// Interleave three components into a 64-bit code (21 bits per component).
#[inline]
pub fn interleave3(x: u32, y: u32, z: u32) -> u64 {
    NativeMorton::interleave3(x, y, z)
}

/// Interleave two or three components into a 64-bit code.
///
/// # Errors
///
/// Returns [`MortonError::InvalidArgument`] for fewer than two or more
/// than three components.
pub fn interleave(components: &[u32]) -> MortonResult<u64> {
    NativeMorton::interleave(components)
}

#[inline]
pub fn deinterleave2(code: u64) -> (u32, u32) {
    NativeMorton::deinterleave2(code)
}

#[inline]
pub fn deinterleave3(code: u64) -> (u32, u32, u32) {
    NativeMorton::deinterleave3(code)
}

/// Code width selected at runtime, e.g. from a configuration file.
///
/// Codes are carried as `u64` regardless of width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeWidth {
    #[serde(rename = "32")]
    Bits32,
    #[default]
    #[serde(rename = "64")]
    Bits64,
}

impl CodeWidth {
    pub fn bits(self) -> u32 {
        match self {
            CodeWidth::Bits32 => 32,
            CodeWidth::Bits64 => 64,
        }
    }

    pub fn max_code(self) -> u64 {
        match self {
            CodeWidth::Bits32 => u32::MAX as u64,
            CodeWidth::Bits64 => u64::MAX,
        }
    }

    pub fn max_component_2d(self) -> u32 {
        match self {
            CodeWidth::Bits32 => Morton32::max_component_2d(),
            CodeWidth::Bits64 => Morton64::max_component_2d(),
        }
    }

    pub fn max_component_3d(self) -> u32 {
        match self {
            CodeWidth::Bits32 => Morton32::max_component_3d(),
            CodeWidth::Bits64 => Morton64::max_component_3d(),
        }
    }

    pub fn interleave2(self, x: u32, y: u32) -> u64 {
        match self {
            CodeWidth::Bits32 => Morton32::interleave2(x, y) as u64,
            CodeWidth::Bits64 => Morton64::interleave2(x, y),
        }
    }

    pub fn interleave3(self, x: u32, y: u32, z: u32) -> u64 {
        match self {
            CodeWidth::Bits32 => Morton32::interleave3(x, y, z) as u64,
            CodeWidth::Bits64 => Morton64::interleave3(x, y, z),
        }
    }

    pub fn interleave(self, components: &[u32]) -> MortonResult<u64> {
        match self {
            CodeWidth::Bits32 => Morton32::interleave(components).map(u64::from),
            CodeWidth::Bits64 => Morton64::interleave(components),
        }
    }

    /// # Errors
    ///
    /// Returns [`MortonError::InvalidArgument`] if `code` does not fit this width.
    pub fn deinterleave2(self, code: u64) -> MortonResult<(u32, u32)> {
        match self {
            CodeWidth::Bits32 => Ok(Morton32::deinterleave2(self.narrow(code)?)),
            CodeWidth::Bits64 => Ok(Morton64::deinterleave2(code)),
        }
    }

    /// # Errors
    ///
    /// Returns [`MortonError::InvalidArgument`] if `code` does not fit this width.
    pub fn deinterleave3(self, code: u64) -> MortonResult<(u32, u32, u32)> {
        match self {
            CodeWidth::Bits32 => Ok(Morton32::deinterleave3(self.narrow(code)?)),
            CodeWidth::Bits64 => Ok(Morton64::deinterleave3(code)),
        }
    }

    fn narrow(self, code: u64) -> MortonResult<u32> {
        u32::try_from(code).map_err(|_| {
            MortonError::invalid(format!("code {} does not fit a {}-bit Morton code", code, self.bits()))
        })
    }
}

impl fmt::Display for CodeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl std::str::FromStr for CodeWidth {
    type Err = MortonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "32" => Ok(CodeWidth::Bits32),
            "64" => Ok(CodeWidth::Bits64),
            other => Err(MortonError::invalid(format!(
                "unsupported code width '{}', expected 32 or 64",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_fixed_arity() {
        assert_eq!(interleave(&[100, 50]).unwrap(), interleave2(100, 50));
        assert_eq!(interleave(&[10, 50, 40]).unwrap(), interleave3(10, 50, 40));
    }

    #[test]
    fn test_dispatch_rejects_bad_arity() {
        assert!(matches!(interleave(&[]), Err(MortonError::InvalidArgument(_))));
        assert!(matches!(interleave(&[77]), Err(MortonError::InvalidArgument(_))));
        assert!(matches!(
            interleave(&[1, 2, 3, 4]),
            Err(MortonError::InvalidArgument(_))
        ));
        assert!(Morton32::interleave(&[1]).is_err());
    }

    #[test]
    fn test_ordinality() {
        assert!(interleave2(10, 25) < interleave2(10, 50));
        assert!(interleave3(10, 25, 50) < interleave3(10, 25, 100));
    }

    #[test]
    fn test_component_budgets() {
        assert_eq!(Morton32::max_component_2d(), 0xffff);
        assert_eq!(Morton32::max_component_3d(), 0x3ff);
        assert_eq!(Morton64::max_component_2d(), u32::MAX);
        assert_eq!(Morton64::max_component_3d(), 0x1f_ffff);
    }

    #[test]
    fn test_code_width_dispatch() {
        let code = CodeWidth::Bits32.interleave(&[100, 30, 50]).unwrap();
        assert_eq!(code, Morton32::interleave3(100, 30, 50) as u64);
        assert_eq!(CodeWidth::Bits32.deinterleave3(code).unwrap(), (100, 30, 50));
        assert_eq!(CodeWidth::Bits64.interleave2(7, 9), interleave2(7, 9));
    }

    #[test]
    fn test_code_width_rejects_oversized_code() {
        let too_big = u32::MAX as u64 + 1;
        assert!(CodeWidth::Bits32.deinterleave2(too_big).is_err());
        assert!(CodeWidth::Bits32.deinterleave3(too_big).is_err());
        assert!(CodeWidth::Bits64.deinterleave2(too_big).is_ok());
    }

    #[test]
    fn test_code_width_parse_and_serde() {
        assert_eq!("32".parse::<CodeWidth>().unwrap(), CodeWidth::Bits32);
        assert_eq!(" 64 ".parse::<CodeWidth>().unwrap(), CodeWidth::Bits64);
        assert!("16".parse::<CodeWidth>().is_err());

        let json = serde_json::to_string(&CodeWidth::Bits32).unwrap();
        assert_eq!(json, "\"32\"");
        let width: CodeWidth = serde_json::from_str("\"64\"").unwrap();
        assert_eq!(width, CodeWidth::Bits64);
        assert_eq!(CodeWidth::default(), CodeWidth::Bits64);
    }
}
