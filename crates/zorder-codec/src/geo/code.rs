// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Validated 32-digit quadrant code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MortonError, MortonResult};

/// Number of quadrant digits in every code
pub const GEO_DIGITS: usize = 32;

/// A geographic Morton code: 32 base-4 digits, coarsest quadrant first.
///
/// Each digit packs two bits: bit 1 selects the upper latitude half and
/// bit 0 the upper longitude half at that subdivision depth. Ordering
/// matches the ordering of the string form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoMortonCode {
    digits: [u8; GEO_DIGITS],
}

impl GeoMortonCode {
    pub const DIGITS: usize = GEO_DIGITS;

    /// Build from raw digit values.
    ///
    /// # Errors
    ///
    /// Returns [`MortonError::InvalidArgument`] if any digit is above 3.
    pub fn from_digits(digits: [u8; GEO_DIGITS]) -> MortonResult<Self> {
        if let Some(position) = digits.iter().position(|&d| d > 3) {
            return Err(MortonError::invalid(format!(
                "quadrant digit {} at position {} is out of range 0-3",
                digits[position], position
            )));
        }
        Ok(Self { digits })
    }

    pub(crate) fn from_digits_unchecked(digits: [u8; GEO_DIGITS]) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 3));
        Self { digits }
    }

    /// Digit values (0-3), coarsest first.
    pub fn digits(&self) -> &[u8; GEO_DIGITS] {
        &self.digits
    }
}

impl fmt::Display for GeoMortonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GeoMortonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoMortonCode({})", self)
    }
}

impl FromStr for GeoMortonCode {
    type Err = MortonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != Self::DIGITS {
            return Err(MortonError::invalid(format!(
                "geo morton code must be {} digits, got {}",
                Self::DIGITS,
                s.chars().count()
            )));
        }

        let mut digits = [0u8; GEO_DIGITS];
        for (i, &byte) in bytes.iter().enumerate() {
            digits[i] = match byte {
                b'0'..=b'3' => byte - b'0',
                _ => {
                    return Err(MortonError::invalid(format!(
                        "geo morton code contains non-quadrant character at position {}",
                        i
                    )))
                }
            };
        }
        Ok(Self { digits })
    }
}

impl Serialize for GeoMortonCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GeoMortonCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
