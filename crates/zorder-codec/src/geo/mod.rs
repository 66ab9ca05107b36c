// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Fixed-precision lat/lng codes built by recursive quadrant bisection.

A point is shifted onto `x = lng + 180`, `y = lat + 90` and then compared
against 32 halving thresholds (180, 90, 45, ...). Each comparison emits one
base-4 digit: bit 1 for latitude, bit 0 for longitude. Decoding sums the
thresholds back, so a round trip recovers the point to within
`180 / 2^31` degrees.

# Example
```
use zorder_codec::{deinterleave_latlng, interleave_latlng};

let code = interleave_latlng(40.712014, -74.008164).unwrap();
assert_eq!(code, "03023211232311330231120312032231");
assert_eq!(deinterleave_latlng(&code).unwrap(), (40.712014, -74.008164));
```
*/

mod code;
mod normalize;

use serde::{Deserialize, Serialize};

use crate::error::{MortonError, MortonResult};

pub use code::{GeoMortonCode, GEO_DIGITS};

use normalize::{latitude_to_y, longitude_to_x};

/// Quadrant thresholds in degrees, starting at 180 and halving each step.
pub const DIVISORS: [f64; GEO_DIGITS] = divisor_table();

const fn divisor_table() -> [f64; GEO_DIGITS] {
    let mut table = [0.0; GEO_DIGITS];
    let mut divisor = 180.0;
    let mut i = 0;
    while i < GEO_DIGITS {
        table[i] = divisor;
        divisor /= 2.0;
        i += 1;
    }
    table
}

/// Decimal places kept by [`decode_latlng`]
pub const DECODE_PRECISION: i32 = 6;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn encode(&self) -> MortonResult<GeoMortonCode> {
        encode_latlng(self.lat, self.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lng)
    }
}

/// Encode a lat/lng pair into a quadrant code.
///
/// Out-of-range inputs are folded back with a single modulo wrap (see the
/// `normalize` module); they are not rejected.
///
/// # Errors
///
/// Returns [`MortonError::InvalidArgument`] if either coordinate is NaN or
/// infinite.
pub fn encode_latlng(lat: f64, lng: f64) -> MortonResult<GeoMortonCode> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(MortonError::invalid(format!(
            "latitude and longitude must be finite, got ({}, {})",
            lat, lng
        )));
    }

    let mut x = longitude_to_x(lng);
    let mut y = latitude_to_y(lat);

    let mut digits = [0u8; GEO_DIGITS];
    for (digit, &dx) in digits.iter_mut().zip(DIVISORS.iter()) {
        if y >= dx {
            *digit |= 2;
            y -= dx;
        }
        if x >= dx {
            *digit |= 1;
            x -= dx;
        }
    }

    Ok(GeoMortonCode::from_digits_unchecked(digits))
}

/// Decode a quadrant code back into `(lat, lng)`, rounded to
/// [`DECODE_PRECISION`] decimal places.
pub fn decode_latlng(code: &GeoMortonCode) -> (f64, f64) {
    let mut x = 0.0;
    let mut y = 0.0;
    for (&digit, &dx) in code.digits().iter().zip(DIVISORS.iter()) {
        if digit & 2 != 0 {
            y += dx;
        }
        if digit & 1 != 0 {
            x += dx;
        }
    }
    (round_to_precision(y - 90.0), round_to_precision(x - 180.0))
}

/// String form of [`encode_latlng`].
pub fn interleave_latlng(lat: f64, lng: f64) -> MortonResult<String> {
    encode_latlng(lat, lng).map(|code| code.to_string())
}

/// String form of [`decode_latlng`].
///
/// # Errors
///
/// Returns [`MortonError::InvalidArgument`] unless `code` is exactly 32
/// characters of `0`-`3`.
pub fn deinterleave_latlng(code: &str) -> MortonResult<(f64, f64)> {
    let code: GeoMortonCode = code.parse()?;
    Ok(decode_latlng(&code))
}

/// Correctly rounded to [`DECODE_PRECISION`] places, ties to even on the
/// exact binary value. Scaling by `1e6` first would round the product.
pub(crate) fn round_to_precision(value: f64) -> f64 {
    format!("{:.*}", DECODE_PRECISION as usize, value)
        .parse()
        .unwrap_or(value)
}
