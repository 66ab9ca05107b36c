// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Shifting lat/lng degrees onto the non-negative ranges the digit
//! extraction works on.
//!
//! Out-of-range values are folded back with a single `%`. Inputs that need
//! more than one wrap are not canonicalized: `lat = 220.712013` lands on
//! `40.712013`, not on its true equivalent. Existing codes depend on this
//! arithmetic, so it must not change.

use tracing::debug;

/// Map a longitude onto `x` in roughly `[0, 360]`.
pub(crate) fn longitude_to_x(lng: f64) -> f64 {
    if lng > 180.0 {
        debug!(lng, "wrapping longitude above 180");
        (lng % 180.0) + 180.0
    } else if lng < -180.0 {
        debug!(lng, "wrapping longitude below -180");
        -((-lng) % 180.0) + 180.0
    } else {
        lng + 180.0
    }
}

/// Map a latitude onto `y` in roughly `[0, 180]`.
pub(crate) fn latitude_to_y(lat: f64) -> f64 {
    if lat > 90.0 {
        debug!(lat, "wrapping latitude above 90");
        (lat % 90.0) + 90.0
    } else if lat < -90.0 {
        debug!(lat, "wrapping latitude below -90");
        -((-lat) % 90.0) + 90.0
    } else {
        lat + 90.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_are_offset() {
        assert_eq!(longitude_to_x(-180.0), 0.0);
        assert_eq!(longitude_to_x(0.0), 180.0);
        assert_eq!(longitude_to_x(180.0), 360.0);
        assert_eq!(latitude_to_y(-90.0), 0.0);
        assert_eq!(latitude_to_y(45.5), 135.5);
    }

    #[test]
    fn test_single_wrap() {
        assert_eq!(longitude_to_x(190.0), 190.0);
        assert_eq!(longitude_to_x(-190.0), 170.0);
        assert_eq!(latitude_to_y(100.0), 100.0);
        assert_eq!(latitude_to_y(-100.0), 80.0);
    }

    #[test]
    fn test_multi_wrap_quirk_is_preserved() {
        // 220 folds to 40 after a single wrap
        assert_eq!(latitude_to_y(220.0), 130.0);
        assert_eq!(latitude_to_y(-220.0), 50.0);
        assert_eq!(longitude_to_x(400.0), 220.0);
    }
}
