// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # zorder - Morton (Z-order) codes
//!
//! Maps multidimensional coordinates to a single ordinal while preserving
//! locality, and back:
//! - 2D/3D integer bit interleaving as 32-bit or 64-bit codes
//! - latitude/longitude pairs as 32-digit base-4 quadrant codes
//!
//! ## Feature Flags
//!
//! - **`config`** (default): build a [`Zorder`] from `zorder.toml` plus
//!   `ZORDER_*` environment overrides
//! - **`observability`** (default): tracing subscriber setup driven by the
//!   same configuration
//!
//! ## Usage
//!
//! ```rust
//! use zorder::prelude::*;
//!
//! // Typed entry points: 64-bit codes
//! let code = interleave2(100, 30);
//! assert_eq!(deinterleave2(code), (100, 30));
//! assert!(interleave3(10, 25, 50) < interleave3(10, 25, 100));
//!
//! // Geographic codes
//! let geo = interleave_latlng(40.712014, -74.008164)?;
//! assert_eq!(geo, "03023211232311330231120312032231");
//! assert_eq!(deinterleave_latlng(&geo)?, (40.712014, -74.008164));
//!
//! // Width chosen at runtime
//! let codec = Zorder::new(CodeWidth::Bits32);
//! assert_eq!(codec.deinterleave3(codec.interleave(&[100, 30, 50])?)?, (100, 30, 50));
//! # Ok::<(), MortonError>(())
//! ```

pub use zorder_codec as codec;
pub use zorder_codec::{
    args, decode_latlng, deinterleave2, deinterleave3, deinterleave_latlng, encode_latlng, geo,
    interleave, interleave2, interleave3, interleave_latlng, CodeWidth, GeoMortonCode, GeoPoint,
    Morton32, Morton64, MortonCodec, MortonError, MortonResult, NativeMorton, DIVISORS,
};

#[cfg(feature = "config")]
pub use zorder_config as config;

#[cfg(feature = "observability")]
pub use zorder_observability as observability;

mod facade;

pub use facade::Zorder;

/// Common imports
pub mod prelude {
    pub use crate::Zorder;
    pub use zorder_codec::{
        deinterleave2, deinterleave3, deinterleave_latlng, interleave, interleave2, interleave3,
        interleave_latlng, CodeWidth, GeoMortonCode, GeoPoint, MortonCodec, MortonError,
        MortonResult,
    };
}
