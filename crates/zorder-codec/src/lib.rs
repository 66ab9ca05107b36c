// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# zorder-codec

Pure Morton (Z-order) codecs:
- Integer bit interleaving for 2 or 3 components, as 32-bit ([`Morton32`])
  and 64-bit ([`Morton64`]) codes
- Fixed-precision latitude/longitude quadrant codes ([`GeoMortonCode`])
- JSON-argument entry points that validate dynamic input ([`args`])

Every function is stateless and safe to call from any thread.
*/

pub mod args;
mod error;
pub mod geo;
pub mod interleave;

pub use error::{MortonError, MortonResult};

pub use interleave::{
    deinterleave2, deinterleave3, interleave, interleave2, interleave3, CodeWidth, Morton32,
    Morton64, MortonCodec, NativeMorton,
};

pub use geo::{
    decode_latlng, deinterleave_latlng, encode_latlng, interleave_latlng, GeoMortonCode, GeoPoint,
    DIVISORS,
};
