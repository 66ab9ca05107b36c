// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Codec entry points for dynamically typed arguments.

Callers that receive coordinates as JSON (RPC payloads, scripting bridges)
cannot rely on the typed signatures, so these functions repeat the checks
the signatures would otherwise enforce: arity, integer-ness, sign, range,
and float-ness for geographic coordinates. Every rejection is
[`MortonError::InvalidArgument`].
*/

use serde_json::Value;
use tracing::debug;

use crate::error::{MortonError, MortonResult};
use crate::geo::{decode_latlng, encode_latlng, GeoMortonCode};
use crate::interleave::CodeWidth;

fn reject(op: &str, reason: String) -> MortonError {
    debug!(op, %reason, "rejected dynamic argument");
    MortonError::InvalidArgument(format!("{}: {}", op, reason))
}

fn component(op: &str, index: usize, value: &Value) -> MortonResult<u32> {
    let n = value.as_u64().ok_or_else(|| {
        reject(op, format!("argument {} must be a non-negative integer, got {}", index, value))
    })?;
    u32::try_from(n).map_err(|_| reject(op, format!("argument {} ({}) exceeds u32", index, n)))
}

fn components(op: &str, args: &[Value]) -> MortonResult<Vec<u32>> {
    args.iter()
        .enumerate()
        .map(|(i, v)| component(op, i, v))
        .collect()
}

fn code(op: &str, width: CodeWidth, value: &Value) -> MortonResult<u64> {
    let n = value
        .as_u64()
        .ok_or_else(|| reject(op, format!("code must be a non-negative integer, got {}", value)))?;
    if n > width.max_code() {
        return Err(reject(op, format!("code {} does not fit a {}-bit Morton code", n, width)));
    }
    Ok(n)
}

/// `interleave2(x, y)` over JSON arguments.
pub fn interleave2_args(width: CodeWidth, args: &[Value]) -> MortonResult<u64> {
    const OP: &str = "interleave2(x, y)";
    if args.len() != 2 {
        return Err(reject(OP, format!("expected 2 arguments, got {}", args.len())));
    }
    let c = components(OP, args)?;
    Ok(width.interleave2(c[0], c[1]))
}

/// `interleave3(x, y, z)` over JSON arguments.
pub fn interleave3_args(width: CodeWidth, args: &[Value]) -> MortonResult<u64> {
    const OP: &str = "interleave3(x, y, z)";
    if args.len() != 3 {
        return Err(reject(OP, format!("expected 3 arguments, got {}", args.len())));
    }
    let c = components(OP, args)?;
    Ok(width.interleave3(c[0], c[1], c[2]))
}

/// `interleave(x, y[, z])` over JSON arguments.
pub fn interleave_args(width: CodeWidth, args: &[Value]) -> MortonResult<u64> {
    match args.len() {
        2 => interleave2_args(width, args),
        3 => interleave3_args(width, args),
        n => Err(reject(
            "interleave(x, y[, z])",
            format!("expected two or three integers to interleave, got {}", n),
        )),
    }
}

pub fn deinterleave2_arg(width: CodeWidth, value: &Value) -> MortonResult<(u32, u32)> {
    width.deinterleave2(code("deinterleave2(n)", width, value)?)
}

pub fn deinterleave3_arg(width: CodeWidth, value: &Value) -> MortonResult<(u32, u32, u32)> {
    width.deinterleave3(code("deinterleave3(n)", width, value)?)
}

/// `interleave_latlng(lat, lng)` over JSON arguments.
///
/// Both arguments must be JSON floats; an integer literal such as `40` is
/// rejected even though it would convert cleanly.
pub fn interleave_latlng_args(lat: &Value, lng: &Value) -> MortonResult<String> {
    const OP: &str = "interleave_latlng(float, float)";
    let as_float = |name: &str, v: &Value| {
        if v.is_f64() {
            v.as_f64()
                .ok_or_else(|| reject(OP, format!("{} is not representable as f64", name)))
        } else {
            Err(reject(OP, format!("{} must be a float, got {}", name, v)))
        }
    };
    let lat = as_float("latitude", lat)?;
    let lng = as_float("longitude", lng)?;
    encode_latlng(lat, lng).map(|code| code.to_string())
}

/// `deinterleave_latlng(code)` over a JSON argument.
pub fn deinterleave_latlng_arg(value: &Value) -> MortonResult<(f64, f64)> {
    const OP: &str = "deinterleave_latlng(code)";
    let s = value
        .as_str()
        .ok_or_else(|| reject(OP, format!("code must be a string, got {}", value)))?;
    let code: GeoMortonCode = s.parse().map_err(|e: MortonError| reject(OP, e.to_string()))?;
    Ok(decode_latlng(&code))
}
