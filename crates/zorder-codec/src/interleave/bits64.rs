// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
64-bit Morton codes: 32 bits per component in 2D, 21 bits per component in 3D.
*/

use super::MortonCodec;

/// Morton codec producing `u64` codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Morton64;

#[inline]
fn part1by1(n: u64) -> u64 {
    let mut n = n & 0x0000_0000_ffff_ffff;
    n = (n | (n << 16)) & 0x0000_ffff_0000_ffff;
    n = (n | (n << 8)) & 0x00ff_00ff_00ff_00ff;
    n = (n | (n << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    n = (n | (n << 2)) & 0x3333_3333_3333_3333;
    n = (n | (n << 1)) & 0x5555_5555_5555_5555;
    n
}

#[inline]
fn part1by2(n: u64) -> u64 {
    let mut n = n & 0x1f_ffff;
    n = (n ^ (n << 32)) & 0x001f_0000_0000_ffff;
    n = (n ^ (n << 16)) & 0x001f_0000_ff00_00ff;
    n = (n ^ (n << 8)) & 0x100f_00f0_0f00_f00f;
    n = (n ^ (n << 4)) & 0x10c3_0c30_c30c_30c3;
    n = (n ^ (n << 2)) & 0x1249_2492_4924_9249;
    n
}

#[inline]
fn unpart1by1(n: u64) -> u64 {
    let mut n = n & 0x5555_5555_5555_5555;
    n = (n ^ (n >> 1)) & 0x3333_3333_3333_3333;
    n = (n ^ (n >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    n = (n ^ (n >> 4)) & 0x00ff_00ff_00ff_00ff;
    n = (n ^ (n >> 8)) & 0x0000_ffff_0000_ffff;
    n = (n ^ (n >> 16)) & 0x0000_0000_ffff_ffff;
    n
}

#[inline]
fn unpart1by2(n: u64) -> u64 {
    let mut n = n & 0x1249_2492_4924_9249;
    n = (n ^ (n >> 2)) & 0x10c3_0c30_c30c_30c3;
    n = (n ^ (n >> 4)) & 0x100f_00f0_0f00_f00f;
    n = (n ^ (n >> 8)) & 0x001f_0000_ff00_00ff;
    n = (n ^ (n >> 16)) & 0x001f_0000_0000_ffff;
    n = (n ^ (n >> 32)) & 0x1f_ffff;
    n
}

impl MortonCodec for Morton64 {
    type Code = u64;

    const COMPONENT_BITS_2D: u32 = 32;
    const COMPONENT_BITS_3D: u32 = 21;

    #[inline]
    fn interleave2(x: u32, y: u32) -> u64 {
        part1by1(x as u64) | (part1by1(y as u64) << 1)
    }

    #[inline]
    fn interleave3(x: u32, y: u32, z: u32) -> u64 {
        part1by2(x as u64) | (part1by2(y as u64) << 1) | (part1by2(z as u64) << 2)
    }

    // Compacted values fit in 32 (2D) and 21 (3D) bits, so the casts are lossless
    #[inline]
    fn deinterleave2(code: u64) -> (u32, u32) {
        (unpart1by1(code) as u32, unpart1by1(code >> 1) as u32)
    }

    #[inline]
    fn deinterleave3(code: u64) -> (u32, u32, u32) {
        (
            unpart1by2(code) as u32,
            unpart1by2(code >> 1) as u32,
            unpart1by2(code >> 2) as u32,
        )
    }
}
