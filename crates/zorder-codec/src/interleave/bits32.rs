// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
32-bit Morton codes: 16 bits per component in 2D, 10 bits per component in 3D.
*/

use super::MortonCodec;

/// Morton codec producing `u32` codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Morton32;

/// Insert one zero bit between each of the low 16 bits.
#[inline]
fn part1by1(n: u32) -> u32 {
    let mut n = n & 0x0000_ffff;
    n = (n | (n << 8)) & 0x00ff_00ff;
    n = (n | (n << 4)) & 0x0f0f_0f0f;
    n = (n | (n << 2)) & 0x3333_3333;
    n = (n | (n << 1)) & 0x5555_5555;
    n
}

/// Insert two zero bits between each of the low 10 bits.
#[inline]
fn part1by2(n: u32) -> u32 {
    let mut n = n & 0x0000_03ff;
    n = (n ^ (n << 16)) & 0xff00_00ff;
    n = (n ^ (n << 8)) & 0x0300_f00f;
    n = (n ^ (n << 4)) & 0x030c_30c3;
    n = (n ^ (n << 2)) & 0x0924_9249;
    n
}

#[inline]
fn unpart1by1(n: u32) -> u32 {
    let mut n = n & 0x5555_5555;
    n = (n ^ (n >> 1)) & 0x3333_3333;
    n = (n ^ (n >> 2)) & 0x0f0f_0f0f;
    n = (n ^ (n >> 4)) & 0x00ff_00ff;
    n = (n ^ (n >> 8)) & 0x0000_ffff;
    n
}

#[inline]
fn unpart1by2(n: u32) -> u32 {
    let mut n = n & 0x0924_9249;
    n = (n ^ (n >> 2)) & 0x030c_30c3;
    n = (n ^ (n >> 4)) & 0x0300_f00f;
    n = (n ^ (n >> 8)) & 0xff00_00ff;
    n = (n ^ (n >> 16)) & 0x0000_03ff;
    n
}

impl MortonCodec for Morton32 {
    type Code = u32;

    const COMPONENT_BITS_2D: u32 = 16;
    const COMPONENT_BITS_3D: u32 = 10;

    #[inline]
    fn interleave2(x: u32, y: u32) -> u32 {
        part1by1(x) | (part1by1(y) << 1)
    }

    #[inline]
    fn interleave3(x: u32, y: u32, z: u32) -> u32 {
        part1by2(x) | (part1by2(y) << 1) | (part1by2(z) << 2)
    }

    #[inline]
    fn deinterleave2(code: u32) -> (u32, u32) {
        (unpart1by1(code), unpart1by1(code >> 1))
    }

    #[inline]
    fn deinterleave3(code: u32) -> (u32, u32, u32) {
        (unpart1by2(code), unpart1by2(code >> 1), unpart1by2(code >> 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part1by1_spreads_bits() {
        assert_eq!(part1by1(0b1111), 0b0101_0101);
        assert_eq!(part1by1(0xffff), 0x5555_5555);
        assert_eq!(unpart1by1(0x5555_5555), 0xffff);
    }

    #[test]
    fn test_part1by2_spreads_bits() {
        assert_eq!(part1by2(0b111), 0b001_001_001);
        assert_eq!(part1by2(0x3ff), 0x0924_9249);
        assert_eq!(unpart1by2(0x0924_9249), 0x3ff);
    }

    #[test]
    fn test_component_bit_positions() {
        // x -> bit 0, y -> bit 1, z -> bit 2
        assert_eq!(Morton32::interleave2(1, 0), 0b01);
        assert_eq!(Morton32::interleave2(0, 1), 0b10);
        assert_eq!(Morton32::interleave3(1, 0, 0), 0b001);
        assert_eq!(Morton32::interleave3(0, 1, 0), 0b010);
        assert_eq!(Morton32::interleave3(0, 0, 1), 0b100);
    }

    #[test]
    fn test_reversible_at_budget_edges() {
        assert_eq!(Morton32::deinterleave2(Morton32::interleave2(0xffff, 0)), (0xffff, 0));
        assert_eq!(
            Morton32::deinterleave3(Morton32::interleave3(1023, 0, 1023)),
            (1023, 0, 1023)
        );
    }

    #[test]
    fn test_oversized_components_are_truncated() {
        // Bits above the 16-bit budget are dropped by the first mask
        assert_eq!(Morton32::interleave2(0x1_0001, 0), Morton32::interleave2(1, 0));
        assert_eq!(Morton32::interleave3(0x400, 0, 0), 0);
    }
}
