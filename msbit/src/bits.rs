// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Isolating the most significant set bit of a `u64` and computing its position.
//!
//! Both operations are built on [smear_right], which copies the highest set bit into every lower
//! position using six shift-or steps. Adding one to the smeared value carries into the position just
//! above the most significant bit, and shifting right once moves it back into place.
//!
//! Example for an 8-bit value:
//! ``` text
//!   x                  = 0b0001_1001
//!   smear_right(x)     = 0b0001_1111
//!   + 1                = 0b0010_0000
//!   >> 1               = 0b0001_0000
//! ```
//!
//! When bit 63 is set the smeared value is all ones and the increment wraps to zero, so
//! [most_significant_bit] returns 0 for those inputs. Use [checked_most_significant_bit] to reject them
//! instead.

use crate::error::{MsbError, MsbResult};

/// Shift amounts used when smearing. Each step doubles the number of ones below the most significant
/// bit, so six steps cover all 64 bits.
const SMEAR_SHIFTS: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// The highest bit of a `u64`. Inputs with this bit set overflow the increment step.
pub const TOP_BIT: u64 = 1 << (u64::BITS - 1);

/// Set every bit below the most significant set bit of `x`. Returns 0 for `x == 0`.
pub const fn smear_right(mut x: u64) -> u64 {
    let mut i = 0;
    while i < SMEAR_SHIFTS.len() {
        x |= x >> SMEAR_SHIFTS[i];
        i += 1;
    }
    x
}

/// Returns a value with only the most significant set bit of `x` set, or 0 if `x == 0`.
///
/// This runs in constant time. If bit 63 of `x` is set, the result is 0 rather than `1 << 63` since the
/// intermediate increment wraps around.
pub const fn most_significant_bit(x: u64) -> u64 {
    smear_right(x).wrapping_add(1) >> 1
}

/// Returns the zero-based position of the most significant set bit of `x`.
///
/// There are two exceptions: `x == 0` returns 0 just like `x == 1`, and any `x` with bit 63 set also
/// returns 0 because [most_significant_bit] returns 0 for it. The isolation step is constant time but
/// counting the position takes up to 63 iterations.
pub const fn position_of_most_significant_bit(x: u64) -> usize {
    let mut isolated = most_significant_bit(x);
    let mut position = 0;
    while isolated > 1 {
        position += 1;
        isolated >>= 1;
    }
    position
}

/// Like [most_significant_bit], but fails with [MsbError::Overflow] if bit 63 of `x` is set.
pub fn checked_most_significant_bit(x: u64) -> MsbResult<u64> {
    if x & TOP_BIT != 0 {
        return Err(MsbError::Overflow);
    }
    Ok(most_significant_bit(x))
}

/// Like [position_of_most_significant_bit], but fails with [MsbError::ZeroInput] if `x == 0` and with
/// [MsbError::Overflow] if bit 63 of `x` is set.
pub fn checked_position_of_most_significant_bit(x: u64) -> MsbResult<usize> {
    if x == 0 {
        return Err(MsbError::ZeroInput);
    }
    checked_most_significant_bit(x).map(position_of_most_significant_bit)
}
