// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use msbit::error::{MsbError, MsbResult};

/// Parse a `u64` given in decimal, or in hex or binary with a `0x` or `0b` prefix. Underscores between
/// digits are ignored. Signs are rejected.
pub fn parse_value(value: &str) -> MsbResult<u64> {
    let cleaned = value.trim().replace('_', "");
    let (digits, radix) = if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(bin) = cleaned
        .strip_prefix("0b")
        .or_else(|| cleaned.strip_prefix("0B"))
    {
        (bin, 2)
    } else {
        (cleaned.as_str(), 10)
    };
    if digits.starts_with(|c: char| c == '+' || c == '-') {
        return Err(MsbError::InvalidInput(format!(
            "'{}' is not a valid u64: signs are not allowed",
            value
        )));
    }
    u64::from_str_radix(digits, radix)
        .map_err(|e| MsbError::InvalidInput(format!("'{}' is not a valid u64: {}", value, e)))
}
