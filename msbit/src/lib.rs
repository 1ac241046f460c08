// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

#[cfg(test)]
#[path = "tests/bits_tests.rs"]
pub mod bits_tests;

#[cfg(test)]
#[path = "tests/self_test_tests.rs"]
pub mod self_test_tests;

// Bit operations
pub mod bits;
pub mod self_test;

// Other tooling
pub mod error;

pub use bits::{most_significant_bit, position_of_most_significant_bit};
