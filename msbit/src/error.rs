// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors to be used in msbit.
//!
//! The plain bit operations are total and never fail. Errors are only returned by the checked variants,
//! which reject the inputs the plain operations handle ambiguously, and by input parsing.

use thiserror::Error;

pub type MsbResult<T> = Result<T, MsbError>;

/// Collection of errors to be used in msbit.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum MsbError {
    /// The input has no bit set, so it has no most significant bit.
    #[error("Input has no bit set")]
    ZeroInput,

    /// The input has bit 63 set and isolating it overflows.
    #[error("Input has bit 63 set; isolating it overflows 64 bits")]
    Overflow,

    /// Invalid value was given to the function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
