// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed known-answer tests for the operations in [crate::bits].
//!
//! Every case is evaluated even if an earlier one fails, and all mismatches are reported together.

use crate::bits::{most_significant_bit, position_of_most_significant_bit};
use std::fmt;
use tracing::{debug, warn};

/// The operation a [SelfTestCase] checks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// [most_significant_bit]
    Isolate,
    /// [position_of_most_significant_bit]
    Position,
}

/// A single known-answer vector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelfTestCase {
    pub name: &'static str,
    pub operation: Operation,
    pub input: u64,
    pub expected: u64,
}

impl SelfTestCase {
    pub fn evaluate(&self) -> u64 {
        match self.operation {
            Operation::Isolate => most_significant_bit(self.input),
            Operation::Position => position_of_most_significant_bit(self.input) as u64,
        }
    }
}

/// A case whose result did not match the expected value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelfTestFailure {
    pub name: &'static str,
    pub input: u64,
    pub expected: u64,
    pub actual: u64,
}

impl fmt::Display for SelfTestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed for input {}: expected {}, got {}",
            self.name, self.input, self.expected, self.actual
        )
    }
}

pub const SELF_TEST_CASES: [SelfTestCase; 6] = [
    // 0b1100_1011 -> 0b1000_0000
    SelfTestCase {
        name: "isolate_203",
        operation: Operation::Isolate,
        input: 203,
        expected: 128,
    },
    // 0b1101 -> 0b1000
    SelfTestCase {
        name: "isolate_13",
        operation: Operation::Isolate,
        input: 13,
        expected: 8,
    },
    // 0x1BF9_F56C -> 0x1000_0000
    SelfTestCase {
        name: "isolate_469366124",
        operation: Operation::Isolate,
        input: 469366124,
        expected: 268435456,
    },
    SelfTestCase {
        name: "position_203",
        operation: Operation::Position,
        input: 203,
        expected: 7,
    },
    SelfTestCase {
        name: "position_13",
        operation: Operation::Position,
        input: 13,
        expected: 3,
    },
    SelfTestCase {
        name: "position_469366124",
        operation: Operation::Position,
        input: 469366124,
        expected: 28,
    },
];

/// Run all [SELF_TEST_CASES]. Returns the number of passed cases, or every failure if any case failed.
pub fn run_self_test() -> Result<usize, Vec<SelfTestFailure>> {
    run_cases(&SELF_TEST_CASES)
}

pub(crate) fn run_cases(cases: &[SelfTestCase]) -> Result<usize, Vec<SelfTestFailure>> {
    let failures: Vec<SelfTestFailure> = cases
        .iter()
        .filter_map(|case| {
            let actual = case.evaluate();
            debug!(
                "Self-test {}: input {} expected {} got {}",
                case.name, case.input, case.expected, actual
            );
            if actual == case.expected {
                return None;
            }
            warn!("Self-test {} failed", case.name);
            Some(SelfTestFailure {
                name: case.name,
                input: case.input,
                expected: case.expected,
                actual,
            })
        })
        .collect();

    if failures.is_empty() {
        Ok(cases.len())
    } else {
        Err(failures)
    }
}
