// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for element-wise checks.
//!
//! `all` must pull its source exactly up to the first failing element and
//! report that element's index. `all_in` must agree with it on slices.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::cell::Cell;
use stipulate::{FailureKind, REQUIRE};

#[derive(Debug, arbitrary::Arbitrary)]
struct ElementInput {
    items: Vec<u8>,
    threshold: u8,
}

fuzz_target!(|input: ElementInput| {
    let threshold = input.threshold;
    let pulled = Cell::new(0usize);
    let source = input
        .items
        .iter()
        .copied()
        .inspect(|_| pulled.set(pulled.get() + 1));

    let by_iter = REQUIRE.all(source, |v| *v < threshold, "items");
    let by_slice = REQUIRE.all_in(&input.items, |v| *v < threshold, "items");

    match input.items.iter().position(|v| *v >= threshold) {
        None => {
            assert_eq!(by_iter.ok().as_deref(), Some(input.items.as_slice()));
            assert!(by_slice.is_ok());
            assert_eq!(pulled.get(), input.items.len());
        }
        Some(first) => {
            assert_eq!(pulled.get(), first + 1, "source pulled past the first failure");
            for err in [by_iter.err(), by_slice.err()] {
                let err = err.expect("failing element must be reported");
                let violation = err.violation().expect("built-in check yields a violation");
                assert_eq!(violation.kind(), FailureKind::ItemInvalid);
                assert_eq!(violation.index(), Some(first));
            }
        }
    }
});
