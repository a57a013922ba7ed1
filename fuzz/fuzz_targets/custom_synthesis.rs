// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for custom error synthesis.
//!
//! Whatever arguments a failing assertion carries, synthesis must either
//! build the error through a path whose shape fits or report a configuration
//! error. It must never panic and never build through the wrong arity.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stipulate::{Arg, Args, CheckError, ErrorFactory, REQUIRE};

#[derive(Debug, arbitrary::Arbitrary)]
enum FuzzArg {
    Text(String),
    Int(i64),
    Flag(bool),
}

#[derive(Debug, PartialEq)]
enum Built {
    Pair(String, i64),
    Message(String),
}

impl ErrorFactory for Built {
    fn from_args(args: &Args) -> Option<Self> {
        if args.len() != 2 {
            return None;
        }
        Some(Built::Pair(args.take(0)?, args.take(1)?))
    }

    fn from_message(message: &str) -> Option<Self> {
        Some(Built::Message(message.to_owned()))
    }
}

#[derive(Debug)]
struct Unbuildable;

impl ErrorFactory for Unbuildable {}

fuzz_target!(|input: (Vec<FuzzArg>, String)| {
    let (raw, label) = input;
    let args: Args = raw
        .iter()
        .map(|arg| -> Arg {
            match arg {
                FuzzArg::Text(s) => s.as_str().into(),
                FuzzArg::Int(n) => (*n).into(),
                FuzzArg::Flag(b) => (*b).into(),
            }
        })
        .collect();

    match REQUIRE.assert::<_, Built>((), |_| false, args.clone(), label.as_str()) {
        Err(CheckError::Violation(Built::Pair(text, n))) => {
            assert_eq!(args.len(), 2);
            assert_eq!(args.take::<String>(0).as_deref(), Some(text.as_str()));
            assert_eq!(args.take::<i64>(1), Some(n));
        }
        Err(CheckError::Violation(Built::Message(_))) => {}
        other => panic!("unexpected outcome: {other:?}"),
    }

    let outcome = REQUIRE.assert::<_, Unbuildable>((), |_| false, args, label.as_str());
    assert!(matches!(outcome, Err(CheckError::Configuration(_))));
});
