// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for absolute URI recognition.
//!
//! Arbitrary text must never panic the recognizer, and the guard must agree
//! with the free predicate on every input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stipulate::{is_absolute_uri, FailureKind, REQUIRE};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let accepted = is_absolute_uri(text);
    match REQUIRE.uri(text, "endpoint") {
        Ok(out) => {
            assert!(accepted);
            assert_eq!(out, text);
        }
        Err(err) => {
            assert!(!accepted);
            assert_eq!(err.kind(), Some(FailureKind::UriInvalid));
        }
    }

    // An accepted URI always carries a scheme followed by ':'.
    if accepted {
        let colon = text.find(':').expect("accepted URI has a scheme separator");
        assert!(colon > 0);
        assert!(text.as_bytes()[0].is_ascii_alphabetic());
    }
});
