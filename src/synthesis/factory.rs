// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction paths for caller-chosen error types.
//!
//! The engine never discovers constructors at runtime. An error type states
//! which paths it supports by implementing [`ErrorFactory`], either by hand or
//! with `#[derive(ErrorFactory)]`, which reads the paths off the struct shape
//! at compile time:
//!
//! | Struct shape                                   | Path                          |
//! |------------------------------------------------|-------------------------------|
//! | unit struct                                    | `bare`                        |
//! | one `String` field                             | `from_message`, `from_args`   |
//! | `String` message + `Option<_>` cause field     | `from_message_without_cause`  |
//! | fields of argument types (`String`, ints, ...) | `from_args`                   |
//!
//! Every method defaults to "not supported".

use super::args::Args;
use crate::error::ContractViolation;
use crate::kind::FailureKind;
use std::error::Error;
use std::io;

pub trait ErrorFactory: Sized {
    /// Adopt a built-in violation as-is. Handing it back means "not supported".
    fn from_violation(violation: ContractViolation) -> Result<Self, ContractViolation> {
        Err(violation)
    }

    /// Construct from the exact positional argument list.
    fn from_args(args: &Args) -> Option<Self> {
        let _ = args;
        None
    }

    /// Construct from a single message.
    fn from_message(message: &str) -> Option<Self> {
        let _ = message;
        None
    }

    /// Construct from a message with the inner-cause slot left empty.
    fn from_message_without_cause(message: &str) -> Option<Self> {
        let _ = message;
        None
    }

    /// Construct with no arguments.
    fn bare() -> Option<Self> {
        None
    }
}

impl ErrorFactory for ContractViolation {
    fn from_violation(violation: ContractViolation) -> Result<Self, ContractViolation> {
        Ok(violation)
    }

    fn from_message(message: &str) -> Option<Self> {
        Some(ContractViolation::new(
            FailureKind::ArgumentInvalid,
            None,
            message.to_owned(),
            None,
            None,
        ))
    }
}

impl ErrorFactory for String {
    fn from_message(message: &str) -> Option<Self> {
        Some(message.to_owned())
    }
}

impl ErrorFactory for io::Error {
    fn from_message(message: &str) -> Option<Self> {
        Some(io::Error::new(io::ErrorKind::InvalidInput, message.to_owned()))
    }
}

impl ErrorFactory for Box<dyn Error + Send + Sync> {
    fn from_message(message: &str) -> Option<Self> {
        Some(message.into())
    }
}
