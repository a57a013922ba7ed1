// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The exception-synthesis engine.
//!
//! Turns a failed check into an error value. Two kinds of request:
//!
//! 1. **Built-in kind** ([`ExceptionSpec::Kind`]): render the kind's template
//!    with the subject label, append the check's detail, or use the caller's
//!    message verbatim if one was given.
//! 2. **Caller-chosen type** ([`ExceptionSpec::Custom`]): try the type's
//!    construction paths in a fixed order, first match wins:
//!
//!    | Order | Path                          | Input                      |
//!    |-------|-------------------------------|----------------------------|
//!    | 1     | `from_args`                   | exact positional arguments |
//!    | 2     | `from_message`                | message                    |
//!    | 3     | `from_message_without_cause`  | message, empty cause       |
//!    | 4     | `bare`                        | nothing                    |
//!
//!    If nothing matches, the result is a [`ConfigurationError`], never a
//!    violation: the check was set up with an error type it cannot build.
//!
//! Paths 2-4 receive the context's explicit message when there is one,
//! otherwise the message carried by the arguments, otherwise
//! `"<subject> failed the assertion"`.
//!
//! A built-in kind requested with a caller-chosen type goes through
//! `from_violation` first and then paths 2-4 with the rendered message.

mod args;
mod factory;

pub use args::{Arg, Args, FromArg};
pub use factory::ErrorFactory;

use crate::context::CheckContext;
use crate::error::{CheckError, ConfigurationError, ContractViolation};
use crate::kind::FailureKind;
use std::any::type_name;
use std::fmt::Debug;

/// Subject used when neither a value name nor a caller label is available.
const ANONYMOUS_SUBJECT: &str = "value";

/// Default message for caller-typed assertions without an explicit message.
const ASSERTION_TEMPLATE: &str = "{} failed the assertion";

/// Check-specific facts attached to a violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detail {
    index: Option<usize>,
    value: Option<String>,
    note: Option<String>,
}

impl Detail {
    pub const fn none() -> Self {
        Detail {
            index: None,
            value: None,
            note: None,
        }
    }

    pub fn note(note: impl Into<String>) -> Self {
        Detail {
            note: Some(note.into()),
            ..Detail::none()
        }
    }

    /// The offending element of an element-wise check.
    pub fn element(index: usize, value: &impl Debug) -> Self {
        Detail {
            index: Some(index),
            value: Some(format!("{value:?}")),
            note: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: &impl Debug) -> Self {
        self.value = Some(format!("{value:?}"));
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// What to synthesize.
#[derive(Debug, Clone)]
pub enum ExceptionSpec<'a> {
    /// A built-in failure kind.
    Kind {
        kind: FailureKind,
        context: &'a CheckContext,
        detail: Detail,
    },
    /// A caller-chosen error type built from arguments or the context message.
    Custom {
        context: &'a CheckContext,
        args: Args,
    },
}

/// Build the violation for a built-in kind.
pub fn raise(kind: FailureKind, context: &CheckContext, detail: Detail) -> ContractViolation {
    let label = context.subject().map(|s| s.into_owned());
    let message = match context.message_override() {
        Some(message) => message.to_owned(),
        None => default_message(kind, context, label.as_deref(), &detail),
    };
    tracing::trace!(%kind, label = label.as_deref(), "contract violated");
    ContractViolation::new(kind, label, message, detail.index, detail.value)
}

fn default_message(
    kind: FailureKind,
    context: &CheckContext,
    label: Option<&str>,
    detail: &Detail,
) -> String {
    let mut message = match context.assignment_member() {
        Some(member) => match &detail.value {
            Some(value) => format!(
                "attempt to assign {value} to {member}: {}",
                kind.render(ANONYMOUS_SUBJECT)
            ),
            None => format!(
                "invalid assignment to {member}: {}",
                kind.render(ANONYMOUS_SUBJECT)
            ),
        },
        None => kind.render(label.unwrap_or(ANONYMOUS_SUBJECT)),
    };
    if let Some(note) = &detail.note {
        message.push_str(": ");
        message.push_str(note);
    }
    message
}

/// Build the error described by `spec` as type `E`.
///
/// Always yields an error: a violation of type `E` when a construction path
/// matched, otherwise a configuration error naming `E`.
pub fn synthesize<E: ErrorFactory>(spec: ExceptionSpec<'_>) -> CheckError<E> {
    match spec {
        ExceptionSpec::Kind {
            kind,
            context,
            detail,
        } => match E::from_violation(raise(kind, context, detail)) {
            Ok(err) => CheckError::Violation(err),
            Err(violation) => from_message_paths::<E>(violation.message(), 0),
        },
        ExceptionSpec::Custom { context, args } => {
            if !args.is_empty() {
                if let Some(err) = E::from_args(&args) {
                    return CheckError::Violation(err);
                }
            }
            let message = match context.message_override() {
                Some(message) => message.to_owned(),
                None => args_message(&args).unwrap_or_else(|| {
                    let subject = context.subject();
                    ASSERTION_TEMPLATE
                        .replacen("{}", subject.as_deref().unwrap_or(ANONYMOUS_SUBJECT), 1)
                }),
            };
            from_message_paths::<E>(&message, args.len())
        }
    }
}

/// The message carried by the arguments themselves: a lone string verbatim,
/// anything else joined by its `Display` form.
fn args_message(args: &Args) -> Option<String> {
    match args.len() {
        0 => None,
        1 => args.get(0).map(|arg| match arg.as_str() {
            Some(text) => text.to_owned(),
            None => arg.to_string(),
        }),
        _ => Some(
            args.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

fn from_message_paths<E: ErrorFactory>(message: &str, arity: usize) -> CheckError<E> {
    let built = E::from_message(message)
        .or_else(|| E::from_message_without_cause(message))
        .or_else(E::bare);
    match built {
        Some(err) => CheckError::Violation(err),
        None => {
            let type_name = type_name::<E>();
            tracing::warn!(type_name, arity, "no construction path for error type");
            CheckError::Configuration(ConfigurationError::NoConstructionPath {
                type_name,
                message: message.to_owned(),
                arity,
            })
        }
    }
}
