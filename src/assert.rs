// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Assertions that fail with a caller-chosen error type.
//!
//! The error type is named at the call site and built through its
//! [`ErrorFactory`] paths. A type that offers none of them for the given
//! arguments yields [`CheckError::Configuration`], never a violation.
//!
//! ```ignore
//! #[derive(Debug, ErrorFactory)]
//! struct QuotaError(String);
//!
//! let used = assert::<u64, QuotaError>(used, |u| *u <= limit, ["quota exceeded"])?;
//! ```

use crate::context::CheckContext;
use crate::error::{CheckError, CheckResult};
use crate::guard::{Guard, REQUIRE};
use crate::kind::FailureKind;
use crate::synthesis::{synthesize, Args, Detail, ErrorFactory, ExceptionSpec};
use crate::tier::Tier;

impl<T: Tier> Guard<T> {
    /// Check `holds`, failing with an `E` built from `args`.
    ///
    /// When `E` has no constructor for `args` exactly, it is built from a
    /// message instead: the context's message, else the arguments' text, else
    /// `"<subject> failed the assertion"`.
    #[inline]
    pub fn assert<V, E: ErrorFactory>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        args: impl Into<Args>,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V, E> {
        if !T::enabled() || holds(&value) {
            return Ok(value);
        }
        Err(custom(ctx.into(), args.into()))
    }

    /// [`assert`](Self::assert) with the message as the only input.
    #[inline]
    pub fn assert_message<V, E: ErrorFactory>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V, E> {
        self.assert(value, holds, (), ctx)
    }

    /// Check `holds` as a built-in `kind`, delivered as `E`.
    ///
    /// `E` adopts the violation when it can (see
    /// [`ErrorFactory::from_violation`]), otherwise it is built from the
    /// rendered message.
    #[inline]
    pub fn check_as<V, E: ErrorFactory>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        kind: FailureKind,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V, E> {
        if !T::enabled() || holds(&value) {
            return Ok(value);
        }
        Err(built_in(kind, ctx.into()))
    }

    /// Check `holds`, failing with whatever `factory` builds from the value.
    ///
    /// No construction paths are involved, so this cannot produce a
    /// configuration error.
    #[inline]
    pub fn ensure_with<V, E>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        factory: impl FnOnce(&V) -> E,
    ) -> Result<V, E> {
        if !T::enabled() || holds(&value) {
            return Ok(value);
        }
        Err(factory(&value))
    }
}

#[cold]
#[inline(never)]
fn custom<E: ErrorFactory>(context: CheckContext, args: Args) -> CheckError<E> {
    synthesize(ExceptionSpec::Custom {
        context: &context,
        args,
    })
}

#[cold]
#[inline(never)]
fn built_in<E: ErrorFactory>(kind: FailureKind, context: CheckContext) -> CheckError<E> {
    synthesize(ExceptionSpec::Kind {
        kind,
        context: &context,
        detail: Detail::none(),
    })
}

/// [`REQUIRE`]`.assert` without a context.
///
/// ```ignore
/// let err = assert::<i32, MyError>(5, |x| *x > 10, ["too small"]).unwrap_err();
/// ```
#[inline]
pub fn assert<V, E: ErrorFactory>(
    value: V,
    holds: impl FnOnce(&V) -> bool,
    args: impl Into<Args>,
) -> CheckResult<V, E> {
    REQUIRE.assert(value, holds, args, ())
}
