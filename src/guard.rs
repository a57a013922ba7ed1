// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Guards: the passthrough surface every check hangs off.
//!
//! A [`Guard`] is a zero-sized handle tagged with a [`Tier`]. Every check on
//! it takes the value by move and hands it back (or a documented narrowing of
//! it) on success, so checks compose inline:
//!
//! ```ignore
//! let port = REQUIRE.between(REQUIRE.not_null(port, "port")?, 1, 65535, "port")?;
//! ```
//!
//! When the guard's tier is off, the condition is not evaluated and the value
//! comes back unvalidated. Narrowing guarantees (non-null, in-range) do not
//! hold in that case; only [`REQUIRE`] can be relied on for them.

use crate::context::CheckContext;
use crate::error::{CheckError, CheckResult};
use crate::kind::FailureKind;
use crate::synthesis::{raise, Detail};
use crate::tier::{
    DebugOnly, Mandatory, ResultDirected, RuntimeOptional, SetterDirected, Tier, TierKind,
};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Zero-sized check handle for tier `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Guard<T: Tier> {
    tier: PhantomData<T>,
}

/// Checks that always run.
pub const REQUIRE: Guard<Mandatory> = Guard::new();
/// Checks compiled in only when debug checks are on.
pub const DEBUG: Guard<DebugOnly> = Guard::new();
/// Checks gated by the runtime-optional flag.
pub const OPTIONAL: Guard<RuntimeOptional> = Guard::new();
/// Return-value checks.
pub const RESULT: Guard<ResultDirected> = Guard::new();
/// Assignment checks.
pub const SETTER: Guard<SetterDirected> = Guard::new();

impl<T: Tier> Guard<T> {
    pub const fn new() -> Self {
        Guard { tier: PhantomData }
    }

    pub fn tier(self) -> TierKind {
        T::KIND
    }

    /// Whether checks on this guard are evaluated right now.
    #[inline]
    pub fn is_active(self) -> bool {
        T::enabled()
    }

    /// Check `value` against `holds`, failing with `kind`.
    ///
    /// This is the shape every condition reduces to.
    #[inline]
    pub fn check<V>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        kind: FailureKind,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        self.check_with(value, holds, kind, ctx, |_| Detail::none())
    }

    /// Like [`check`](Self::check), with a detail computed only on failure.
    #[inline]
    pub fn check_with<V>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        kind: FailureKind,
        ctx: impl Into<CheckContext>,
        detail: impl FnOnce(&V) -> Detail,
    ) -> CheckResult<V> {
        if !T::enabled() || holds(&value) {
            return Ok(value);
        }
        Err(violation(kind, ctx, detail(&value)))
    }

    /// Check with a caller predicate; failures are `ArgumentInvalid`.
    #[inline]
    pub fn satisfies<V>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        self.check(value, holds, FailureKind::ArgumentInvalid, ctx)
    }
}

impl Guard<ResultDirected> {
    /// Validate the return value of a member; failures are `StateInvalid`.
    ///
    /// Pair with [`CheckContext::result_of`] or use `check_result!` to label
    /// the failure with the calling function.
    #[inline]
    pub fn result<V>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        self.check(value, holds, FailureKind::StateInvalid, ctx)
    }
}

impl Guard<SetterDirected> {
    /// Validate a value about to be assigned; failures are `ArgumentInvalid`
    /// and render the rejected value.
    #[inline]
    pub fn assign<V: Debug>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        self.check_with(value, holds, FailureKind::ArgumentInvalid, ctx, |v| {
            Detail::none().with_value(v)
        })
    }
}

/// Build a built-in violation. Kept out of line so the passing path stays
/// small enough to inline.
#[cold]
#[inline(never)]
pub(crate) fn violation(
    kind: FailureKind,
    ctx: impl Into<CheckContext>,
    detail: Detail,
) -> CheckError {
    CheckError::Violation(raise(kind, &ctx.into(), detail))
}

// ============================================================================
// MANDATORY SHORTCUTS
// ============================================================================

/// [`REQUIRE`]`.not_null`: unwrap a present value or fail with `ArgumentNull`.
#[inline]
pub fn not_null<V>(value: Option<V>, ctx: impl Into<CheckContext>) -> CheckResult<V> {
    REQUIRE.not_null(value, ctx)
}

/// [`REQUIRE`]`.index_in_range`: `index < count` or `ArgumentOutOfRange`.
#[inline]
pub fn index_in_range(index: usize, count: usize) -> CheckResult<usize> {
    REQUIRE.index_in_range(index, count, "index")
}

/// [`REQUIRE`]`.all`: every element satisfies `holds`, else `ItemInvalid`.
#[inline]
pub fn all<I>(items: I, holds: impl FnMut(&I::Item) -> bool) -> CheckResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Debug,
{
    REQUIRE.all(items, holds, ())
}
