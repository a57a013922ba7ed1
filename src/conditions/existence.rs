// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::context::CheckContext;
use crate::error::CheckResult;
use crate::guard::{violation, Guard};
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::Tier;

impl<T: Tier> Guard<T> {
    /// Fail with `ArgumentNull` if `value` is `None`.
    ///
    /// Returns `T::Narrowed<V>`: the unwrapped `V` on [`REQUIRE`](crate::REQUIRE),
    /// the original `Option<V>` on every other tier, where a disabled tier
    /// hands `None` straight back.
    #[inline]
    pub fn not_null<V>(
        self,
        value: Option<V>,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<T::Narrowed<V>> {
        let absent = T::enabled() && value.is_none();
        match T::narrow(value) {
            Some(narrowed) if !absent => Ok(narrowed),
            _ => Err(violation(
                FailureKind::ArgumentNull,
                ctx,
                Detail::none().with_note("found None"),
            )),
        }
    }

    /// Fail with `ArgumentInvalid` if `value` equals `V::default()`.
    #[inline]
    pub fn not_default<V: Default + PartialEq>(
        self,
        value: V,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        self.check_with(
            value,
            |v| *v != V::default(),
            FailureKind::ArgumentInvalid,
            ctx,
            |_| Detail::note("must not be the default value"),
        )
    }
}
