// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::context::CheckContext;
use crate::error::CheckResult;
use crate::guard::{violation, Guard};
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::Tier;
use std::any::type_name;

impl<T: Tier> Guard<T> {
    /// Fail with `StateInvalid` unless `holds` accepts the object's state.
    #[inline]
    pub fn state<V>(
        self,
        value: V,
        holds: impl FnOnce(&V) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        self.check(value, holds, FailureKind::StateInvalid, ctx)
    }

    /// Fail with `ObjectDisposed` if `disposed` reports the object as torn
    /// down. Without a name, the failure is labelled with the type name.
    #[inline]
    pub fn not_disposed<V>(
        self,
        value: V,
        disposed: impl FnOnce(&V) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        if !T::enabled() || !disposed(&value) {
            return Ok(value);
        }
        let ctx = ctx.into();
        let ctx = match ctx.subject() {
            Some(_) => ctx,
            None => ctx.value_name(short_name::<V>()),
        };
        Err(violation(FailureKind::ObjectDisposed, ctx, Detail::none()))
    }
}

/// `my_crate::net::Connection<T>` becomes `Connection`.
fn short_name<V>() -> &'static str {
    let full = type_name::<V>().trim_start_matches('&');
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
