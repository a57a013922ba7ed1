// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::context::CheckContext;
use crate::error::CheckResult;
use crate::guard::{violation, Guard};
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::{Mandatory, Tier};
use std::any::{type_name, Any};

fn expected<U>() -> Detail {
    Detail::note(format!("expected {}", type_name::<U>()))
}

impl<T: Tier> Guard<T> {
    /// Fail with `TypeMismatch` unless `value` is a `U`. Returns `value`.
    #[inline]
    pub fn instance_of<'a, U: Any>(
        self,
        value: &'a dyn Any,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<&'a dyn Any> {
        self.check_with(
            value,
            |v| v.is::<U>(),
            FailureKind::TypeMismatch,
            ctx,
            |_| expected::<U>(),
        )
    }
}

impl Guard<Mandatory> {
    /// Narrow `value` to `&U`, failing with `TypeMismatch`.
    #[inline]
    pub fn downcast<'a, U: Any>(
        self,
        value: &'a dyn Any,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<&'a U> {
        value
            .downcast_ref::<U>()
            .ok_or_else(|| violation(FailureKind::TypeMismatch, ctx, expected::<U>()))
    }
}
