// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::context::CheckContext;
use crate::error::{CheckError, CheckResult, ConfigurationError};
use crate::guard::Guard;
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::Tier;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::RangeBounds;

impl<T: Tier> Guard<T> {
    /// Fail with `ArgumentOutOfRange` unless `index < count`.
    #[inline]
    pub fn index_in_range(
        self,
        index: usize,
        count: usize,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<usize> {
        self.check_with(
            index,
            |i| *i < count,
            FailureKind::ArgumentOutOfRange,
            ctx,
            |i| Detail::note(format!("index {i} is not less than count {count}")).with_value(i),
        )
    }

    /// Fail with `ValueOutOfRange` unless `range` contains `value`.
    #[inline]
    pub fn in_range<V, R>(self, value: V, range: R, ctx: impl Into<CheckContext>) -> CheckResult<V>
    where
        V: PartialOrd + Debug,
        R: RangeBounds<V> + Debug,
    {
        self.check_with(
            value,
            |v| range.contains(v),
            FailureKind::ValueOutOfRange,
            ctx,
            |v| Detail::note(format!("{v:?} is not within {range:?}")).with_value(v),
        )
    }

    /// Fail with `ValueOutOfRange` unless `low <= value <= high`.
    ///
    /// `low > high` is a configuration error, reported only while the tier
    /// is evaluating.
    #[inline]
    pub fn between<V>(
        self,
        value: V,
        low: V,
        high: V,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V>
    where
        V: PartialOrd + Debug,
    {
        self.within_by(value, &low, &high, |a, b| a.partial_cmp(b), ctx)
    }

    /// Like [`between`](Self::between) with a caller comparison.
    ///
    /// `compare` returning `None` means the values are unordered, which
    /// counts as out of range.
    #[inline]
    pub fn within_by<V: Debug>(
        self,
        value: V,
        low: &V,
        high: &V,
        compare: impl Fn(&V, &V) -> Option<Ordering>,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<V> {
        if !T::enabled() {
            return Ok(value);
        }
        if !matches!(
            compare(low, high),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            return Err(CheckError::Configuration(
                ConfigurationError::InconsistentArguments {
                    reason: format!("lower bound {low:?} is not at most upper bound {high:?}"),
                },
            ));
        }
        self.check_with(
            value,
            |v| {
                matches!(compare(low, v), Some(Ordering::Less | Ordering::Equal))
                    && matches!(compare(v, high), Some(Ordering::Less | Ordering::Equal))
            },
            FailureKind::ValueOutOfRange,
            ctx,
            |v| Detail::note(format!("{v:?} is not between {low:?} and {high:?}")).with_value(v),
        )
    }

    /// Fail with `ArgumentOutOfRange` if `value < V::default()`.
    #[inline]
    pub fn not_negative<V>(self, value: V, ctx: impl Into<CheckContext>) -> CheckResult<V>
    where
        V: PartialOrd + Default + Debug,
    {
        self.check_with(
            value,
            |v| *v >= V::default(),
            FailureKind::ArgumentOutOfRange,
            ctx,
            |v| Detail::note(format!("{v:?} is negative")).with_value(v),
        )
    }

    /// Fail with `ArgumentOutOfRange` unless `value > bound`.
    #[inline]
    pub fn greater_than<V>(self, value: V, bound: V, ctx: impl Into<CheckContext>) -> CheckResult<V>
    where
        V: PartialOrd + Debug,
    {
        self.check_with(
            value,
            |v| *v > bound,
            FailureKind::ArgumentOutOfRange,
            ctx,
            |v| Detail::note(format!("{v:?} is not greater than {bound:?}")).with_value(v),
        )
    }

    /// Fail with `ArgumentOutOfRange` unless `value <= bound`.
    #[inline]
    pub fn at_most<V>(self, value: V, bound: V, ctx: impl Into<CheckContext>) -> CheckResult<V>
    where
        V: PartialOrd + Debug,
    {
        self.check_with(
            value,
            |v| *v <= bound,
            FailureKind::ArgumentOutOfRange,
            ctx,
            |v| Detail::note(format!("{v:?} exceeds {bound:?}")).with_value(v),
        )
    }
}
