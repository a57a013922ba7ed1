// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::context::CheckContext;
use crate::error::CheckResult;
use crate::guard::Guard;
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::Tier;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Anything with a notion of emptiness.
///
/// Text reports `ValueEmpty`; collections report `CollectionEmpty`.
pub trait Measured {
    const EMPTY_KIND: FailureKind;

    fn is_empty_value(&self) -> bool;
}

impl Measured for str {
    const EMPTY_KIND: FailureKind = FailureKind::ValueEmpty;

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Measured for String {
    const EMPTY_KIND: FailureKind = FailureKind::ValueEmpty;

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Measured for [T] {
    const EMPTY_KIND: FailureKind = FailureKind::CollectionEmpty;

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Measured for [T; N] {
    const EMPTY_KIND: FailureKind = FailureKind::CollectionEmpty;

    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<M: Measured + ?Sized> Measured for &M {
    const EMPTY_KIND: FailureKind = M::EMPTY_KIND;

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<M: Measured + ?Sized> Measured for Box<M> {
    const EMPTY_KIND: FailureKind = M::EMPTY_KIND;

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

macro_rules! measured_collection {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {$(
        impl<$($param),+> Measured for $ty<$($param),+> {
            const EMPTY_KIND: FailureKind = FailureKind::CollectionEmpty;

            fn is_empty_value(&self) -> bool {
                self.is_empty()
            }
        }
    )*};
}

measured_collection!(
    Vec<T>,
    VecDeque<T>,
    HashMap<K, V, S>,
    HashSet<T, S>,
    BTreeMap<K, V>,
    BTreeSet<T>,
);

impl<T: Tier> Guard<T> {
    /// Fail if `value` is empty: `ValueEmpty` for text, `CollectionEmpty`
    /// for collections.
    #[inline]
    pub fn not_empty<V: Measured>(self, value: V, ctx: impl Into<CheckContext>) -> CheckResult<V> {
        self.check(value, |v| !v.is_empty_value(), V::EMPTY_KIND, ctx)
    }

    /// Fail with `ValueEmpty` if `value` is empty or only whitespace.
    #[inline]
    pub fn not_blank<S: AsRef<str>>(
        self,
        value: S,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<S> {
        self.check_with(
            value,
            |s| !s.as_ref().trim().is_empty(),
            FailureKind::ValueEmpty,
            ctx,
            |s| {
                if s.as_ref().is_empty() {
                    Detail::none()
                } else {
                    Detail::note("contains only whitespace")
                }
            },
        )
    }
}
