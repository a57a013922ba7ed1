// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Element-wise checks.
//!
//! The input is pulled exactly once, in order. The first failing element
//! stops the walk: nothing after it is pulled, nothing before it is re-read.
//! Single-pass iterators (readers, channels, generators) are safe to pass.

use crate::context::CheckContext;
use crate::error::CheckResult;
use crate::guard::{violation, Guard};
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::Tier;
use std::fmt::Debug;

impl<T: Tier> Guard<T> {
    /// Fail with `ItemInvalid` at the first element that does not satisfy
    /// `holds`.
    ///
    /// The sequence is materialized into a `Vec` as it is walked. With the
    /// tier off it is still collected, but `holds` is never called.
    pub fn all<I>(
        self,
        items: I,
        mut holds: impl FnMut(&I::Item) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<Vec<I::Item>>
    where
        I: IntoIterator,
        I::Item: Debug,
    {
        let iter = items.into_iter();
        if !T::enabled() {
            return Ok(iter.collect());
        }
        let mut seen = Vec::with_capacity(iter.size_hint().0);
        for (index, item) in iter.enumerate() {
            if !holds(&item) {
                return Err(violation(
                    FailureKind::ItemInvalid,
                    ctx,
                    Detail::element(index, &item).with_note(format!(
                        "item at index {index} ({item:?}) failed the condition"
                    )),
                ));
            }
            seen.push(item);
        }
        Ok(seen)
    }

    /// Slice form of [`all`](Self::all); nothing is copied.
    pub fn all_in<'a, V: Debug>(
        self,
        items: &'a [V],
        mut holds: impl FnMut(&V) -> bool,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<&'a [V]> {
        if !T::enabled() {
            return Ok(items);
        }
        match items.iter().position(|item| !holds(item)) {
            None => Ok(items),
            Some(index) => Err(violation(
                FailureKind::ItemInvalid,
                ctx,
                Detail::element(index, &items[index]).with_note(format!(
                    "item at index {index} ({:?}) failed the condition",
                    items[index]
                )),
            )),
        }
    }

    /// Fail with `ItemNull` at the first `None`.
    ///
    /// Items are narrowed the same way [`not_null`](Self::not_null) narrows:
    /// `Vec<V>` on [`REQUIRE`](crate::REQUIRE), `Vec<Option<V>>` elsewhere.
    pub fn no_nulls<I, V>(
        self,
        items: I,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<Vec<T::Narrowed<V>>>
    where
        I: IntoIterator<Item = Option<V>>,
    {
        let enabled = T::enabled();
        let iter = items.into_iter();
        let mut seen = Vec::with_capacity(iter.size_hint().0);
        for (index, item) in iter.enumerate() {
            let absent = enabled && item.is_none();
            match T::narrow(item) {
                Some(narrowed) if !absent => seen.push(narrowed),
                _ => {
                    return Err(violation(
                        FailureKind::ItemNull,
                        ctx,
                        Detail::element(index, &None::<()>)
                            .with_note(format!("item at index {index} is None")),
                    ))
                }
            }
        }
        Ok(seen)
    }
}
