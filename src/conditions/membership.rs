// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::context::CheckContext;
use crate::error::CheckResult;
use crate::guard::{violation, Guard};
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::{Mandatory, Tier};
use std::any::type_name;
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// A collection that can answer "is this key present?".
pub trait Keyed<Q: ?Sized> {
    fn has_key(&self, key: &Q) -> bool;
}

impl<K, V, S, Q> Keyed<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<K, V, Q> Keyed<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<T, S, Q> Keyed<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains(key)
    }
}

impl<T, Q> Keyed<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains(key)
    }
}

impl<M: Keyed<Q> + ?Sized, Q: ?Sized> Keyed<Q> for &M {
    fn has_key(&self, key: &Q) -> bool {
        (**self).has_key(key)
    }
}

/// Last path segment of a type name, without generics.
fn short_type_name<E>() -> &'static str {
    let full = type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<T: Tier> Guard<T> {
    /// Fail with `EnumInvalid` unless `raw` converts into a defined `E`.
    ///
    /// Returns `raw` itself; use [`Guard::enum_value`] on [`REQUIRE`](crate::REQUIRE)
    /// to get the converted variant.
    #[inline]
    pub fn enum_defined<E, R>(self, raw: R, ctx: impl Into<CheckContext>) -> CheckResult<R>
    where
        E: TryFrom<R>,
        R: Copy + Debug,
    {
        self.check_with(
            raw,
            |r| E::try_from(*r).is_ok(),
            FailureKind::EnumInvalid,
            ctx,
            |r| {
                Detail::note(format!("{r:?} is not a defined {}", short_type_name::<E>()))
                    .with_value(r)
            },
        )
    }

    /// Fail with `KeyNotFound` unless `map` contains `key`. Returns `map`.
    #[inline]
    pub fn contains_key<M, Q>(self, map: M, key: &Q, ctx: impl Into<CheckContext>) -> CheckResult<M>
    where
        M: Keyed<Q>,
        Q: Debug + ?Sized,
    {
        self.check_with(
            map,
            |m| m.has_key(key),
            FailureKind::KeyNotFound,
            ctx,
            |_| Detail::note(format!("key {key:?} is not present")).with_value(&key),
        )
    }
}

impl Guard<Mandatory> {
    /// Convert `raw` into `E`, failing with `EnumInvalid`.
    #[inline]
    pub fn enum_value<E, R>(self, raw: R, ctx: impl Into<CheckContext>) -> CheckResult<E>
    where
        E: TryFrom<R>,
        R: Copy + Debug,
    {
        E::try_from(raw).map_err(|_| {
            violation(
                FailureKind::EnumInvalid,
                ctx,
                Detail::note(format!("{raw:?} is not a defined {}", short_type_name::<E>()))
                    .with_value(&raw),
            )
        })
    }
}
