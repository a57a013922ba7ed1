// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Enablement tiers: whether a check is evaluated at all.
//!
//! | Tier              | Decided by                              | Mutable |
//! |-------------------|-----------------------------------------|---------|
//! | `Mandatory`       | always on                               | no      |
//! | `DebugOnly`       | [`DEBUG_CHECKS`], fixed by `build.rs`   | no      |
//! | `RuntimeOptional` | process-wide flag                       | yes     |
//! | `ResultDirected`  | process-wide flag                       | yes     |
//! | `SetterDirected`  | process-wide flag                       | yes     |
//!
//! Each tier is also a zero-sized marker type implementing [`Tier`], so a
//! [`Guard`](crate::Guard) knows its tier statically. `DebugOnly::enabled()`
//! returns a `const`, which lets the optimizer delete disabled debug checks
//! outright instead of branching on them.
//!
//! The runtime flags are plain atomics. Reads take no lock; a toggle racing an
//! in-flight check may be observed late by that one call, never torn.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether DebugOnly checks are compiled in. Fixed at build time.
pub const DEBUG_CHECKS: bool = cfg!(stipulate_debug_checks);

static RUNTIME_OPTIONAL: AtomicBool = AtomicBool::new(cfg!(feature = "optional-checks"));
static RESULT_DIRECTED: AtomicBool = AtomicBool::new(cfg!(feature = "result-checks"));
static SETTER_DIRECTED: AtomicBool = AtomicBool::new(cfg!(feature = "setter-checks"));

/// Runtime identity of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    Mandatory,
    DebugOnly,
    RuntimeOptional,
    ResultDirected,
    SetterDirected,
}

impl TierKind {
    pub const ALL: [TierKind; 5] = [
        TierKind::Mandatory,
        TierKind::DebugOnly,
        TierKind::RuntimeOptional,
        TierKind::ResultDirected,
        TierKind::SetterDirected,
    ];

    /// Whether the tier's flag can be changed after process start.
    pub const fn is_mutable(self) -> bool {
        matches!(
            self,
            TierKind::RuntimeOptional | TierKind::ResultDirected | TierKind::SetterDirected
        )
    }

    fn flag(self) -> Option<&'static AtomicBool> {
        match self {
            TierKind::Mandatory | TierKind::DebugOnly => None,
            TierKind::RuntimeOptional => Some(&RUNTIME_OPTIONAL),
            TierKind::ResultDirected => Some(&RESULT_DIRECTED),
            TierKind::SetterDirected => Some(&SETTER_DIRECTED),
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TierKind::Mandatory => "mandatory",
            TierKind::DebugOnly => "debug-only",
            TierKind::RuntimeOptional => "runtime-optional",
            TierKind::ResultDirected => "result-directed",
            TierKind::SetterDirected => "setter-directed",
        })
    }
}

/// Whether checks in `tier` are evaluated right now.
#[inline]
pub fn should_evaluate(tier: TierKind) -> bool {
    match tier {
        TierKind::Mandatory => true,
        TierKind::DebugOnly => DEBUG_CHECKS,
        other => other
            .flag()
            .is_some_and(|flag| flag.load(Ordering::Acquire)),
    }
}

/// Enable or disable a runtime tier, returning its previous value.
///
/// Mandatory and DebugOnly are fixed and reject the toggle.
pub fn set_enabled(tier: TierKind, enabled: bool) -> Result<bool, ConfigurationError> {
    let flag = tier
        .flag()
        .ok_or(ConfigurationError::ImmutableTier { tier })?;
    let previous = flag.swap(enabled, Ordering::AcqRel);
    tracing::debug!(%tier, enabled, previous, "contract tier toggled");
    Ok(previous)
}

/// Set a runtime tier for the lifetime of the returned guard.
///
/// The previous value is restored on drop. Intended for test setup and
/// scoped performance-sensitive sections.
pub fn override_tier(tier: TierKind, enabled: bool) -> Result<TierOverride, ConfigurationError> {
    let previous = set_enabled(tier, enabled)?;
    Ok(TierOverride { tier, previous })
}

/// Restores a tier's previous value when dropped.
#[derive(Debug)]
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct TierOverride {
    tier: TierKind,
    previous: bool,
}

impl TierOverride {
    pub fn tier(&self) -> TierKind {
        self.tier
    }

    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl Drop for TierOverride {
    fn drop(&mut self) {
        if let Some(flag) = self.tier.flag() {
            flag.store(self.previous, Ordering::Release);
        }
    }
}

/// Point-in-time view of every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierSnapshot {
    pub debug_only: bool,
    pub runtime_optional: bool,
    pub result_directed: bool,
    pub setter_directed: bool,
}

impl TierSnapshot {
    pub fn capture() -> Self {
        Self {
            debug_only: DEBUG_CHECKS,
            runtime_optional: should_evaluate(TierKind::RuntimeOptional),
            result_directed: should_evaluate(TierKind::ResultDirected),
            setter_directed: should_evaluate(TierKind::SetterDirected),
        }
    }

    /// Write the runtime flags back. `debug_only` is informational only.
    pub fn restore(&self) {
        RUNTIME_OPTIONAL.store(self.runtime_optional, Ordering::Release);
        RESULT_DIRECTED.store(self.result_directed, Ordering::Release);
        SETTER_DIRECTED.store(self.setter_directed, Ordering::Release);
    }

    pub fn get(&self, tier: TierKind) -> bool {
        match tier {
            TierKind::Mandatory => true,
            TierKind::DebugOnly => self.debug_only,
            TierKind::RuntimeOptional => self.runtime_optional,
            TierKind::ResultDirected => self.result_directed,
            TierKind::SetterDirected => self.setter_directed,
        }
    }
}

/// Static tier of a [`Guard`](crate::Guard).
///
/// `Narrowed<V>` is what an existence check hands back for a present `V`.
/// Only a tier that can never be switched off can promise the null test ran,
/// so only [`Mandatory`] narrows `Option<V>` to `V`; every other tier returns
/// the `Option` untouched.
pub trait Tier: Copy + Default + Send + Sync + 'static {
    const KIND: TierKind;

    type Narrowed<V>;

    fn enabled() -> bool;

    /// `None` only when the value is absent and the tier narrows.
    fn narrow<V>(value: Option<V>) -> Option<Self::Narrowed<V>>;
}

/// Always evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mandatory;

/// Evaluated only when [`DEBUG_CHECKS`] is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugOnly;

/// Evaluated while the runtime-optional flag is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeOptional;

/// Return-value checks, evaluated while the result-directed flag is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultDirected;

/// Assignment checks, evaluated while the setter-directed flag is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetterDirected;

impl Tier for Mandatory {
    const KIND: TierKind = TierKind::Mandatory;
    type Narrowed<V> = V;

    #[inline(always)]
    fn enabled() -> bool {
        true
    }

    #[inline(always)]
    fn narrow<V>(value: Option<V>) -> Option<V> {
        value
    }
}

impl Tier for DebugOnly {
    const KIND: TierKind = TierKind::DebugOnly;
    type Narrowed<V> = Option<V>;

    #[inline(always)]
    fn enabled() -> bool {
        DEBUG_CHECKS
    }

    #[inline(always)]
    fn narrow<V>(value: Option<V>) -> Option<Option<V>> {
        Some(value)
    }
}

macro_rules! runtime_tier {
    ($marker:ty, $kind:expr, $flag:ident) => {
        impl Tier for $marker {
            const KIND: TierKind = $kind;
            type Narrowed<V> = Option<V>;

            #[inline(always)]
            fn enabled() -> bool {
                $flag.load(Ordering::Acquire)
            }

            #[inline(always)]
            fn narrow<V>(value: Option<V>) -> Option<Option<V>> {
                Some(value)
            }
        }
    };
}

runtime_tier!(RuntimeOptional, TierKind::RuntimeOptional, RUNTIME_OPTIONAL);
runtime_tier!(ResultDirected, TierKind::ResultDirected, RESULT_DIRECTED);
runtime_tier!(SetterDirected, TierKind::SetterDirected, SETTER_DIRECTED);
