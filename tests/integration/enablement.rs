//! Tier toggling: laziness when off, independence between tiers, and
//! restoring state.

use super::common::{counting, tier_scope};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use stipulate::{
    override_tier, set_enabled, should_evaluate, ConfigurationError, FailureKind, TierKind,
    TierSnapshot, DEBUG, DEBUG_CHECKS, OPTIONAL, REQUIRE, RESULT, SETTER,
};

const RUNTIME: [TierKind; 3] = [
    TierKind::RuntimeOptional,
    TierKind::ResultDirected,
    TierKind::SetterDirected,
];

#[test]
fn test_disabled_tier_never_calls_predicate() {
    let _scope = tier_scope();
    for tier in RUNTIME {
        set_enabled(tier, false).unwrap();
    }

    let calls = Cell::new(0);
    assert_eq!(OPTIONAL.satisfies(5, counting(&calls, false), "x").unwrap(), 5);
    assert_eq!(RESULT.result(5, counting(&calls, false), "x").unwrap(), 5);
    assert_eq!(SETTER.assign(5, counting(&calls, false), "x").unwrap(), 5);
    assert_eq!(
        OPTIONAL.all(vec![1, 2, 3], counting(&calls, false), "xs").unwrap(),
        vec![1, 2, 3]
    );
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_enabled_tier_evaluates_once() {
    let _scope = tier_scope();
    set_enabled(TierKind::RuntimeOptional, true).unwrap();

    let calls = Cell::new(0);
    let err = OPTIONAL.satisfies(5, counting(&calls, false), "x").unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::ArgumentInvalid));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_disabled_not_null_returns_none() {
    let _scope = tier_scope();
    set_enabled(TierKind::RuntimeOptional, false).unwrap();
    assert_eq!(OPTIONAL.not_null(None::<&str>, "x").unwrap(), None);
    assert_eq!(OPTIONAL.no_nulls([Some(1), None], "xs").unwrap(), vec![Some(1), None]);

    set_enabled(TierKind::RuntimeOptional, true).unwrap();
    assert_eq!(OPTIONAL.not_null(Some("abc"), "x").unwrap(), Some("abc"));
    let err = OPTIONAL.not_null(None::<&str>, "x").unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::ArgumentNull));
}

#[test]
fn test_tiers_toggle_independently() {
    let _scope = tier_scope();
    for tier in RUNTIME {
        set_enabled(tier, true).unwrap();
    }

    set_enabled(TierKind::ResultDirected, false).unwrap();
    assert!(should_evaluate(TierKind::RuntimeOptional));
    assert!(!should_evaluate(TierKind::ResultDirected));
    assert!(should_evaluate(TierKind::SetterDirected));

    assert!(OPTIONAL.satisfies(1, |v| *v > 1, "x").is_err());
    assert!(RESULT.result(1, |v| *v > 1, "x").is_ok());
    assert!(SETTER.assign(1, |v| *v > 1, "x").is_err());
}

#[test]
fn test_set_enabled_returns_previous() {
    let _scope = tier_scope();
    set_enabled(TierKind::SetterDirected, true).unwrap();
    assert_eq!(set_enabled(TierKind::SetterDirected, false), Ok(true));
    assert_eq!(set_enabled(TierKind::SetterDirected, false), Ok(false));
}

#[test]
fn test_override_restores_on_drop() {
    let _scope = tier_scope();
    set_enabled(TierKind::RuntimeOptional, true).unwrap();
    {
        let guard = override_tier(TierKind::RuntimeOptional, false).unwrap();
        assert!(guard.previous());
        assert!(!OPTIONAL.is_active());
    }
    assert!(OPTIONAL.is_active());
}

#[test]
fn test_snapshot_round_trip() {
    let _scope = tier_scope();
    let before = TierSnapshot::capture();
    for tier in RUNTIME {
        set_enabled(tier, !before.get(tier)).unwrap();
    }
    assert_ne!(TierSnapshot::capture(), before);
    before.restore();
    assert_eq!(TierSnapshot::capture(), before);
}

#[test]
fn test_fixed_tiers() {
    assert!(REQUIRE.is_active());
    assert_eq!(DEBUG.is_active(), DEBUG_CHECKS);
    assert_eq!(
        set_enabled(TierKind::DebugOnly, !DEBUG_CHECKS),
        Err(ConfigurationError::ImmutableTier {
            tier: TierKind::DebugOnly
        })
    );
    assert_eq!(DEBUG.is_active(), DEBUG_CHECKS);
}

#[test]
fn test_toggles_race_with_readers_safely() {
    let _scope = tier_scope();
    let evaluated = AtomicUsize::new(0);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for i in 0..2_000 {
                    let out = OPTIONAL.satisfies(
                        i,
                        |_| {
                            evaluated.fetch_add(1, Ordering::Relaxed);
                            true
                        },
                        "i",
                    );
                    assert_eq!(out.unwrap(), i);
                }
            });
        }
        s.spawn(|| {
            for i in 0..500 {
                set_enabled(TierKind::RuntimeOptional, i % 2 == 0).unwrap();
            }
        });
    });

    assert!(evaluated.load(Ordering::Relaxed) <= 8_000);
}
