//! Passthrough, idempotence and kind fidelity over random inputs.

use super::common::{counting, tier_scope};
use proptest::prelude::*;
use std::cell::Cell;
use stipulate::{set_enabled, FailureKind, TierKind, OPTIONAL, REQUIRE, RESULT, SETTER};

proptest! {
    /// Property: a satisfied range check returns its input unchanged.
    #[test]
    fn prop_in_range_passthrough(low in -1000i64..0, span in 0i64..1000, offset in 0i64..1000) {
        let high = low + span;
        let value = low + offset.min(span);
        prop_assert_eq!(REQUIRE.between(value, low, high, "v").unwrap(), value);
        prop_assert_eq!(REQUIRE.in_range(value, low..=high, "v").unwrap(), value);
    }

    /// Property: a violated range check fails with the documented kind.
    #[test]
    fn prop_out_of_range_kind(low in -1000i64..0, span in 0i64..1000, excess in 1i64..1000) {
        let high = low + span;
        let err = REQUIRE.between(high + excess, low, high, "v").unwrap_err();
        prop_assert_eq!(err.kind(), Some(FailureKind::ValueOutOfRange));
        let err = REQUIRE.index_in_range((span + excess) as usize, span as usize, "i").unwrap_err();
        prop_assert_eq!(err.kind(), Some(FailureKind::ArgumentOutOfRange));
    }

    /// Property: non-blank strings pass through; blank ones are ValueEmpty.
    #[test]
    fn prop_not_blank(text in "[ \t]{0,4}[a-z]{0,6}[ \t]{0,4}") {
        let blank = text.trim().is_empty();
        match REQUIRE.not_blank(text.clone(), "s") {
            Ok(out) => {
                prop_assert!(!blank);
                prop_assert_eq!(out, text);
            }
            Err(err) => {
                prop_assert!(blank);
                prop_assert_eq!(err.kind(), Some(FailureKind::ValueEmpty));
            }
        }
    }

    /// Property: a passing check is idempotent.
    #[test]
    fn prop_idempotent(values in prop::collection::vec(0u32..100, 1..20)) {
        let once = REQUIRE.not_empty(values.clone(), "values").unwrap();
        let twice = REQUIRE.not_empty(once.clone(), "values").unwrap();
        prop_assert_eq!(&once, &values);
        prop_assert_eq!(once, twice);
    }

    /// Property: with its tier off, a check returns the input without ever
    /// calling the predicate, whatever the predicate would have said.
    #[test]
    fn prop_disabled_tiers_are_lazy(value in any::<i32>(), verdict in any::<bool>()) {
        let _scope = tier_scope();
        let runtime_tiers = [
            TierKind::RuntimeOptional,
            TierKind::ResultDirected,
            TierKind::SetterDirected,
        ];
        for tier in runtime_tiers {
            set_enabled(tier, false).unwrap();
        }
        let calls = Cell::new(0);
        prop_assert_eq!(OPTIONAL.satisfies(value, counting(&calls, verdict), "v").unwrap(), value);
        prop_assert_eq!(RESULT.result(value, counting(&calls, verdict), "v").unwrap(), value);
        prop_assert_eq!(SETTER.assign(value, counting(&calls, verdict), "v").unwrap(), value);
        prop_assert_eq!(calls.get(), 0);
    }

    /// Property: with its tier on, the predicate runs exactly once and its
    /// verdict decides the outcome.
    #[test]
    fn prop_enabled_tier_follows_predicate(value in any::<i32>(), verdict in any::<bool>()) {
        let _scope = tier_scope();
        set_enabled(TierKind::RuntimeOptional, true).unwrap();
        let calls = Cell::new(0);
        let out = OPTIONAL.satisfies(value, counting(&calls, verdict), "v");
        prop_assert_eq!(calls.get(), 1);
        prop_assert_eq!(out.is_ok(), verdict);
    }
}
