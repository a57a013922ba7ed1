//! Element-wise checks over single-pass sequences.

use proptest::prelude::*;
use std::cell::Cell;
use stipulate::{FailureKind, REQUIRE};

proptest! {
    /// Property: the predicate runs once per element up to and including the
    /// first failure, the source is never pulled past it, and the reported
    /// index and value are that element's.
    #[test]
    fn prop_single_pass_fail_fast(
        items in prop::collection::vec(0u8..10, 0..40),
        threshold in 0u8..10,
    ) {
        let pulled = Cell::new(0usize);
        let evaluated = Cell::new(0usize);
        let source = items.iter().copied().inspect(|_| pulled.set(pulled.get() + 1));

        let result = REQUIRE.all(
            source,
            |v| {
                evaluated.set(evaluated.get() + 1);
                *v < threshold
            },
            "items",
        );

        match items.iter().position(|v| *v >= threshold) {
            None => {
                prop_assert_eq!(result.unwrap(), items.clone());
                prop_assert_eq!(pulled.get(), items.len());
                prop_assert_eq!(evaluated.get(), items.len());
            }
            Some(first) => {
                let err = result.unwrap_err();
                let violation = err.violation().unwrap();
                prop_assert_eq!(violation.kind(), FailureKind::ItemInvalid);
                prop_assert_eq!(violation.index(), Some(first));
                let expected = items[first].to_string();
                prop_assert_eq!(violation.value(), Some(expected.as_str()));
                prop_assert_eq!(pulled.get(), first + 1);
                prop_assert_eq!(evaluated.get(), first + 1);
            }
        }
    }

    /// Property: the slice form agrees with the iterator form.
    #[test]
    fn prop_slice_and_iterator_agree(items in prop::collection::vec(any::<i16>(), 0..40)) {
        let by_iter = REQUIRE
            .all(items.iter().copied(), |v| *v >= 0, ())
            .map_err(|e| e.violation().and_then(|v| v.index()));
        let by_slice = REQUIRE
            .all_in(&items, |v| *v >= 0, ())
            .map_err(|e| e.violation().and_then(|v| v.index()));
        prop_assert_eq!(by_iter.is_ok(), by_slice.is_ok());
        if let (Err(a), Err(b)) = (by_iter, by_slice) {
            prop_assert_eq!(a, b);
        }
    }

    /// Property: `no_nulls` on REQUIRE unwraps every item or names the first
    /// missing index.
    #[test]
    fn prop_no_nulls(items in prop::collection::vec(prop::option::of(any::<u32>()), 0..30)) {
        match items.iter().position(Option::is_none) {
            None => {
                let expected: Vec<u32> = items.iter().flatten().copied().collect();
                prop_assert_eq!(REQUIRE.no_nulls(items.clone(), "ids").unwrap(), expected);
            }
            Some(first) => {
                let err = REQUIRE.no_nulls(items.clone(), "ids").unwrap_err();
                prop_assert_eq!(err.kind(), Some(FailureKind::ItemNull));
                prop_assert_eq!(err.violation().unwrap().index(), Some(first));
            }
        }
    }
}
