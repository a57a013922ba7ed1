//! The documented end-to-end scenarios, one test each.

use super::common::{is_even, tier_scope, MyError};
use stipulate::{
    all, assert, index_in_range, not_null, set_enabled, CheckError, FailureKind, TierKind,
    OPTIONAL,
};

#[test]
fn test_not_null_rejects_none() {
    let err = not_null(None::<&str>, "x").unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::ArgumentNull));
    assert!(err.to_string().contains('x'));
    assert_eq!(err.violation().unwrap().label(), Some("x"));
}

#[test]
fn test_not_null_unwraps_some() {
    assert_eq!(not_null(Some("abc"), "x").unwrap(), "abc");
}

#[test]
fn test_disabled_optional_not_null_is_noop() {
    let _scope = tier_scope();
    set_enabled(TierKind::RuntimeOptional, false).unwrap();
    assert_eq!(OPTIONAL.not_null(None::<&str>, "x").unwrap(), None);
}

#[test]
fn test_index_out_of_range() {
    let err = index_in_range(5, 3).unwrap_err();
    let violation = err.violation().unwrap();
    assert_eq!(violation.kind(), FailureKind::ArgumentOutOfRange);
    assert_eq!(
        violation.message(),
        "index is out of range: index 5 is not less than count 3"
    );
}

#[test]
fn test_all_even() {
    assert_eq!(all([2, 4, 6], is_even).unwrap(), vec![2, 4, 6]);

    let err = all([2, 3, 6], is_even).unwrap_err();
    let violation = err.violation().unwrap();
    assert_eq!(violation.kind(), FailureKind::ItemInvalid);
    assert_eq!(violation.index(), Some(1));
    assert_eq!(violation.value(), Some("3"));
}

#[test]
fn test_assert_builds_custom_error() {
    let err = assert::<i32, MyError>(5, |x| *x > 10, ["too small"]).unwrap_err();
    assert_eq!(err, CheckError::Violation(MyError("too small".into())));
}
