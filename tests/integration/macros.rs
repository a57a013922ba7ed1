//! `#[derive(ErrorFactory)]`, `#[ensures]`, `#[setter]` and the declarative
//! caller-label macros.

use super::common::tier_scope;
use std::error::Error;
use stipulate::{
    assert, check_assign, check_result, ensures, set_enabled, setter, CheckError, CheckResult,
    ErrorFactory, FailureKind, TierKind, REQUIRE,
};

#[derive(Debug, PartialEq, ErrorFactory)]
struct QuotaError(String);

#[derive(Debug, PartialEq, ErrorFactory)]
struct Rejected {
    code: u16,
    reason: String,
}

#[derive(Debug, ErrorFactory)]
struct Wrapped {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

#[derive(Debug, PartialEq, ErrorFactory)]
struct Timeout;

#[derive(Debug, PartialEq, ErrorFactory)]
struct Tagged {
    message: String,
    #[factory(default)]
    tags: Vec<String>,
}

#[test]
fn test_single_string_from_args() {
    let err = assert::<u64, QuotaError>(12, |u| *u <= 10, ["quota exceeded"]).unwrap_err();
    assert_eq!(err, CheckError::Violation(QuotaError("quota exceeded".into())));
}

#[test]
fn test_positional_fields() {
    let err = REQUIRE
        .assert::<_, Rejected>("GET /", |_| false, stipulate::args![409u16, "conflict"], ())
        .unwrap_err();
    assert_eq!(
        err,
        CheckError::Violation(Rejected {
            code: 409,
            reason: "conflict".into(),
        })
    );

    // Wrong order: no path fits.
    let err = REQUIRE
        .assert::<_, Rejected>("GET /", |_| false, stipulate::args!["conflict", 409u16], ())
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_message_with_empty_cause() {
    let err = REQUIRE
        .assert_message::<_, Wrapped>(0, |n| *n > 0, "workers")
        .unwrap_err()
        .into_violation()
        .unwrap();
    assert_eq!(err.message, "workers failed the assertion");
    assert!(err.source.is_none());
}

#[test]
fn test_unit_struct_is_built_bare() {
    let err = assert::<u8, Timeout>(0, |n| *n > 0, ["ignored"]).unwrap_err();
    assert_eq!(err, CheckError::Violation(Timeout));
}

#[test]
fn test_defaulted_fields() {
    let err = REQUIRE
        .check_as::<_, Tagged>("", |s| !s.is_empty(), FailureKind::ValueEmpty, "title")
        .unwrap_err()
        .into_violation()
        .unwrap();
    assert_eq!(err.message, "title must not be empty");
    assert!(err.tags.is_empty());
}

// ============================================================================
// CALLER LABELS
// ============================================================================

#[ensures(|n| *n > 0)]
fn checksum(data: &[u8]) -> Result<u32, CheckError> {
    Ok(data.iter().map(|b| u32::from(*b)).sum())
}

#[ensures(|v| !v.is_empty(), message = "no hosts configured")]
fn hosts(raw: &str) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    if raw.contains(';') {
        return Err("hosts are comma separated".into());
    }
    Ok(raw.split(',').filter(|h| !h.is_empty()).map(str::to_owned).collect())
}

#[derive(Debug, Default)]
struct Canvas {
    width: u32,
}

impl Canvas {
    #[setter(|w| *w > 0)]
    fn set_width(&mut self, width: u32) -> CheckResult<()> {
        self.width = width;
        Ok(())
    }

    fn set_height(&mut self, height: i64) -> CheckResult<i64> {
        check_assign!(height, |h| *h > 0)
    }
}

fn average(values: &[f64]) -> CheckResult<f64> {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    check_result!(mean, |m| m.is_finite())
}

#[test]
fn test_ensures_labels_result() {
    let _scope = tier_scope();
    set_enabled(TierKind::ResultDirected, true).unwrap();

    assert_eq!(checksum(&[1, 2]).unwrap(), 3);
    let err = checksum(&[]).unwrap_err();
    assert_eq!(err.kind(), Some(FailureKind::StateInvalid));
    assert_eq!(err.to_string(), "result of checksum is in an invalid state");
}

#[test]
fn test_ensures_keeps_body_errors_and_message() {
    let _scope = tier_scope();
    set_enabled(TierKind::ResultDirected, true).unwrap();

    assert_eq!(hosts("a,b").unwrap(), vec!["a", "b"]);
    assert_eq!(hosts("a;b").unwrap_err().to_string(), "hosts are comma separated");
    assert_eq!(hosts("").unwrap_err().to_string(), "no hosts configured");
}

#[test]
fn test_ensures_skipped_when_tier_off() {
    let _scope = tier_scope();
    set_enabled(TierKind::ResultDirected, false).unwrap();
    assert_eq!(checksum(&[]).unwrap(), 0);
}

#[test]
fn test_setter_labels_member() {
    let _scope = tier_scope();
    set_enabled(TierKind::SetterDirected, true).unwrap();

    let mut canvas = Canvas::default();
    canvas.set_width(640).unwrap();
    assert_eq!(canvas.width, 640);

    let err = canvas.set_width(0).unwrap_err();
    assert_eq!(err.violation().unwrap().label(), Some("width"));
    assert_eq!(err.to_string(), "attempt to assign 0 to width: value is invalid");
    assert_eq!(canvas.width, 640);

    let err = canvas.set_height(-2).unwrap_err();
    assert_eq!(err.to_string(), "attempt to assign -2 to height: value is invalid");
}

#[test]
fn test_check_result_macro() {
    let _scope = tier_scope();
    set_enabled(TierKind::ResultDirected, true).unwrap();

    assert_eq!(average(&[1.0, 3.0]).unwrap(), 2.0);
    let err = average(&[]).unwrap_err();
    assert_eq!(err.to_string(), "result of average is in an invalid state");
}

fn parse_limit(raw: &str) -> CheckResult<u32> {
    let limit = raw.trim().parse::<u32>().ok();
    REQUIRE.not_null(limit, stipulate::caller_context!())
}

#[test]
fn test_caller_context_labels_plain_check() {
    assert_eq!(parse_limit(" 12 ").unwrap(), 12);
    let err = parse_limit("twelve").unwrap_err();
    assert_eq!(err.violation().unwrap().label(), Some("parse_limit"));
    assert_eq!(err.to_string(), "parse_limit must not be null: found None");
}
