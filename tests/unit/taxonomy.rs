//! One representative check per failure kind, through the public surface.

use std::any::Any;
use std::collections::{BTreeMap, HashSet};
use std::io::{Cursor, Seek, SeekFrom};
use stipulate::{CheckContext, CheckError, Constraint, FailureKind, REQUIRE};

/// Run `check` and return the kind it failed with.
fn kind_of<T: std::fmt::Debug>(result: Result<T, CheckError>) -> FailureKind {
    result
        .unwrap_err()
        .kind()
        .expect("expected a violation, got a configuration error")
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Weekday {
    Mon,
    Tue,
}

impl TryFrom<i32> for Weekday {
    type Error = ();

    fn try_from(raw: i32) -> Result<Self, ()> {
        match raw {
            1 => Ok(Weekday::Mon),
            2 => Ok(Weekday::Tue),
            _ => Err(()),
        }
    }
}

#[test]
fn test_every_kind_is_reachable() {
    let scratch = tempfile::tempdir().unwrap();
    let file = scratch.path().join("present.txt");
    std::fs::write(&file, b"x").unwrap();
    let mut stream = Cursor::new(vec![0u8; 4]);
    stream.seek(SeekFrom::Start(2)).unwrap();
    let payload: Box<dyn Any> = Box::new(1u8);
    let map: BTreeMap<&str, i32> = BTreeMap::new();

    let observed = [
        kind_of(REQUIRE.not_null(None::<u8>, "a")),
        kind_of(REQUIRE.greater_than(0, 0, "a")),
        kind_of(REQUIRE.satisfies(3, |v| *v > 3, "a")),
        kind_of(REQUIRE.not_empty("", "a")),
        kind_of(REQUIRE.in_range(11, 0..=10, "a")),
        kind_of(REQUIRE.not_empty(Vec::<u8>::new(), "a")),
        kind_of(REQUIRE.no_nulls([None::<u8>], "a")),
        kind_of(REQUIRE.all([1], |v| *v > 1, "a")),
        kind_of(REQUIRE.instance_of::<u16>(payload.as_ref(), "a")),
        kind_of(REQUIRE.enum_defined::<Weekday, i32>(9, "a")),
        kind_of(REQUIRE.contains_key(&map, "k", "a")),
        kind_of(REQUIRE.state(false, |open| *open, "a")),
        kind_of(REQUIRE.not_disposed((), |_| true, "a")),
        kind_of(REQUIRE.uri("nope", "a")),
        kind_of(REQUIRE.file_exists(scratch.path().join("absent.txt"), "a")),
        kind_of(REQUIRE.dir_exists(&file, "a")),
        kind_of(REQUIRE.stream_rewound(&mut stream, "a")),
    ];

    assert_eq!(observed, FailureKind::ALL);
}

#[test]
fn test_constraint_families() {
    assert_eq!(FailureKind::ArgumentNull.constraint(), Constraint::Existence);
    assert_eq!(FailureKind::CollectionEmpty.constraint(), Constraint::Shape);
    assert_eq!(FailureKind::ItemInvalid.constraint(), Constraint::ElementWise);
    assert_eq!(FailureKind::StreamInvalid.constraint(), Constraint::Resource);
}

#[test]
fn test_passing_checks_hand_value_back() {
    let scratch = tempfile::tempdir().unwrap();
    let file = scratch.path().join("config.toml");
    std::fs::write(&file, b"port = 8080").unwrap();

    assert_eq!(REQUIRE.file_exists(&file, "config").unwrap(), &file);
    assert_eq!(REQUIRE.dir_exists(scratch.path(), "root").unwrap(), scratch.path());
    assert_eq!(REQUIRE.not_blank(" ok ", "s").unwrap(), " ok ");
    assert_eq!(REQUIRE.between(5, 1, 10, "n").unwrap(), 5);
    assert_eq!(REQUIRE.not_negative(0.0, "x").unwrap(), 0.0);
    assert_eq!(REQUIRE.at_most(10u8, 10, "n").unwrap(), 10);
    assert_eq!(REQUIRE.not_default(7, "n").unwrap(), 7);

    let tags: HashSet<&str> = ["a"].into_iter().collect();
    assert_eq!(REQUIRE.not_empty(&tags, "tags").unwrap().len(), 1);
    let weekday: Weekday = REQUIRE.enum_value(2i32, "day").unwrap();
    assert_eq!(weekday, Weekday::Tue);
}

#[test]
fn test_message_override_is_verbatim() {
    let err = REQUIRE
        .not_empty(Vec::<u8>::new(), CheckContext::named("body").message("send a body"))
        .unwrap_err();
    assert_eq!(err.to_string(), "send a body");
    assert_eq!(err.violation().unwrap().label(), Some("body"));
}

#[test]
fn test_inverted_bounds_are_configuration_errors() {
    let err = REQUIRE.between(5, 10, 1, "n").unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.kind(), None);

    let err = REQUIRE.between(f64::NAN, 0.0, f64::NAN, "x").unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_violation_serializes() {
    let err = REQUIRE.all([2, 3, 6], |v| v % 2 == 0, "evens").unwrap_err();
    let json = serde_json::to_value(err.violation().unwrap()).unwrap();
    assert_eq!(json["kind"], "item_invalid");
    assert_eq!(json["label"], "evens");
    assert_eq!(json["index"], 1);
    assert_eq!(json["value"], "3");
}
