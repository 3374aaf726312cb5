use std::sync::Arc;

use codec_rail::prelude::*;
use codec_rail::report::PathReporter;

use crate::helpers::assert_strict_success;

#[test]
fn name_is_the_union_of_quoted_members_in_insertion_order() {
    assert_eq!(keyof(["foo", "bar"]).name(), r#""foo" | "bar""#);
    assert_eq!(keyof(["b", "a", "c"]).name(), r#""b" | "a" | "c""#);
}

#[test]
fn accepts_members_only() {
    let codec = keyof(["foo", "bar"]);
    let value = Arc::new(Value::from("bar"));
    assert_strict_success(&codec.decode(&value), &value);

    assert!(codec.is(&Value::from("foo")));
    assert!(!codec.is(&Value::from("baz")));
    assert!(!codec.is(&Value::from(1)));
}

#[test]
fn rejects_non_members_with_the_union_as_expected_type() {
    let codec = keyof(["foo", "bar"]);
    let result = codec.decode(&Arc::new(Value::from("baz")));
    assert_eq!(
        PathReporter::report(&result),
        [r#"Invalid value "baz" supplied to : "foo" | "bar""#]
    );
}

#[test]
fn duplicate_members_collapse() {
    assert_eq!(keyof(["foo", "foo", "bar"]).name(), r#""foo" | "bar""#);
}

#[test]
fn encodes_as_identity() {
    let codec = keyof(["foo"]);
    assert!(codec.encode_is_identity());
    let value = Arc::new(Value::from("foo"));
    assert!(Arc::ptr_eq(&codec.encode(&value), &value));
}
