use std::sync::Arc;

use codec_rail::prelude::*;
use codec_rail::report::PathReporter;

use crate::helpers::assert_strict_success;

#[test]
fn name_is_the_quoted_literal() {
    assert_eq!(literal("foo").name(), r#""foo""#);
    assert_eq!(literal(1).name(), "1");
    assert_eq!(literal(true).name(), "true");
}

#[test]
fn accepts_exactly_its_constant() {
    let foo = literal("foo");
    let value = Arc::new(Value::from("foo"));
    assert_strict_success(&foo.decode(&value), &value);

    assert!(foo.is(&Value::from("foo")));
    assert!(!foo.is(&Value::from("bar")));
    assert!(!foo.is(&Value::from(1)));
}

#[test]
fn rejects_other_values_with_its_name_as_expected_type() {
    let foo = literal("foo");
    let result = foo.decode(&Arc::new(Value::from("bar")));
    assert_eq!(
        PathReporter::report(&result),
        [r#"Invalid value "bar" supplied to : "foo""#]
    );
}

#[test]
fn encodes_as_identity() {
    let foo = literal("foo");
    assert!(foo.encode_is_identity());
    let value = Arc::new(Value::from("foo"));
    assert!(Arc::ptr_eq(&foo.encode(&value), &value));
}
