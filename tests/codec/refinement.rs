use std::sync::Arc;

use codec_rail::prelude::*;
use codec_rail::report::PathReporter;

use crate::helpers::{assert_strict_success, number_from_string};

fn long_string() -> Arc<dyn Codec> {
    refine(string(), "long string", |v| {
        v.as_str().is_some_and(|s| s.len() >= 2)
    })
}

#[test]
fn decodes_when_inner_and_predicate_both_pass() {
    let codec = long_string();
    let value = Arc::new(Value::from("aa"));
    assert_strict_success(&codec.decode(&value), &value);
}

#[test]
fn rejects_when_the_predicate_fails() {
    let codec = long_string();
    let result = codec.decode(&Arc::new(Value::from("a")));
    assert_eq!(
        PathReporter::report(&result),
        [r#"Invalid value "a" supplied to : long string"#]
    );
}

#[test]
fn rejects_when_the_inner_codec_fails() {
    let codec = long_string();
    assert!(codec.decode(&Arc::new(Value::from(10))).is_invalid());
}

#[test]
fn guard_requires_inner_and_predicate() {
    let codec = long_string();
    assert!(codec.is(&Value::from("aa")));
    assert!(!codec.is(&Value::from("a")));
    assert!(!codec.is(&Value::from(10)));
}

#[test]
fn predicate_sees_the_decoded_value() {
    // The inner codec turns "1" into 1; the refinement then checks the number.
    let positive = refine(number_from_string(), "positive", |v| {
        v.as_number().is_some_and(|n| n > 0.0)
    });
    assert!(positive.decode(&Arc::new(Value::from("1"))).is_valid());
    assert!(positive.decode(&Arc::new(Value::from("-1"))).is_invalid());
}

#[test]
fn inherits_the_identity_encode_flag() {
    assert!(long_string().encode_is_identity());

    let refined_prism = refine(number_from_string(), "whole", |v| {
        v.as_number().is_some_and(|n| n.fract() == 0.0)
    });
    assert!(!refined_prism.encode_is_identity());
    // Encoding still goes through the inner codec.
    assert_eq!(
        *refined_prism.encode(&Arc::new(Value::from(1))),
        Value::from("1")
    );
}
