use std::sync::Arc;

use codec_rail::{Value, ValueMap};

#[test]
fn display_renders_scalars_wire_style() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(1).to_string(), "1");
    assert_eq!(Value::from(1.5).to_string(), "1.5");
    assert_eq!(Value::from("s").to_string(), r#""s""#);
}

#[test]
fn display_escapes_strings() {
    assert_eq!(Value::from("a\"b").to_string(), r#""a\"b""#);
    assert_eq!(Value::from("a\\b").to_string(), r#""a\\b""#);
    assert_eq!(Value::from("a\nb").to_string(), r#""a\nb""#);
}

#[test]
fn display_renders_composites_compactly() {
    assert_eq!(Value::array::<_, Value>([]).to_string(), "[]");
    assert_eq!(Value::array([1, 2]).to_string(), "[1,2]");
    assert_eq!(Value::object::<_, &str, Value>([]).to_string(), "{}");
    assert_eq!(
        Value::object([("a", 1), ("b", 2)]).to_string(),
        r#"{"a":1,"b":2}"#
    );
}

#[test]
fn object_preserves_insertion_order() {
    let value = Value::object([("z", 1), ("a", 2), ("m", 3)]);
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn accessors_match_the_variant() {
    assert!(Value::Null.is_null());
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::from(1).as_number(), Some(1.0));
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert!(Value::from(1).as_str().is_none());
    assert!(Value::array([1]).as_array().is_some());
    assert!(Value::object([("a", 1)]).as_object().is_some());
}

#[test]
fn from_conversions_produce_the_expected_variants() {
    assert_eq!(Value::from(1i64), Value::Number(1.0));
    assert_eq!(Value::from(1u32), Value::Number(1.0));
    assert_eq!(Value::from(1usize), Value::Number(1.0));
    assert_eq!(Value::from(1.5f32), Value::Number(1.5));
    assert_eq!(Value::from(String::from("s")), Value::String("s".into()));
    assert_eq!(Value::from(vec![1, 2]), Value::array([1, 2]));
    assert_eq!(Value::from(ValueMap::default()), Value::object::<_, &str, Value>([]));
}

#[test]
fn shared_children_compare_by_pointer() {
    let child = Arc::new(Value::from(1));
    let a = Value::Array(vec![child.clone()]);
    if let Value::Array(items) = &a {
        assert!(Arc::ptr_eq(&items[0], &child));
    } else {
        unreachable!();
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_in_wire_shape() {
        let value = Value::object([
            ("name", Value::from("ada")),
            ("tags", Value::array(["a", "b"])),
            ("ok", Value::from(true)),
            ("missing", Value::Null),
        ]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"name":"ada","tags":["a","b"],"ok":true,"missing":null}"#
        );
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let value: Value = serde_json::from_str(r#"{"a":1,"b":[true,null,"s"]}"#).unwrap();
        assert_eq!(
            value,
            Value::object([
                ("a", Value::from(1)),
                (
                    "b",
                    Value::array([Value::from(true), Value::Null, Value::from("s")])
                ),
            ])
        );
    }

    #[test]
    fn round_trips_preserve_equality() {
        let value = Value::object([("a", Value::array([1, 2])), ("b", Value::from("s"))]);
        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, back);
    }
}
