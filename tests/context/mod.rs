use std::sync::Arc;

use codec_rail::{Context, Value};

#[test]
fn root_carries_an_empty_key_and_the_codec_name() {
    let input = Arc::new(Value::Null);
    let context = Context::root("string", &input);

    assert_eq!(context.len(), 1);
    let frame = context.last().unwrap();
    assert_eq!(frame.key, "");
    assert_eq!(frame.type_name, "string");
    assert!(Arc::ptr_eq(&frame.actual, &input));
}

#[test]
fn descend_appends_one_frame() {
    let input = Arc::new(Value::object([("a", 1)]));
    let child = Arc::new(Value::from(1));
    let context = Context::root("{ [K in string]: number }", &input).descend("a", "number", &child);

    assert_eq!(context.len(), 2);
    let frame = context.last().unwrap();
    assert_eq!(frame.key, "a");
    assert_eq!(frame.type_name, "number");
    assert!(Arc::ptr_eq(&frame.actual, &child));
}

#[test]
fn descend_leaves_the_parent_untouched() {
    let input = Arc::new(Value::object([("a", 1)]));
    let root = Context::root("T", &input);
    let child = Arc::new(Value::from(1));

    let left = root.descend("a", "number", &child);
    let right = root.descend("b", "string", &child);

    assert_eq!(root.len(), 1);
    assert_eq!(left.last().unwrap().key, "a");
    assert_eq!(right.last().unwrap().key, "b");
}

#[test]
fn path_joins_frames_root_to_leaf() {
    let input = Arc::new(Value::object([("aa", "s")]));
    let context = Context::root("{ [K in string]: number }", &input).descend(
        "aa",
        "number",
        &Arc::new(Value::from("s")),
    );
    assert_eq!(context.path(), ": { [K in string]: number }/aa: number");
}

#[test]
fn frames_iterate_in_order() {
    let input = Arc::new(Value::Null);
    let context = Context::root("a", &input)
        .descend("x", "b", &input)
        .descend("y", "c", &input);
    let names: Vec<&str> = context
        .frames()
        .iter()
        .map(|frame| frame.type_name.as_str())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}
