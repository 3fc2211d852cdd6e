//! Composition: nested schemas, accumulated diagnostic paths, and the
//! request-body scenario the library exists for.

use json_shape::{
    array_of, boolean, custom, exact, map_of, nullable, number, object, one_of, optional, string,
    Input,
};
use serde_json::json;

#[test]
fn test_request_body_scenario() {
    let schema = object([
        ("name", string()),
        ("age", number()),
        ("cool", optional(boolean())),
        ("powers", array_of(string())),
    ]);

    let body = json!({"name": "Superman"});
    assert!(!schema.is_valid(&body));
    assert_eq!(
        schema.get_messages(&body, "input"),
        vec![
            "\"input\".\"age\" is not a number",
            "\"input\".\"powers\" is not an array",
        ]
    );

    let full = json!({
        "name": "Superman",
        "age": 30,
        "cool": true,
        "powers": ["flight", "x-ray vision"],
    });
    assert!(schema.is_valid(&full));
    assert!(schema.get_messages(&full, "input").is_empty());
}

#[test]
fn test_nested_paths_accumulate() {
    let schema = object([("user", object([("tags", array_of(string()))]))]);
    let value = json!({"user": {"tags": ["a", 1]}});
    assert_eq!(
        schema.get_messages(&value, "input"),
        vec!["\"input\".\"user\".\"tags[1]\" is not a string"]
    );
}

#[test]
fn test_array_of_objects() {
    let schema = array_of(object([("id", number())]));
    let value = json!([{"id": 1}, {"id": "2"}, {"nope": 3}]);
    assert_eq!(
        schema.get_messages(&value, "items"),
        vec![
            "\"items[1]\".\"id\" is not a number",
            "\"items[2]\" should not have a property named \"nope\" ",
            "\"items[2]\".\"id\" is not a number",
        ]
    );
}

#[test]
fn test_map_of_objects() {
    let schema = map_of(object([("score", number())]));
    let value = json!({"alice": {"score": 10}, "bob": {"score": "high"}});
    assert_eq!(
        schema.get_messages(&value, "players"),
        vec!["\"players[1]\".\"score\" is not a number"]
    );
}

#[test]
fn test_union_of_shapes() {
    let schema = one_of(
        object([("kind", exact("point")), ("x", number())]),
        object([("kind", exact("label")), ("text", string())]),
        [],
    );
    assert!(schema.is_valid(&json!({"kind": "point", "x": 1})));
    assert!(schema.is_valid(&json!({"kind": "label", "text": "hi"})));
    assert!(!schema.is_valid(&json!({"kind": "point", "text": "hi"})));
}

#[test]
fn test_custom_composes_with_combinators() {
    let non_empty_string = custom(
        |input| input.as_str().map(|s| !s.is_empty()).unwrap_or(false),
        |input, name| {
            if input.as_str().map(|s| !s.is_empty()).unwrap_or(false) {
                Vec::new()
            } else {
                vec![json_shape::message::mismatch(name, "is not a non-empty string")]
            }
        },
    );
    let schema = object([("names", array_of(non_empty_string))]);
    assert!(schema.is_valid(&json!({"names": ["a", "b"]})));
    assert_eq!(
        schema.get_messages(&json!({"names": ["a", ""]}), "input"),
        vec!["\"input\".\"names[1]\" is not a non-empty string"]
    );
}

#[test]
fn test_nullable_inside_object() {
    let schema = object([("nickname", nullable(string()))]);
    assert!(schema.is_valid(&json!({"nickname": null})));
    assert!(schema.is_valid(&json!({"nickname": "Supes"})));
    // nullable is not optional: the key must be present.
    assert!(!schema.is_valid(&json!({})));
}

#[test]
fn test_optional_object_key_with_nested_failure() {
    let schema = object([("address", optional(object([("city", string())])))]);
    assert!(schema.is_valid(&json!({})));
    assert!(schema.is_valid(&json!({"address": {"city": "Metropolis"}})));

    let bad = json!({"address": {"city": 1}});
    assert!(!schema.is_valid(&bad));
    assert_eq!(
        schema.get_messages(&bad, "input"),
        vec![
            "\"input\".\"address\": \"address\".\"city\" is not a string, or \"address\" is not undefined",
        ]
    );
}

#[test]
fn test_idempotence() {
    let schema = object([("age", number()), ("tags", array_of(string()))]);
    let value = json!({"age": "x", "tags": [1]});
    let first = schema.get_messages(&value, "input");
    for _ in 0..3 {
        assert_eq!(schema.get_messages(&value, "input"), first);
        assert!(!schema.is_valid(&value));
    }
    assert!(!schema.is_valid(Input::Undefined));
}
