// tests/outcome_tests.rs
//
// The JSON envelope is the externally-visible contract; these tests pin its
// exact field names and shapes.

use pss::{parse, ParseError, ParseOutcome};
use serde_json::json;

#[test]
fn success_envelope_shape() {
    let outcome = parse("component pss_top { action A {}; }");
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        value,
        json!({
            "success": true,
            "data": {
                "type": "component",
                "name": "pss_top",
                "actions": {
                    "A": { "type": "action", "name": "A", "activity": null }
                }
            }
        })
    );
}

#[test]
fn activity_tree_shape() {
    let outcome = parse("component c { action C { activity { do A; do A; } } }");
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        value["data"]["actions"]["C"],
        json!({
            "type": "action",
            "name": "C",
            "activity": {
                "type": "activity",
                "sequence": [
                    { "type": "do", "action": "A" },
                    { "type": "do", "action": "A" }
                ]
            }
        })
    );
}

#[test]
fn actions_object_keeps_declaration_order() {
    // Serialize straight to text: a Value round trip would reorder keys.
    let outcome = parse("component c { action zulu {} action alpha {} action mike {} }");
    let text = serde_json::to_string(&outcome).unwrap();
    let zulu = text.find("\"zulu\"").unwrap();
    let alpha = text.find("\"alpha\"").unwrap();
    let mike = text.find("\"mike\"").unwrap();
    assert!(zulu < alpha && alpha < mike);
}

#[test]
fn syntax_failure_envelope_carries_full_position() {
    let source = "component c {\n  oops\n}";
    let value = serde_json::to_value(parse(source)).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["column", "error", "line", "position", "success"]);
    assert_eq!(object["success"], json!(false));
    assert_eq!(object["position"], json!(source.find("oops").unwrap()));
    assert_eq!(object["line"], json!(2));
    assert_eq!(object["column"], json!(3));
}

#[test]
fn unexpected_failure_envelope_omits_line_and_column() {
    let outcome = ParseOutcome::Failure(ParseError::Unexpected {
        message: "index out of range".to_string(),
        position: 12,
    });
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        value,
        json!({
            "success": false,
            "error": "Unexpected error: index out of range",
            "position": 12
        })
    );
}

#[test]
fn failure_accessors_match_envelope() {
    let outcome = parse("component {");
    assert!(!outcome.is_success());
    assert!(outcome.component().is_none());
    let err = outcome.error().unwrap();
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["position"], json!(err.position()));
    assert_eq!(value["error"], json!(err.to_string()));
}
