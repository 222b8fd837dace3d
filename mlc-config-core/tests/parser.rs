use std::path::PathBuf;

use mlc_config_core::{parse, parse_file, Component, Content, ParseError};
use serde_json::Value;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_component_list_with_nested_content() {
    let components: Vec<Component> =
        parse_file(&fixture("fixtures/right-menu.json")).expect("parse should succeed");
    assert_eq!(components.len(), 2);

    let notifications = &components[0];
    assert_eq!(notifications.tag, "bk-notifications");
    assert_eq!(
        notifications.attributes.as_ref().and_then(|a| a.get("id")),
        Some(&Value::String("notifications".to_string()))
    );
    assert!(notifications.extra.contains_key("booleanAttributes"));

    let wrapper = &components[1];
    let children = wrapper.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].tag, "span");
    assert_eq!(children[0].content, Some(Content::Text("Help".to_string())));
}

#[test]
fn rejects_files_without_json_extension() {
    let err = parse_file::<Value>(&fixture("fixtures/auth.txt")).expect_err("should reject");
    match err {
        ParseError::NotJson(path) => assert!(path.ends_with("auth.txt")),
        other => panic!("unexpected error variant: {other}"),
    }
}

#[test]
fn reports_missing_file_as_io_error() {
    let err =
        parse_file::<Value>(&fixture("fixtures/does-not-exist.json")).expect_err("should fail");
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn reports_malformed_json() {
    let err = parse::<Value>(br#"{"tag": "div""#).expect_err("should fail");
    assert!(matches!(err, ParseError::Json(_)));
}
