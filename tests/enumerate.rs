//! Integration tests for path enumeration

use pathdb::{enumerate, lookup, JsonPath, PathDbError, PathSegment};
use serde_json::json;

#[test]
fn test_array_under_key_yields_two_paths() {
    let root = json!({"a": [1, 2]});
    let paths = enumerate(&root).unwrap();

    assert_eq!(
        paths,
        vec![
            JsonPath::from_segments(vec![PathSegment::Key("a".to_string()), PathSegment::Index(0)]),
            JsonPath::from_segments(vec![PathSegment::Key("a".to_string()), PathSegment::Index(1)]),
        ]
    );
    assert_eq!(lookup(&root, &paths[0]), Some(&json!(1)));
    assert_eq!(lookup(&root, &paths[1]), Some(&json!(2)));
}

#[test]
fn test_bare_scalar_is_invalid_input() {
    let err = enumerate(&json!(5)).unwrap_err();
    assert!(matches!(err, PathDbError::InvalidInput { kind: "number" }));
}

#[test]
fn test_every_path_ends_at_a_scalar() {
    let root = json!({
        "users": [
            {"name": "George", "pets": [], "address": {"city": "Paris", "zip": null}},
            {"name": "Francis", "pets": ["cat"], "address": {}}
        ],
        "count": 2
    });

    let paths = enumerate(&root).unwrap();
    let rendered: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "users[0].name",
            "users[0].address.city",
            "users[0].address.zip",
            "users[1].name",
            "users[1].pets[0]",
            "count",
        ]
    );

    for path in &paths {
        let value = lookup(&root, path).unwrap();
        assert!(!value.is_object() && !value.is_array(), "{} is a container", path);
    }
}

#[test]
fn test_array_root() {
    let paths = enumerate(&json!([[1], "x"])).unwrap();
    let rendered: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
    assert_eq!(rendered, vec!["[0][0]", "[1]"]);
}

#[test]
fn test_dotted_keys_display_unambiguously() {
    let paths = enumerate(&json!({"a.b": 1, "a": {"b": 2}})).unwrap();
    let rendered: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
    assert_eq!(rendered, vec![r#"["a.b"]"#, "a.b"]);
    assert_eq!(rendered[0].parse::<JsonPath>().unwrap(), paths[0]);
}
