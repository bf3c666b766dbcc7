#![allow(non_snake_case)]

use super::*;

#[test]
fn CompileError___missing_service_name___displays_hint() {
    let err = CompileError::MissingServiceName;

    let display = err.to_string();

    assert!(display.starts_with("missing service name"));
}

#[test]
fn CompileError___invalid_property_type___names_field_and_schema() {
    let err = CompileError::invalid_property("age", &serde_json::json!({"type": "boolean"}));

    let display = err.to_string();

    assert_eq!(
        display,
        r#"invalid property type for 'age': {"type":"boolean"}"#
    );
}

#[test]
fn CompileError___duplicate_rpc_name___displays_name() {
    let err = CompileError::DuplicateRpcName("GetUsers".into());

    assert_eq!(err.to_string(), "duplicate rpc name: GetUsers");
}

#[test]
fn CompileError___all_variants___have_unique_codes() {
    let errors = vec![
        CompileError::MissingServiceName,
        CompileError::MissingCallback,
        CompileError::InvalidPropertyType {
            field: "a".into(),
            schema: "{}".into(),
        },
        CompileError::DuplicateRpcName("".into()),
        CompileError::Json(serde_json::from_str::<String>("invalid").unwrap_err()),
    ];

    let codes: Vec<u32> = errors.iter().map(|e| e.error_code()).collect();
    let unique: std::collections::HashSet<u32> = codes.iter().copied().collect();

    assert_eq!(
        codes.len(),
        unique.len(),
        "All error codes should be unique"
    );
}

#[test]
fn CompileError___from_serde_error___converts_to_json_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: CompileError = json_err.into();

    assert!(matches!(err, CompileError::Json(_)));
}
