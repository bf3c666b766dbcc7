#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(CompileError::MissingServiceName, 1, "MissingServiceName")]
#[test_case(CompileError::MissingCallback, 2, "MissingCallback")]
#[test_case(
    CompileError::InvalidPropertyType {
        field: "f".into(),
        schema: "{}".into(),
    },
    3,
    "InvalidPropertyType"
)]
#[test_case(CompileError::DuplicateRpcName("X".into()), 4, "DuplicateRpcName")]
fn CompileError___variant___maps_to_correct_code(
    error: CompileError,
    expected_code: u32,
    _variant_name: &str,
) {
    assert_eq!(
        error.error_code(),
        expected_code,
        "{} should map to code {}",
        _variant_name,
        expected_code
    );
}

#[test_case(CompileError::MissingServiceName, "missing service name")]
#[test_case(CompileError::MissingCallback, "missing callback")]
#[test_case(CompileError::DuplicateRpcName("A".into()), "duplicate rpc name")]
fn CompileError___variant___display_contains_keyword(error: CompileError, keyword: &str) {
    assert!(error.to_string().contains(keyword));
}
