//! Scalar type table and well-known type names.

/// Request type of a route without input fields.
pub const EMPTY_TYPE: &str = "google.protobuf.Empty";

/// Field type of a schema that accepts any value.
pub const ANY_TYPE: &str = "google.protobuf.Any";

/// Response type of a route without any schema.
pub const TEXT_PLACEHOLDER: &str = "string";

/// IDL scalar kinds a primitive schema maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Uint32,
    String,
}

impl ScalarType {
    /// Look up the scalar for a primitive schema kind.
    ///
    /// The table is closed: kinds other than `number` and `string` have no
    /// scalar.
    pub fn for_kind(kind: &str) -> Option<Self> {
        match kind {
            "number" => Some(ScalarType::Uint32),
            "string" => Some(ScalarType::String),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Uint32 => "uint32",
            ScalarType::String => "string",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("number", Some(ScalarType::Uint32))]
    #[test_case("string", Some(ScalarType::String))]
    #[test_case("boolean", None)]
    #[test_case("integer", None)]
    #[test_case("Number", None)]
    #[test_case("", None)]
    fn ScalarType___for_kind___uses_closed_table(kind: &str, expected: Option<ScalarType>) {
        assert_eq!(ScalarType::for_kind(kind), expected);
    }

    #[test]
    fn ScalarType___display___renders_idl_name() {
        assert_eq!(ScalarType::Uint32.to_string(), "uint32");
        assert_eq!(ScalarType::String.to_string(), "string");
    }
}
