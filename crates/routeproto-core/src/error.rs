//! Error types for route compilation

use thiserror::Error;

/// Result type alias for compilation operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Error type for compilation operations
///
/// Every variant is fatal to the pass that raised it: no document is produced
/// and the completion handler is never invoked.
#[derive(Error, Debug)]
pub enum CompileError {
    /// Neither an explicit service name nor a document title was available
    #[error("missing service name: configure one or supply a document with a title")]
    MissingServiceName,

    /// No completion handler was supplied when the generator was configured
    #[error("missing callback: a completion handler is required")]
    MissingCallback,

    /// A schema node did not match any shape the message compiler understands
    #[error("invalid property type for '{field}': {schema}")]
    InvalidPropertyType { field: String, schema: String },

    /// Two routes resolved to the same RPC name under the reject policy
    #[error("duplicate rpc name: {0}")]
    DuplicateRpcName(String),

    /// Route list, document or configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompileError {
    /// Returns a stable numeric code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            CompileError::MissingServiceName => 1,
            CompileError::MissingCallback => 2,
            CompileError::InvalidPropertyType { .. } => 3,
            CompileError::DuplicateRpcName(_) => 4,
            CompileError::Json(_) => 5,
        }
    }

    pub(crate) fn invalid_property(field: &str, schema: &serde_json::Value) -> Self {
        CompileError::InvalidPropertyType {
            field: field.to_string(),
            schema: schema.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;

#[cfg(test)]
#[path = "error/error_parameterized_tests.rs"]
mod error_parameterized_tests;
