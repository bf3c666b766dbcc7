//! Service name resolution and the service block

use crate::decl::{RpcDecl, SERVICE_NAME, ServiceDecl};
use crate::error::{CompileError, CompileResult};
use serde::{Deserialize, Serialize};

/// The parts of an OpenAPI/Swagger document the compiler reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(default)]
    pub info: ApiInfo,
}

/// The `info` object of an API document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub title: Option<String>,
}

impl ApiDocument {
    /// Create a document with the given title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            info: ApiInfo {
                title: Some(title.into()),
            },
        }
    }

    /// Parse a document from JSON bytes
    pub fn from_json(bytes: &[u8]) -> CompileResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn title(&self) -> Option<&str> {
        self.info.title.as_deref()
    }
}

/// Resolves the service name: explicit configuration first, then the
/// document title. A configured name is never replaced by the title, so an
/// empty configured name fails resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceNameResolver {
    explicit: Option<String>,
    document_title: Option<String>,
}

impl ServiceNameResolver {
    pub fn new(explicit: Option<String>, document: Option<&ApiDocument>) -> Self {
        Self {
            explicit,
            document_title: document.and_then(|doc| doc.title().map(str::to_string)),
        }
    }

    /// Resolver that always yields the given name
    pub fn explicit(name: impl Into<String>) -> Self {
        Self {
            explicit: Some(name.into()),
            document_title: None,
        }
    }

    pub fn resolve(&self) -> CompileResult<String> {
        self.explicit
            .as_ref()
            .or(self.document_title.as_ref())
            .filter(|name| !name.is_empty())
            .cloned()
            .ok_or(CompileError::MissingServiceName)
    }
}

/// Build the single service block
pub fn assemble_service(alias: &str, rpcs: Vec<RpcDecl>) -> ServiceDecl {
    ServiceDecl {
        name: SERVICE_NAME.to_string(),
        alias: alias.to_string(),
        rpcs,
    }
}
