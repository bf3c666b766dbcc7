//! routeproto-core - Route to RPC service definition compiler
//!
//! This crate turns declared HTTP routes into one protobuf-style document:
//! - [`compile`] runs one compilation pass over a complete route list
//! - [`ProtoGenerator`] drives a pass from a host server's registration lifecycle
//! - [`CompileError`] for error handling
//! - [`CompilerConfig`] for pass configuration

pub mod config;
pub mod decl;
pub mod document;
pub mod error;
pub mod generator;
pub mod message;
pub mod naming;
pub mod route;
pub mod rpc;
pub mod schema;
pub mod service;
pub mod types;

pub use config::{CompilerConfig, DuplicatePolicy, PresenceStyle};
pub use document::compile;
pub use error::{CompileError, CompileResult};
pub use generator::{CompletionHandler, GeneratorOptions, ProtoGenerator};
pub use route::{ParamBag, RouteDescriptor, RouteSchema};
pub use schema::{ObjectSchema, SchemaNode};
pub use service::{ApiDocument, ServiceNameResolver};

/// Log levels for injected log callbacks
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiDocument, CompileError, CompileResult, CompilerConfig, GeneratorOptions, LogLevel,
        ProtoGenerator, RouteDescriptor, RouteSchema, ServiceNameResolver, compile,
    };
}
