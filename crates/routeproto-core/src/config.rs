//! Compiler configuration types

use serde::{Deserialize, Serialize};

/// How the `required` presence of a field is expressed in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStyle {
    /// `required uint32 age = 2;`
    #[default]
    Label,
    /// `uint32 age = 2 [(msp.field).required = true];`
    FieldOption,
    /// `uint32 age = 2; // required`
    Comment,
}

/// What to do when two routes resolve to the same RPC name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Emit both declarations and log a warning
    #[default]
    Allow,
    /// Fail the pass with [`CompileError::DuplicateRpcName`](crate::CompileError::DuplicateRpcName)
    Reject,
}

/// Configuration for one compilation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Explicit service name
    ///
    /// Takes precedence over the title of the API document.
    #[serde(default)]
    pub service_name: Option<String>,

    /// Status key under which the response schema of a route is looked up
    #[serde(default = "default_response_status")]
    pub response_status: String,

    /// Visibility tag for routes that do not override it
    #[serde(default = "default_visibility")]
    pub default_visibility: String,

    /// Rendering of required fields
    #[serde(default)]
    pub presence: PresenceStyle,

    /// Policy for colliding RPC names
    #[serde(default)]
    pub duplicate_rpc_names: DuplicatePolicy,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_response_status() -> String {
    "200".to_string()
}

fn default_visibility() -> String {
    "internal".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            service_name: None,
            response_status: default_response_status(),
            default_visibility: default_visibility(),
            presence: PresenceStyle::default(),
            duplicate_rpc_names: DuplicatePolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl CompilerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit service name
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Set the presence style
    pub fn with_presence(mut self, presence: PresenceStyle) -> Self {
        self.presence = presence;
        self
    }

    /// Set the duplicate RPC name policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_rpc_names = policy;
        self
    }
}
