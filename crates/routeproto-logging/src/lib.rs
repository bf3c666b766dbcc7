//! routeproto-logging - Tracing to log callback bridge
//!
//! This crate provides:
//! - [`CallbackLayer`] tracing layer that forwards events to an injected callback
//! - [`LogCallback`] type for the leveled log callback
//! - Dynamic log level filtering through [`LogCallbackManager`]

mod callback;
mod layer;

pub use callback::{LogCallback, LogCallbackManager};
pub use layer::{CallbackLayer, init_logging, init_logging_with_callback};
pub use routeproto_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CallbackLayer, LogCallback, LogCallbackManager, LogLevel, init_logging,
        init_logging_with_callback,
    };
}
