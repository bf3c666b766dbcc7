//! Lifecycle-driven generation for host servers.
//!
//! A host server registers its routes one by one and signals once
//! registration is complete. [`ProtoGenerator`] follows that lifecycle:
//!
//! ```text
//! new(options) ──→ on_route(route)* ──→ on_ready(document)
//!      │                                     │
//!      └─ MissingCallback                    └─ callback(text), exactly once
//! ```
//!
//! # Example
//!
//! ```
//! use routeproto_core::{CompilerConfig, GeneratorOptions, ProtoGenerator, RouteDescriptor};
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! let options = GeneratorOptions::new(CompilerConfig::new().with_service_name("users"))
//!     .with_callback(move |text| tx.send(text).unwrap());
//!
//! let mut generator = ProtoGenerator::new(options).unwrap();
//! generator.on_route(RouteDescriptor::new("GET", "/users/:id"));
//! generator.on_ready(None).unwrap();
//!
//! assert!(rx.recv().unwrap().contains("rpc GetUsersById("));
//! ```

use crate::config::CompilerConfig;
use crate::document::compile;
use crate::error::{CompileError, CompileResult};
use crate::route::RouteDescriptor;
use crate::service::{ApiDocument, ServiceNameResolver};
use tracing::debug;

/// Receives the finished document
pub type CompletionHandler = Box<dyn FnOnce(String) + Send>;

/// Options accepted by [`ProtoGenerator::new`]
#[derive(Default)]
pub struct GeneratorOptions {
    pub config: CompilerConfig,
    pub callback: Option<CompletionHandler>,
}

impl GeneratorOptions {
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            config,
            callback: None,
        }
    }

    /// Set the completion handler
    pub fn with_callback(mut self, callback: impl FnOnce(String) + Send + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// Collects routes during registration and compiles them once it completes
pub struct ProtoGenerator {
    config: CompilerConfig,
    callback: CompletionHandler,
    routes: Vec<RouteDescriptor>,
}

impl std::fmt::Debug for ProtoGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtoGenerator")
            .field("config", &self.config)
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl ProtoGenerator {
    /// Validate the options
    ///
    /// Fails with [`CompileError::MissingCallback`] when no completion handler
    /// was supplied.
    pub fn new(options: GeneratorOptions) -> CompileResult<Self> {
        let callback = options.callback.ok_or(CompileError::MissingCallback)?;

        Ok(Self {
            config: options.config,
            callback,
            routes: Vec::new(),
        })
    }

    /// Record a route as it is registered
    pub fn on_route(&mut self, route: RouteDescriptor) {
        debug!(method = %route.method, url = %route.url, "route registered");
        self.routes.push(route);
    }

    /// Compile all recorded routes and hand the document to the callback
    ///
    /// The service name is the configured one, else the document title. On
    /// error the callback is dropped without being called.
    pub fn on_ready(self, document: Option<&ApiDocument>) -> CompileResult<()> {
        let resolver = ServiceNameResolver::new(self.config.service_name.clone(), document);
        let text = compile(&self.routes, &resolver, &self.config)?;

        (self.callback)(text);
        Ok(())
    }
}
