//! One compilation pass over a route list.

use crate::config::{CompilerConfig, DuplicatePolicy};
use crate::decl::MessageDecl;
use crate::error::{CompileError, CompileResult};
use crate::message::{compile_message, compile_property};
use crate::naming::{request_type_name, response_type_name, rpc_name};
use crate::route::{ParamBag, RouteDescriptor, RouteSchema};
use crate::rpc::compile_rpc;
use crate::schema::SchemaNode;
use crate::service::{ServiceNameResolver, assemble_service};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Separator between top-level blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Field name used when a response schema is not an object.
const RESPONSE_VALUE_FIELD: &str = "value";

/// Compile a complete route list into one document.
///
/// Routes are processed in the given order. Each route contributes its
/// request message (when it has input fields), its response message (when it
/// declares a schema) and one RPC. The service block comes last. The first
/// error aborts the pass and no text is produced.
pub fn compile(
    routes: &[RouteDescriptor],
    service_name: &ServiceNameResolver,
    config: &CompilerConfig,
) -> CompileResult<String> {
    let service_name = service_name.resolve()?;
    debug!(service = %service_name, routes = routes.len(), "starting compilation pass");

    let mut messages: Vec<MessageDecl> = Vec::new();
    let mut rpcs = Vec::with_capacity(routes.len());
    let mut seen = HashSet::new();

    for route in routes {
        let name = rpc_name(&route.method, &route.url);
        debug!(method = %route.method, url = %route.url, rpc = %name, "compiling route");

        if !seen.insert(name.clone()) {
            match config.duplicate_rpc_names {
                DuplicatePolicy::Allow => {
                    warn!(rpc = %name, url = %route.url, "duplicate rpc name")
                }
                DuplicatePolicy::Reject => return Err(CompileError::DuplicateRpcName(name)),
            }
        }

        let params = ParamBag::from_route(route);
        rpcs.push(compile_rpc(&name, route, &params, &service_name, config));

        if !params.is_empty() {
            let request = params.to_object_schema();
            messages.push(compile_message(&request_type_name(&name), &request)?);
        }

        if let Some(schema) = &route.schema {
            messages.push(compile_response(&name, schema, &config.response_status)?);
        }
    }

    let service = assemble_service(&service_name, rpcs);

    let blocks: Vec<String> = messages
        .iter()
        .map(|message| message.render(config.presence))
        .chain(std::iter::once(service.render()))
        .collect();

    info!(
        service = %service_name,
        messages = messages.len(),
        rpcs = service.rpcs.len(),
        "compilation pass finished"
    );

    Ok(blocks.join(BLOCK_SEPARATOR))
}

/// Compile the response message of a route that declares a schema.
///
/// Object schemas become the message body directly. A missing or empty
/// response schema yields an empty message; any other schema is wrapped in
/// a single `value` field.
fn compile_response(rpc: &str, schema: &RouteSchema, status: &str) -> CompileResult<MessageDecl> {
    let name = response_type_name(rpc);

    match schema.response_for(status).map(SchemaNode::from) {
        None | Some(SchemaNode::Any) => Ok(MessageDecl::new(name)),
        Some(SchemaNode::Object(object)) => compile_message(&name, &object),
        Some(other) => {
            let mut message = MessageDecl::new(name);
            message.items = compile_property(RESPONSE_VALUE_FIELD, &other, 0, false)?;
            Ok(message)
        }
    }
}
