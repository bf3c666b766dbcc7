//! RPC declarations for routes

use crate::config::CompilerConfig;
use crate::decl::{RPC_TIMEOUT_MS, RpcDecl};
use crate::naming::{request_type_name, response_type_name};
use crate::route::{ParamBag, RouteDescriptor};
use crate::types::{EMPTY_TYPE, TEXT_PLACEHOLDER};

/// Payload source annotated on routes whose method carries a body.
pub const BODY_SOURCE: &str = "request";

/// Build the RPC declaration of one route.
///
/// The request type is the generated request message when the route has
/// input fields, else the well-known empty type. The response type is the
/// generated response message whenever the route declares a schema, else a
/// bare `string`.
pub fn compile_rpc(
    rpc_name: &str,
    route: &RouteDescriptor,
    params: &ParamBag,
    service_name: &str,
    config: &CompilerConfig,
) -> RpcDecl {
    let request_type = if params.is_empty() {
        EMPTY_TYPE.to_string()
    } else {
        request_type_name(rpc_name)
    };

    let response_type = if route.schema.is_some() {
        response_type_name(rpc_name)
    } else {
        TEXT_PLACEHOLDER.to_string()
    };

    let visibility = route
        .visibility
        .clone()
        .unwrap_or_else(|| config.default_visibility.clone());

    RpcDecl {
        name: rpc_name.to_string(),
        request_type,
        response_type,
        templated_url: format!("/{}{}", service_name, route.url),
        method: route.method.clone(),
        timeout_ms: RPC_TIMEOUT_MS,
        visibility,
        body: route.has_request_body().then(|| BODY_SOURCE.to_string()),
    }
}
