//! Naming convention utilities for RPC and message identifiers.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `GET`, `/users/:id` | [`rpc_name`] | `GetUsersById` |
//! | `word` | [`capitalize`] | `Word` |
//! | `GetUsers` | [`request_type_name`] | `GetUsersRequest` |

/// Marker prefix of a path parameter in a URL template.
pub const PARAM_MARKER: char = ':';

/// Replaces [`PARAM_MARKER`] in RPC names.
pub const PARAM_PREFIX: &str = "By";

/// Derive the PascalCase RPC identifier for a route.
///
/// The URL template is split on `/` and `-`, the method becomes the first
/// token, empty tokens are dropped, and every token is capitalized with the
/// remainder lower-cased. Each path parameter marker becomes `By` followed by
/// the capitalized parameter name.
///
/// # Examples
///
/// ```
/// use routeproto_core::naming::rpc_name;
///
/// assert_eq!(rpc_name("GET", "/users/:id"), "GetUsersById");
/// assert_eq!(rpc_name("post", "/user-groups"), "PostUserGroups");
/// assert_eq!(rpc_name("DELETE", "/"), "Delete");
/// ```
pub fn rpc_name(method: &str, url: &str) -> String {
    std::iter::once(method)
        .chain(url.split('/').flat_map(|segment| segment.split('-')))
        .filter(|token| !token.is_empty())
        .map(normalize_token)
        .collect()
}

/// Normalize one URL token, expanding parameter markers.
fn normalize_token(token: &str) -> String {
    let mut parts = token.split(PARAM_MARKER);
    let mut result = parts.next().map(capitalize_lower).unwrap_or_default();

    for param in parts {
        result.push_str(PARAM_PREFIX);
        result.push_str(&capitalize_lower(param));
    }

    result
}

/// Capitalize the first letter and lower-case the rest.
fn capitalize_lower(s: &str) -> String {
    capitalize(&s.to_lowercase())
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use routeproto_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Name of the request message of an RPC.
pub fn request_type_name(rpc: &str) -> String {
    format!("{rpc}Request")
}

/// Name of the response message of an RPC.
pub fn response_type_name(rpc: &str) -> String {
    format!("{rpc}Response")
}

/// Name of the nested message generated for an object-typed field.
pub fn object_type_name(field: &str) -> String {
    format!("{field}Object")
}

/// Name of the wrapper message generated for a union-typed field.
pub fn one_of_type_name(field: &str) -> String {
    format!("{field}OneOf")
}
