//! Declarations of the emitted document.
//!
//! The compiler builds these values first and renders them afterwards, so
//! that nesting and indentation are decided in one place.
//!
//! # Structure
//!
//! - [`MessageDecl`]: a `message` block holding fields, nested messages and `oneof` blocks
//! - [`FieldDecl`]: one numbered field
//! - [`RpcDecl`]: one `rpc` with its HTTP options
//! - [`ServiceDecl`]: the `service` block
//!
//! Every nesting level is indented by [`INDENT`].

use crate::config::PresenceStyle;

/// One indentation unit.
pub const INDENT: &str = "  ";

/// Option namespace of HTTP transport annotations.
pub const HTTP_OPTION: &str = "(msp.http)";

/// Option namespace of service-level annotations.
pub const NET_OPTION: &str = "(msp.net)";

/// Option namespace of field annotations.
pub const FIELD_OPTION: &str = "(msp.field)";

/// Name of the single service block.
pub const SERVICE_NAME: &str = "Service";

/// Name of the `oneof` block inside a union wrapper.
pub const ONE_OF_NAME: &str = "types";

/// Timeout attached to every RPC, in milliseconds.
pub const RPC_TIMEOUT_MS: u32 = 5000;

/// Whether a field holds one value or a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Singular,
    Repeated,
}

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

impl Presence {
    pub fn from_required(required: bool) -> Self {
        if required {
            Presence::Required
        } else {
            Presence::Optional
        }
    }
}

/// A numbered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub index: usize,
    pub type_ref: String,
    pub cardinality: Cardinality,
    pub presence: Presence,
}

/// A `oneof` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOfDecl {
    pub name: String,
    pub items: Vec<MessageItem>,
}

/// Anything that can appear inside a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageItem {
    Field(FieldDecl),
    Message(MessageDecl),
    OneOf(OneOfDecl),
}

/// A `message` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDecl {
    pub name: String,
    pub items: Vec<MessageItem>,
}

/// An `rpc` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcDecl {
    pub name: String,
    pub request_type: String,
    pub response_type: String,
    pub templated_url: String,
    pub method: String,
    pub timeout_ms: u32,
    pub visibility: String,
    /// Source of the request payload, set for methods that carry a body.
    pub body: Option<String>,
}

/// The `service` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDecl {
    pub name: String,
    pub alias: String,
    pub rpcs: Vec<RpcDecl>,
}

impl FieldDecl {
    /// Render the field as one line, without indentation.
    pub fn render(&self, style: PresenceStyle) -> String {
        let required = self.presence == Presence::Required;
        let mut line = String::new();

        if required && style == PresenceStyle::Label {
            line.push_str("required ");
        }
        if self.cardinality == Cardinality::Repeated {
            line.push_str("repeated ");
        }
        line.push_str(&format!("{} {} = {}", self.type_ref, self.name, self.index));
        if required && style == PresenceStyle::FieldOption {
            line.push_str(&format!(" [{FIELD_OPTION}.required = true]"));
        }
        line.push(';');
        if required && style == PresenceStyle::Comment {
            line.push_str(" // required");
        }

        line
    }
}

impl MessageItem {
    fn render_into(&self, out: &mut Vec<String>, depth: usize, style: PresenceStyle) {
        match self {
            MessageItem::Field(field) => {
                out.push(format!("{}{}", INDENT.repeat(depth), field.render(style)));
            }
            MessageItem::Message(message) => message.render_into(out, depth, style),
            MessageItem::OneOf(one_of) => {
                render_block(out, depth, &format!("oneof {}", one_of.name), |out| {
                    for item in &one_of.items {
                        item.render_into(out, depth + 1, style);
                    }
                });
            }
        }
    }
}

impl MessageDecl {
    /// Create a message without items.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Render the message as a top-level block.
    pub fn render(&self, style: PresenceStyle) -> String {
        let mut out = Vec::new();
        self.render_into(&mut out, 0, style);
        out.join("\n")
    }

    fn render_into(&self, out: &mut Vec<String>, depth: usize, style: PresenceStyle) {
        render_block(out, depth, &format!("message {}", self.name), |out| {
            for item in &self.items {
                item.render_into(out, depth + 1, style);
            }
        });
    }
}

impl RpcDecl {
    fn render_into(&self, out: &mut Vec<String>, depth: usize) {
        let header = format!(
            "rpc {}( {} ) returns( {} )",
            self.name, self.request_type, self.response_type
        );
        let pad = INDENT.repeat(depth + 1);

        render_block(out, depth, &header, |out| {
            out.push(format!(
                "{pad}option {HTTP_OPTION}.templatedUrl = \"{}\";",
                self.templated_url
            ));
            out.push(format!("{pad}option {HTTP_OPTION}.method = \"{}\";", self.method));
            out.push(format!("{pad}option {HTTP_OPTION}.timeout = {};", self.timeout_ms));
            out.push(format!(
                "{pad}option {HTTP_OPTION}.visibility = \"{}\";",
                self.visibility
            ));
            if let Some(body) = &self.body {
                out.push(format!("{pad}option {HTTP_OPTION}.body = \"{body}\";"));
            }
        });
    }
}

impl ServiceDecl {
    /// Render the service block.
    pub fn render(&self) -> String {
        let mut out = Vec::new();

        render_block(&mut out, 0, &format!("service {}", self.name), |out| {
            out.push(format!(
                "{INDENT}option {NET_OPTION}.alias = \"{}\";",
                self.alias
            ));
            for rpc in &self.rpcs {
                out.push(String::new());
                rpc.render_into(out, 1);
            }
        });

        out.join("\n")
    }
}

/// Render `header {`, the body lines, and `}` at the given depth. Blocks
/// without body lines collapse to `header {}`.
fn render_block(
    out: &mut Vec<String>,
    depth: usize,
    header: &str,
    body: impl FnOnce(&mut Vec<String>),
) {
    let pad = INDENT.repeat(depth);
    let mut lines = Vec::new();
    body(&mut lines);

    if lines.is_empty() {
        out.push(format!("{pad}{header} {{}}"));
    } else {
        out.push(format!("{pad}{header} {{"));
        out.extend(lines);
        out.push(format!("{pad}}}"));
    }
}
