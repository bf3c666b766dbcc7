//! Route descriptors and request parameter merging

use crate::schema::{ObjectSchema, SchemaNode, required_names};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// One registered HTTP endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// HTTP method, e.g. `GET`
    pub method: String,

    /// URL template, path parameters prefixed with `:`
    pub url: String,

    /// Optional schema slots
    #[serde(default)]
    pub schema: Option<RouteSchema>,

    /// Overrides the configured default visibility for this route
    #[serde(default)]
    pub visibility: Option<String>,
}

/// Schema slots declared on a route
///
/// Slots are kept as raw JSON: request slots only contribute their
/// `properties` and `required` keywords, and the response slot is keyed by
/// status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSchema {
    #[serde(default)]
    pub body: Option<Value>,

    #[serde(default)]
    pub params: Option<Value>,

    #[serde(default)]
    pub querystring: Option<Value>,

    #[serde(default)]
    pub response: Option<Value>,
}

impl RouteDescriptor {
    /// Create a route without a schema
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            schema: None,
            visibility: None,
        }
    }

    /// Attach a schema
    pub fn with_schema(mut self, schema: RouteSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Override the visibility tag
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }

    /// Whether the method carries a request body
    pub fn has_request_body(&self) -> bool {
        ["POST", "PUT", "PATCH"]
            .iter()
            .any(|verb| self.method.eq_ignore_ascii_case(verb))
    }
}

impl RouteSchema {
    /// Schema declared for the given response status, if any
    pub fn response_for(&self, status: &str) -> Option<&Value> {
        self.response.as_ref()?.get(status)
    }
}

/// Merged input fields of one route's request message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamBag {
    properties: Map<String, Value>,
    required: BTreeSet<String>,
}

impl ParamBag {
    /// Merge body, path parameters and query string, in that order
    ///
    /// A property declared in more than one slot keeps the position of its
    /// first declaration and takes the schema of its last one.
    pub fn from_route(route: &RouteDescriptor) -> Self {
        let mut bag = Self::default();

        if let Some(schema) = &route.schema {
            for slot in [&schema.body, &schema.params, &schema.querystring]
                .into_iter()
                .flatten()
            {
                bag.absorb(slot);
            }
        }

        bag
    }

    /// Add the properties and required names of one schema slot
    pub fn absorb(&mut self, slot: &Value) {
        if let Some(properties) = slot.get("properties").and_then(Value::as_object) {
            for (name, node) in properties {
                self.properties.insert(name.clone(), node.clone());
            }
        }
        self.required.extend(required_names(slot.get("required")));
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Classify the merged properties into an object schema
    pub fn to_object_schema(&self) -> ObjectSchema {
        ObjectSchema {
            properties: self
                .properties
                .iter()
                .map(|(name, node)| (name.clone(), SchemaNode::from(node)))
                .collect(),
            required: self.required.clone(),
        }
    }
}
