//! Structural schema nodes.
//!
//! Route schemas arrive as loosely shaped JSON. This module classifies each
//! node into one of the shapes the message compiler understands. The
//! classification order matters and mirrors how route schemas are written in
//! practice:
//!
//! 1. `"type": "object"` is an [`ObjectSchema`], even without `properties`
//! 2. `"type": "array"` with `items` is an array
//! 3. a `oneOf` list is a union
//! 4. an empty object `{}` accepts any value
//! 5. any other `"type"` string is a primitive kind
//!
//! Everything else is kept as [`SchemaNode::Unrecognized`] so that the
//! compiler can report it together with the name of the offending field.
//! Primitive kinds are not checked here; the type table decides which kinds
//! exist.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A single node of a route schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum SchemaNode {
    /// Scalar value such as `number` or `string`.
    Primitive { kind: String, raw: Value },

    /// Object with ordered properties.
    Object(ObjectSchema),

    /// Homogeneous list.
    Array { items: Box<SchemaNode>, raw: Value },

    /// Exactly one of several alternatives.
    Union { variants: Vec<SchemaNode> },

    /// Empty schema; any value is accepted.
    Any,

    /// A shape no other variant matches. Holds the raw JSON.
    Unrecognized(Value),
}

/// Object schema with properties in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Properties in declaration order.
    pub properties: Vec<(String, SchemaNode)>,

    /// Names of required properties.
    pub required: BTreeSet<String>,
}

impl SchemaNode {
    /// The `type` keyword this node was declared with, if any.
    pub fn declared_type(&self) -> Option<&str> {
        match self {
            SchemaNode::Primitive { kind, .. } => Some(kind),
            SchemaNode::Object(_) => Some("object"),
            SchemaNode::Array { .. } => Some("array"),
            SchemaNode::Union { .. } | SchemaNode::Any => None,
            SchemaNode::Unrecognized(raw) => raw.get("type").and_then(Value::as_str),
        }
    }

    /// JSON view of this node for diagnostics.
    ///
    /// Primitive, array and unrecognized nodes return the schema exactly as
    /// written. Other shapes are rebuilt from their parts.
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::Primitive { raw, .. } | SchemaNode::Array { raw, .. } => raw.clone(),
            SchemaNode::Object(object) => object.to_value(),
            SchemaNode::Union { variants } => serde_json::json!({
                "oneOf": variants.iter().map(SchemaNode::to_value).collect::<Vec<_>>()
            }),
            SchemaNode::Any => Value::Object(Map::new()),
            SchemaNode::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl From<&Value> for SchemaNode {
    fn from(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return SchemaNode::Unrecognized(value.clone());
        };

        let declared = map.get("type").and_then(Value::as_str);

        if declared == Some("object") {
            return SchemaNode::Object(ObjectSchema::from_map(map));
        }

        if declared == Some("array") {
            return match map.get("items") {
                Some(items) => SchemaNode::Array {
                    items: Box::new(SchemaNode::from(items)),
                    raw: value.clone(),
                },
                None => SchemaNode::Unrecognized(value.clone()),
            };
        }

        if let Some(Value::Array(variants)) = map.get("oneOf") {
            return SchemaNode::Union {
                variants: variants.iter().map(SchemaNode::from).collect(),
            };
        }

        if map.is_empty() {
            return SchemaNode::Any;
        }

        match declared {
            Some(kind) => SchemaNode::Primitive {
                kind: kind.to_string(),
                raw: value.clone(),
            },
            None => SchemaNode::Unrecognized(value.clone()),
        }
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        SchemaNode::from(&value)
    }
}

impl ObjectSchema {
    /// Build an object schema from the `properties` and `required` keywords
    /// of a JSON object. Missing keywords mean no properties and nothing
    /// required.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let properties = map
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, node)| (name.clone(), SchemaNode::from(node)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            properties,
            required: required_names(map.get("required")),
        }
    }

    /// Whether the named property is required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    fn to_value(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, node)| (name.clone(), node.to_value()))
            .collect();

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": self.required.iter().collect::<Vec<_>>(),
        })
    }
}

/// Collect the string entries of a `required` keyword.
pub(crate) fn required_names(value: Option<&Value>) -> BTreeSet<String> {
    value
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
