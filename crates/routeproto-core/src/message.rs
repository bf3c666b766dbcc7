//! Translation of schema nodes into message declarations.
//!
//! Each property of an object schema becomes one numbered field. Properties
//! whose schema has structure of its own additionally produce a nested
//! message, placed right before the field that references it:
//!
//! | Schema | Nested message | Field |
//! |--------|----------------|-------|
//! | object | `<name>Object` | `<name>Object <name> = i;` |
//! | array of objects | `<name>Object` | `repeated <name>Object <name> = i;` |
//! | array of primitives | | `repeated <scalar> <name> = i;` |
//! | union | `<name>OneOf` | `<name> <name> = i;` |
//! | `{}` | | `google.protobuf.Any <name> = i;` |
//! | primitive | | `<scalar> <name> = i;` |
//!
//! Field numbers are the 0-based positions of the properties in their
//! enclosing object. Any other shape fails with
//! [`CompileError::InvalidPropertyType`].

use crate::decl::{
    Cardinality, FieldDecl, MessageDecl, MessageItem, ONE_OF_NAME, OneOfDecl, Presence,
};
use crate::error::{CompileError, CompileResult};
use crate::naming::{object_type_name, one_of_type_name};
use crate::schema::{ObjectSchema, SchemaNode};
use crate::types::{ANY_TYPE, ScalarType};
use tracing::trace;

/// Compile an object schema into a message with one field per property.
pub fn compile_message(name: &str, object: &ObjectSchema) -> CompileResult<MessageDecl> {
    let mut message = MessageDecl::new(name);

    for (index, (field, node)) in object.properties.iter().enumerate() {
        let items = compile_property(field, node, index, object.is_required(field))?;
        message.items.extend(items);
    }

    Ok(message)
}

/// Compile one property into its field and any nested messages it needs.
pub fn compile_property(
    name: &str,
    node: &SchemaNode,
    index: usize,
    required: bool,
) -> CompileResult<Vec<MessageItem>> {
    trace!(field = name, index, required, schema = %node.to_value(), "compiling property");

    let presence = Presence::from_required(required);

    let items = match node {
        SchemaNode::Object(object) => {
            let nested = compile_message(&object_type_name(name), object)?;
            vec![
                MessageItem::Message(nested),
                field(name, index, object_type_name(name), Cardinality::Singular, presence),
            ]
        }

        SchemaNode::Array { items, .. } => match items.as_ref() {
            SchemaNode::Object(object) => {
                let nested = compile_message(&object_type_name(name), object)?;
                vec![
                    MessageItem::Message(nested),
                    field(name, index, object_type_name(name), Cardinality::Repeated, presence),
                ]
            }
            SchemaNode::Primitive { kind, .. } => {
                let scalar = scalar_for(name, kind, node)?;
                vec![field(name, index, scalar.to_string(), Cardinality::Repeated, presence)]
            }
            _ => return Err(CompileError::invalid_property(name, &node.to_value())),
        },

        SchemaNode::Union { variants } => compile_union(name, variants, index, presence)?,

        // Any-typed fields never carry a presence qualifier
        SchemaNode::Any => vec![field(
            name,
            index,
            ANY_TYPE.to_string(),
            Cardinality::Singular,
            Presence::Optional,
        )],

        SchemaNode::Primitive { kind, .. } => {
            let scalar = scalar_for(name, kind, node)?;
            vec![field(name, index, scalar.to_string(), Cardinality::Singular, presence)]
        }

        SchemaNode::Unrecognized(raw) => {
            return Err(CompileError::invalid_property(name, raw));
        }
    };

    Ok(items)
}

/// Compile a union into a `<name>OneOf` wrapper and the field referencing it.
///
/// The wrapper holds a `oneof` with one choice per variant, named after the
/// variant's declared type, and an inner message `<name>` with a repeated
/// field of the wrapper type. The outer field references `<name>`.
fn compile_union(
    name: &str,
    variants: &[SchemaNode],
    index: usize,
    presence: Presence,
) -> CompileResult<Vec<MessageItem>> {
    let wrapper_name = one_of_type_name(name);

    let mut choices = Vec::new();
    for (position, variant) in variants.iter().enumerate() {
        let choice_name = variant
            .declared_type()
            .map(str::to_string)
            .unwrap_or_else(|| format!("variant{position}"));
        choices.extend(compile_property(&choice_name, variant, position, false)?);
    }

    let inner = MessageDecl {
        name: name.to_string(),
        items: vec![field(
            name,
            0,
            wrapper_name.clone(),
            Cardinality::Repeated,
            Presence::Optional,
        )],
    };

    let wrapper = MessageDecl {
        name: wrapper_name,
        items: vec![
            MessageItem::OneOf(OneOfDecl {
                name: ONE_OF_NAME.to_string(),
                items: choices,
            }),
            MessageItem::Message(inner),
        ],
    };

    Ok(vec![
        MessageItem::Message(wrapper),
        field(name, index, name.to_string(), Cardinality::Singular, presence),
    ])
}

fn scalar_for(name: &str, kind: &str, node: &SchemaNode) -> CompileResult<ScalarType> {
    ScalarType::for_kind(kind).ok_or_else(|| CompileError::invalid_property(name, &node.to_value()))
}

fn field(
    name: &str,
    index: usize,
    type_ref: String,
    cardinality: Cardinality,
    presence: Presence,
) -> MessageItem {
    MessageItem::Field(FieldDecl {
        name: name.to_string(),
        index,
        type_ref,
        cardinality,
        presence,
    })
}
