//! Code generation from API IR to proto IR.
//!
//! This module turns the normalized schema graph into enum and message
//! declarations and assembles the whole file: header, definitions in schema
//! order, then the service block built by [`codegen_service`].
//!
//! The generated [`ProtoFile`] can then be emitted to a string via the `Emit` trait.

use tracing::{debug, trace};

use crate::config::ProtoOptions;
use crate::openapi::spec::EnumValue;

use super::api::{ApiGraph, SchemaNode};
use super::service::codegen_service;
use super::type_map::map_type;
use super::types::{Definition, EnumDecl, EnumMember, FieldDecl, MessageDecl, ProtoFile};
use super::utils::{capitalize, enum_value_text, normalize_enum_constant};

/// Imports every generated file carries.
pub const STANDARD_IMPORTS: [&str; 3] = [
    "google/api/annotations.proto",
    "google/protobuf/struct.proto",
    "google/protobuf/empty.proto",
];

/// Generate a complete proto file from the API graph.
pub fn codegen_file(graph: &ApiGraph, options: &ProtoOptions) -> ProtoFile {
    let definitions = codegen_definitions(graph);
    let service = codegen_service(graph, &options.service_name);

    debug!(
        definitions = definitions.len(),
        rpcs = service.rpcs.len(),
        package = %options.package,
        "Generated proto IR."
    );

    ProtoFile {
        package: options.package.clone(),
        imports: STANDARD_IMPORTS.iter().map(|s| (*s).to_string()).collect(),
        definitions,
        service,
    }
}

/// Enum and message declarations, in schema iteration order.
pub fn codegen_definitions(graph: &ApiGraph) -> Vec<Definition> {
    let mut definitions = Vec::new();
    for (name, node) in &graph.schemas {
        if let Some(decl) = codegen_top_level_enum(name, node) {
            trace!(name = %decl.name, members = decl.members.len(), "enum");
            definitions.push(Definition::Enum(decl));
        }
        if let Some(decl) = codegen_message(name, node) {
            trace!(name = %decl.name, fields = decl.fields.len(), "message");
            definitions.push(Definition::Message(decl));
        }
    }
    definitions
}

/// Top-level enum for a schema that carries enum values.
///
/// Objects may carry values too; their message is generated separately.
pub fn codegen_top_level_enum(schema_name: &str, node: &SchemaNode) -> Option<EnumDecl> {
    let values = node.enum_values();
    if values.is_empty() {
        return None;
    }
    Some(codegen_enum(capitalize(schema_name), values))
}

/// Message for an object schema with at least one property.
///
/// Inline enums come first, then fields numbered from 1 in property order.
/// Fields not listed in `required` are marked `optional`.
pub fn codegen_message(schema_name: &str, node: &SchemaNode) -> Option<MessageDecl> {
    let SchemaNode::Object { properties, .. } = node else {
        return None;
    };
    if properties.is_empty() {
        return None;
    }

    let enums = properties
        .iter()
        .filter(|(_, prop)| !prop.enum_values().is_empty())
        .map(|(field, prop)| codegen_enum(format!("{}Enum", capitalize(field)), prop.enum_values()))
        .collect();

    let fields = properties
        .iter()
        .zip(1u32..)
        .map(|((field, prop), number)| FieldDecl {
            name: field.clone(),
            ty: map_type(field, Some(prop)),
            optional: !node.is_required(field),
            number,
        })
        .collect();

    Some(MessageDecl {
        name: capitalize(schema_name),
        enums,
        fields,
    })
}

/// Build an enum; ordinals are source positions, duplicates kept.
fn codegen_enum(name: String, values: &[EnumValue]) -> EnumDecl {
    EnumDecl {
        name,
        members: values
            .iter()
            .enumerate()
            .map(|(ordinal, value)| EnumMember {
                name: normalize_enum_constant(&enum_value_text(value)),
                ordinal,
            })
            .collect(),
    }
}
