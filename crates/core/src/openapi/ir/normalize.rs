//! Normalization from OpenAPI spec to API IR.
//!
//! This module handles all the OpenAPI-specific logic:
//! - Classifying raw schemas into tagged [`SchemaNode`]s
//! - Flattening path items into ordered operation descriptors
//!
//! Source declaration order is carried through unchanged; nothing is sorted.

use indexmap::IndexMap;
use tracing::debug;

use crate::openapi::spec::{MediaType, OpenApiSpec, Operation, PathItem, Schema};

use super::api::{ApiGraph, Content, HttpMethod, OperationDescriptor, ScalarType, SchemaNode};
use super::utils::ref_to_type_name;

/// Normalize an OpenAPI spec into the API graph
pub fn normalize_spec(spec: &OpenApiSpec) -> ApiGraph {
    let schemas: IndexMap<String, SchemaNode> = spec
        .components
        .as_ref()
        .and_then(|c| c.schemas.as_ref())
        .map(|schemas| {
            schemas
                .iter()
                .map(|(name, schema)| (name.clone(), schema_to_node(schema)))
                .collect()
        })
        .unwrap_or_default();

    let paths: IndexMap<_, _> = spec
        .paths
        .iter()
        .map(|(path, item)| (path.clone(), normalize_path_item(path, item)))
        .collect();

    let graph = ApiGraph { schemas, paths };
    debug!(
        schemas = graph.schemas.len(),
        paths = graph.paths.len(),
        operations = graph.operations().count(),
        "Normalized OpenAPI spec."
    );
    graph
}

/// Classify a raw schema.
///
/// Precedence: `$ref`, then object (`type: object`, or no `type` with
/// declared properties), then a non-empty `enum`, then array, then scalar.
/// Objects keep their own enum values so a schema declaring both still
/// yields an enum and a message.
pub fn schema_to_node(schema: &Schema) -> SchemaNode {
    if let Some(ref_path) = &schema.ref_path {
        return SchemaNode::Reference {
            target: ref_to_type_name(ref_path),
        };
    }

    let tag = schema.primary_type();
    let enum_values = schema.enum_values.clone().unwrap_or_default();
    let has_properties = schema.properties.as_ref().is_some_and(|p| !p.is_empty());

    if tag == Some("object") || (tag.is_none() && has_properties) {
        return SchemaNode::Object {
            properties: schema
                .properties
                .as_ref()
                .map(|props| {
                    props
                        .iter()
                        .map(|(name, prop)| (name.clone(), schema_to_node(prop)))
                        .collect()
                })
                .unwrap_or_default(),
            required: schema.required.clone().unwrap_or_default(),
            enum_values,
            typed: tag.is_some(),
        };
    }

    if !enum_values.is_empty() {
        return SchemaNode::Enum {
            values: enum_values,
        };
    }

    if tag == Some("array") {
        return SchemaNode::Array {
            items: schema
                .items
                .as_deref()
                .map(|items| Box::new(schema_to_node(items))),
        };
    }

    SchemaNode::Scalar(ScalarType::from_tag(tag))
}

/// Flatten a path item into its operations, in method visiting order.
fn normalize_path_item(path: &str, item: &PathItem) -> Vec<OperationDescriptor> {
    HttpMethod::ALL
        .into_iter()
        .filter_map(|method| {
            operation_for(item, method).map(|op| normalize_operation(path, method, op))
        })
        .collect()
}

fn operation_for(item: &PathItem, method: HttpMethod) -> Option<&Operation> {
    match method {
        HttpMethod::Get => item.get.as_ref(),
        HttpMethod::Put => item.put.as_ref(),
        HttpMethod::Post => item.post.as_ref(),
        HttpMethod::Delete => item.delete.as_ref(),
        HttpMethod::Patch => item.patch.as_ref(),
        HttpMethod::Head => item.head.as_ref(),
        HttpMethod::Options => item.options.as_ref(),
        HttpMethod::Trace => item.trace.as_ref(),
    }
}

/// Normalize an operation
fn normalize_operation(path: &str, method: HttpMethod, op: &Operation) -> OperationDescriptor {
    let request_body = op
        .request_body
        .as_ref()
        .map(|body| normalize_content(body.content.as_ref()));

    let responses = op
        .responses
        .iter()
        .map(|(status, response)| (status.clone(), normalize_content(response.content.as_ref())))
        .collect();

    OperationDescriptor {
        path: path.to_string(),
        method,
        operation_id: op.operation_id.clone(),
        request_body,
        responses,
    }
}

/// Normalize media type entries; a missing `content` is an empty table.
fn normalize_content(content: Option<&IndexMap<String, MediaType>>) -> Content {
    content
        .map(|entries| {
            entries
                .iter()
                .map(|(media_type, media)| {
                    (media_type.clone(), media.schema.as_ref().map(schema_to_node))
                })
                .collect()
        })
        .unwrap_or_default()
}
