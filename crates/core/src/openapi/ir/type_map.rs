//! Schema node to proto type mapping.

use super::api::{ScalarType, SchemaNode};
use super::utils::capitalize;

/// Proto type used when nothing more specific is known.
const FALLBACK_TYPE: &str = "string";

/// Proto type of a free-form object.
const OBJECT_TYPE: &str = "map<string, string>";

/// Map a schema node to a proto field type.
///
/// `field_hint` names the inline enum a field-nested enum resolves to
/// (`status` -> `StatusEnum`); it is passed unchanged into array items, so
/// an array of enum values still points at the same inline enum. The caller
/// must have emitted that enum declaration.
///
/// The mapping never fails: unknown and free-form shapes degrade to
/// `string` or `map<string, string>`.
pub fn map_type(field_hint: &str, node: Option<&SchemaNode>) -> String {
    let Some(node) = node else {
        return FALLBACK_TYPE.to_string();
    };
    if let SchemaNode::Reference { target } = node {
        return capitalize(target);
    }
    if !node.enum_values().is_empty() {
        return format!("{}Enum", capitalize(field_hint));
    }

    match node {
        SchemaNode::Scalar(scalar) => scalar_type(scalar).to_string(),
        SchemaNode::Array { items } => {
            format!("repeated {}", map_type(field_hint, items.as_deref()))
        }
        SchemaNode::Object { typed: true, .. } => OBJECT_TYPE.to_string(),
        // Untyped property bags; enums and references are handled above.
        SchemaNode::Object { typed: false, .. }
        | SchemaNode::Enum { .. }
        | SchemaNode::Reference { .. } => FALLBACK_TYPE.to_string(),
    }
}

fn scalar_type(scalar: &ScalarType) -> &'static str {
    match scalar {
        ScalarType::Integer => "int32",
        ScalarType::Number => "double",
        ScalarType::Boolean => "bool",
        ScalarType::String => "string",
        ScalarType::Unknown(_) => FALLBACK_TYPE,
    }
}
