//! Naming helpers for proto code generation.
//!
//! Shared by the type mapper and the enum/message/service emitters.

use crate::openapi::spec::EnumValue;

/// Capitalize the first character of a string; the rest is left untouched.
///
/// Empty input is returned unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Turn a raw enum value into a proto enum constant name.
///
/// Uppercases the whole value, then replaces every character outside
/// `[A-Z0-9]` with `_`. Distinct values may collide; no deduplication.
pub fn normalize_enum_constant(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Raw text of an enum value before normalization.
pub fn enum_value_text(v: &EnumValue) -> String {
    match v {
        EnumValue::String(s) => s.clone(),
        EnumValue::Integer(n) => n.to_string(),
        EnumValue::Float(f) => float_text(*f),
        EnumValue::Bool(b) => b.to_string(),
        EnumValue::Null => "null".to_string(),
        EnumValue::Other(value) => value.to_string(),
    }
}

/// Display form of a float that keeps `.0` on whole values (`1.0`, not `1`).
pub fn float_text(f: f64) -> String {
    let text = f.to_string();
    if f.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Extract the schema name from a `$ref` path (text after the last `/`).
pub fn ref_to_type_name(ref_path: &str) -> String {
    ref_path.rsplit('/').next().unwrap_or(ref_path).to_string()
}

/// Synthesize an RPC name from method and path template.
///
/// `POST /users/{id}/orders` becomes `PostUsers_id_orders`: every `{`, `}`
/// and `/` becomes `_`, runs of `_` collapse to one and edge underscores are
/// dropped, then method and path part are each capitalized and joined.
pub fn synthesize_rpc_name(method_lower: &str, path: &str) -> String {
    let mut flattened = String::with_capacity(path.len());
    for c in path.chars() {
        let c = if matches!(c, '{' | '}' | '/') { '_' } else { c };
        if c != '_' || !flattened.ends_with('_') {
            flattened.push(c);
        }
    }
    let flattened = flattened.trim_matches('_');
    format!("{}{}", capitalize(method_lower), capitalize(flattened))
}
