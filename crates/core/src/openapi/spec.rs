//! OpenAPI specification structs for serde deserialization.
//!
//! This module defines the subset of the OpenAPI 3.x document that the proto
//! generator reads: component schemas and path operations. Every map is an
//! [`IndexMap`] so that declaration order in the source document survives
//! parsing; proto field numbers and enum ordinals are derived from it.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::LoadError;
use crate::openapi::ir::utils::float_text;

/// Root OpenAPI specification.
#[derive(Debug, Default, Deserialize)]
pub struct OpenApiSpec {
    /// Declared spec version (`openapi: 3.0.3`).
    pub openapi: Option<SpecVersion>,
    /// Path templates and their operations.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable components.
    pub components: Option<Components>,
}

/// The `openapi` version field.
///
/// YAML reads an unquoted `3.1` as a number, so both forms are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SpecVersion {
    /// Quoted or dotted version such as `3.0.3`.
    Text(String),
    /// Unquoted YAML version such as `3.1`.
    Number(f64),
}

impl SpecVersion {
    /// Version rendered as text; `3.0` keeps its fractional part.
    pub fn as_text(&self) -> String {
        match self {
            SpecVersion::Text(s) => s.clone(),
            SpecVersion::Number(n) => float_text(*n),
        }
    }
}

/// Components section containing reusable schemas.
#[derive(Debug, Default, Deserialize)]
pub struct Components {
    /// Named schemas, in declaration order.
    pub schemas: Option<IndexMap<String, Schema>>,
}

/// A path item containing operations for different HTTP methods.
#[derive(Debug, Default, Deserialize)]
pub struct PathItem {
    /// GET operation.
    pub get: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// TRACE operation.
    pub trace: Option<Operation>,
}

/// An API operation (endpoint).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Explicit RPC name.
    pub operation_id: Option<String>,
    /// Request body, if the operation takes one.
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code (`200`, `4XX`, `default`).
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// A request body definition.
#[derive(Debug, Default, Deserialize)]
pub struct RequestBody {
    /// Media types and their schemas.
    pub content: Option<IndexMap<String, MediaType>>,
}

/// A response definition.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    /// Media types and their schemas.
    pub content: Option<IndexMap<String, MediaType>>,
}

/// Media type content (e.g., application/json).
#[derive(Debug, Default, Deserialize)]
pub struct MediaType {
    /// Payload schema.
    pub schema: Option<Schema>,
}

/// JSON Schema definition used in OpenAPI.
///
/// Only the keywords that influence the generated proto are kept; everything
/// else in the document is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// The type of the schema (string, number, integer, boolean, object, array).
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Reference to another schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Properties for object types, in declaration order.
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names for object types.
    pub required: Option<Vec<String>>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Enum values, in declaration order.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,
}

/// A raw enum value.
///
/// Anything that is not a scalar (objects, arrays) is kept as JSON so the
/// document still loads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// String value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Non-integral or out-of-range number.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Explicit `null`.
    Null,
    /// Object or array value.
    Other(serde_json::Value),
}

/// Schema type can be a single type or an array of types (3.1 nullable form).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `type: string`
    Single(String),
    /// `type: [string, "null"]`
    Multiple(Vec<String>),
}

impl OpenApiSpec {
    /// Parse an OpenAPI spec from JSON or YAML text.
    ///
    /// Text whose first non-whitespace character is `{` is tried as JSON
    /// first and falls back to YAML (flow mappings); anything else is YAML.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let trimmed = source.trim_start();
        if trimmed.is_empty() {
            return Err(LoadError::NullDocument);
        }

        let spec = if trimmed.starts_with('{') {
            Self::from_json(source)
                .or_else(|json_err| Self::from_yaml(source).map_err(|_| json_err))?
        } else {
            Self::from_yaml(source)?
        };

        let Some(spec) = spec else {
            return Err(LoadError::NullDocument);
        };
        spec.check_version()?;
        Ok(spec)
    }

    /// Parse a JSON document. `null` yields `Ok(None)`.
    pub fn from_json(json: &str) -> Result<Option<Self>, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::Parse(format!("invalid JSON: {e}")))
    }

    /// Parse a YAML document. `null` / `~` yields `Ok(None)`.
    pub fn from_yaml(yaml: &str) -> Result<Option<Self>, LoadError> {
        serde_yaml::from_str(yaml).map_err(|e| LoadError::Parse(format!("invalid YAML: {e}")))
    }

    fn check_version(&self) -> Result<(), LoadError> {
        let version = self
            .openapi
            .as_ref()
            .map(SpecVersion::as_text)
            .unwrap_or_default();
        if version.starts_with("3.") {
            Ok(())
        } else if version.is_empty() {
            Err(LoadError::UnsupportedVersion(
                "attribute openapi is missing".to_string(),
            ))
        } else {
            Err(LoadError::UnsupportedVersion(format!(
                "OpenAPI version {version} not supported (expected 3.x)"
            )))
        }
    }
}

impl Schema {
    /// The first non-null type tag, if any.
    pub fn primary_type(&self) -> Option<&str> {
        match &self.schema_type {
            Some(SchemaType::Single(t)) => Some(t.as_str()),
            Some(SchemaType::Multiple(types)) => types
                .iter()
                .map(String::as_str)
                .find(|t| *t != "null"),
            None => None,
        }
    }
}
