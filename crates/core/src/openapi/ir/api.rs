//! API-level IR: the normalized view of an OpenAPI document.
//!
//! This is the input graph of the proto translation:
//! - SchemaNode: a tagged schema (scalar, array, object, reference, enum)
//! - OperationDescriptor: one (path, method) operation
//! - ApiGraph: named component schemas plus paths, both in source order

use indexmap::IndexMap;

use crate::openapi::spec::EnumValue;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Order in which operations of one path item are visited.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Put,
        Self::Post,
        Self::Delete,
        Self::Patch,
        Self::Head,
        Self::Options,
        Self::Trace,
    ];

    /// Uppercase method name, as used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Lowercase form used in `google.api.http` rules and synthesized names.
    pub fn as_lower(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }

    /// Whether the HTTP rule maps the request message onto the body.
    pub fn carries_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// Scalar type tag of a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarType {
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `string`
    String,
    /// Absent or unrecognised `type` keyword (kept for diagnostics).
    Unknown(Option<String>),
}

impl ScalarType {
    /// Classify a `type` tag that is not `object` or `array`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("integer") => ScalarType::Integer,
            Some("number") => ScalarType::Number,
            Some("boolean") => ScalarType::Boolean,
            Some("string") => ScalarType::String,
            other => ScalarType::Unknown(other.map(str::to_string)),
        }
    }
}

/// A schema, classified into exactly one kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Scalar value.
    Scalar(ScalarType),
    /// `type: array`.
    Array {
        /// `None` when the array declares no item schema.
        items: Option<Box<SchemaNode>>,
    },
    /// `type: object`, or an untyped schema that declares properties.
    Object {
        /// Declared properties, in order.
        properties: IndexMap<String, SchemaNode>,
        /// Property names listed in `required`.
        required: Vec<String>,
        /// Enum values declared next to the properties (usually empty).
        enum_values: Vec<EnumValue>,
        /// Whether `type: object` was declared. An untyped property bag
        /// used as a field is a plain `string`.
        typed: bool,
    },
    /// Reference to a named component schema.
    Reference {
        /// Last path segment of `$ref`.
        target: String,
    },
    /// Enumeration of raw values.
    Enum {
        /// Values in declaration order, never empty.
        values: Vec<EnumValue>,
    },
}

impl SchemaNode {
    /// Whether `name` is listed in this object's required set.
    pub fn is_required(&self, name: &str) -> bool {
        match self {
            SchemaNode::Object { required, .. } => required.iter().any(|r| r == name),
            _ => false,
        }
    }

    /// Enum values carried by this node; empty when it declares none.
    pub fn enum_values(&self) -> &[EnumValue] {
        match self {
            SchemaNode::Enum { values } => values,
            SchemaNode::Object { enum_values, .. } => enum_values,
            _ => &[],
        }
    }
}

/// Content entries of a request or response: media type -> schema.
pub type Content = IndexMap<String, Option<SchemaNode>>;

/// One operation under a path template.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    /// URL path template (e.g., "/users/{id}")
    pub path: String,
    /// HTTP method of the operation
    pub method: HttpMethod,
    /// Explicit operation id, possibly blank
    pub operation_id: Option<String>,
    /// Request body content (None = no request body)
    pub request_body: Option<Content>,
    /// Responses keyed by status code, in declaration order
    pub responses: IndexMap<String, Content>,
}

/// Normalized API graph
#[derive(Debug, Clone, Default)]
pub struct ApiGraph {
    /// Component schemas by name
    pub schemas: IndexMap<String, SchemaNode>,
    /// Operations grouped by path template, methods in visiting order
    pub paths: IndexMap<String, Vec<OperationDescriptor>>,
}

impl ApiGraph {
    /// All operations, path by path.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.paths.values().flatten()
    }
}
