//! Errors raised while loading an OpenAPI document.
//!
//! The translation engine itself is total over a parsed document; only the
//! loading step can fail.

use thiserror::Error;

/// Failure to turn source text into an [`OpenApiSpec`](crate::openapi::spec::OpenApiSpec).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The text is not valid JSON/YAML or does not have the expected shape.
    #[error("{0}")]
    Parse(String),
    /// The document is empty or the literal `null`.
    #[error("result is null")]
    NullDocument,
    /// The `openapi` field is missing or not a 3.x version.
    #[error("{0}")]
    UnsupportedVersion(String),
}
