//! Proto3 emitter for OpenAPI specifications.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Parse: OpenAPI JSON/YAML -> OpenApiSpec
//! 2. Normalize: OpenApiSpec -> ApiGraph (all OpenAPI logic resolved)
//! 3. Codegen: ApiGraph -> ProtoFile
//! 4. Emit: ProtoFile -> String (via Emit trait)

use tracing::debug;

use crate::config::ProtoOptions;
use crate::error::LoadError;
use crate::openapi::ir::{Emit, codegen_file, normalize_spec};
use crate::openapi::spec::OpenApiSpec;

/// Generate a proto3 file from OpenAPI JSON or YAML with default options.
pub fn generate(source: &str) -> Result<String, LoadError> {
    generate_with_options(source, &ProtoOptions::default())
}

/// Generate a proto3 file from OpenAPI JSON or YAML.
pub fn generate_with_options(source: &str, options: &ProtoOptions) -> Result<String, LoadError> {
    let spec = OpenApiSpec::parse(source)?;
    Ok(generate_from_spec(&spec, options))
}

/// Generate a proto3 file from an already parsed document. Never fails.
pub fn generate_from_spec(spec: &OpenApiSpec, options: &ProtoOptions) -> String {
    let graph = normalize_spec(spec);
    let proto = codegen_file(&graph, options).emit();
    debug!(bytes = proto.len(), "Emitted proto file.");
    proto
}
