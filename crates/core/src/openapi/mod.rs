//! OpenAPI to proto3 code generator.
//!
//! This module parses OpenAPI 3.x documents (JSON or YAML) and generates a
//! single proto3 file with:
//! - Enums and messages from component schemas
//! - One service with an RPC per operation, annotated with `google.api.http`

mod emitter;
pub mod ir;
pub mod spec;

pub use emitter::{generate, generate_from_spec, generate_with_options};
