//! Intermediate Representation for OpenAPI to proto3 code generation.
//!
//! This module defines a three-layer architecture:
//! 1. API-level IR: classified schemas and ordered operations (OpenAPI-agnostic)
//! 2. Proto IR: enums, messages, RPCs and the file that holds them
//! 3. Emission: proto IR to text via the `Emit` trait
//!
//! All OpenAPI corner cases are resolved in normalization, code generation
//! builds structured declarations, and emission is purely mechanical string
//! building.
//!
//! ## Module Structure
//!
//! - `api`: API-level IR (SchemaNode, OperationDescriptor, ApiGraph)
//! - `types`: Proto IR (EnumDecl, MessageDecl, RpcDecl, ProtoFile)
//! - `normalize`: OpenAPI spec -> API IR conversion
//! - `type_map`: field schema -> proto field type
//! - `codegen`: API IR -> enum and message declarations, file assembly
//! - `service`: operations -> RPC declarations
//! - `emit`: proto IR -> code strings (via Emit trait)
//! - `utils`: name normalization shared across modules

pub mod api;
pub mod codegen;
mod emit;
pub mod normalize;
pub mod service;
pub mod type_map;
pub mod types;
pub mod utils;

// Re-export the main entry points
pub use codegen::codegen_file;
pub use emit::Emit;
pub use normalize::normalize_spec;
