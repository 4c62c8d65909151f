//! Proto IR types for code generation.
//!
//! This module defines the structure of the generated proto3 file:
//! - ProtoFile: header, top-level definitions, service
//! - Definition: a top-level enum or message
//! - RpcDecl: one service method with its HTTP rule

use super::api::HttpMethod;

/// Enum constant with its ordinal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Normalized constant name
    pub name: String,
    /// Position of the raw value in the source list
    pub ordinal: usize,
}

/// enum Foo { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// Enum name
    pub name: String,
    /// Constants in declaration order
    pub members: Vec<EnumMember>,
}

/// Message field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Property name as written
    pub name: String,
    /// Proto type text (e.g., `repeated int32`)
    pub ty: String,
    /// Emitted with the `optional` label
    pub optional: bool,
    /// Field number, starting at 1
    pub number: u32,
}

/// message Foo { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDecl {
    /// Message name
    pub name: String,
    /// Enums scoped to this message, emitted before the fields
    pub enums: Vec<EnumDecl>,
    /// Fields in property order
    pub fields: Vec<FieldDecl>,
}

/// Top-level definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// Top-level enum
    Enum(EnumDecl),
    /// Top-level message
    Message(MessageDecl),
}

/// `option (google.api.http) = { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRule {
    /// Verb key of the rule
    pub method: HttpMethod,
    /// Path template, placeholders kept verbatim
    pub path: String,
    /// Whether `body: "*"` is emitted
    pub body: bool,
}

/// rpc Foo (Req) returns (Resp) { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcDecl {
    /// RPC name
    pub name: String,
    /// Request message type
    pub request: String,
    /// Response message type
    pub response: String,
    /// Transcoding annotation
    pub http: HttpRule,
}

/// service Foo { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDecl {
    /// Service name
    pub name: String,
    /// RPCs, path by path
    pub rpcs: Vec<RpcDecl>,
}

/// Complete proto3 file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoFile {
    /// Package statement value
    pub package: String,
    /// Imported proto paths, in order
    pub imports: Vec<String>,
    /// Enums and messages in schema order
    pub definitions: Vec<Definition>,
    /// The single service block
    pub service: ServiceDecl,
}
