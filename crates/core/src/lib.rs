//! OpenAPI 3.x to proto3 IDL translation.
//!
//! ```no_run
//! let proto = oasproto_core::generate(r#"{ "openapi": "3.0.0" }"#)?;
//! assert!(proto.starts_with("syntax = \"proto3\";"));
//! # Ok::<(), oasproto_core::LoadError>(())
//! ```

pub mod config;
pub mod error;
pub mod openapi;

pub use config::{ConfigError, ProtoOptions};
pub use error::LoadError;
pub use openapi::{generate, generate_from_spec, generate_with_options};
