//! Generator configuration.
//!
//! Options can come from a TOML file:
//!
//! ```toml
//! [proto]
//! package = "acme.v1"
//! service = "AcmeService"
//! ```
//!
//! Missing keys keep their defaults, which reproduce the fixed header
//! (`package generated;`, `service ApiService`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default proto package.
pub const DEFAULT_PACKAGE: &str = "generated";

/// Default service name.
pub const DEFAULT_SERVICE: &str = "ApiService";

/// Failure to load a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Options controlling the generated proto file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProtoOptions {
    /// Value of the `package` statement.
    pub package: String,
    /// Name of the generated service block.
    #[serde(rename = "service")]
    pub service_name: String,
}

impl Default for ProtoOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            service_name: DEFAULT_SERVICE.to_string(),
        }
    }
}

/// On-disk layout of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    proto: ProtoOptions,
}

impl ProtoOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(source).map(|file| file.proto)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
