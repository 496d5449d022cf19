use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::engine::ToolId;

/// Errors that can occur while loading or validating a compatibility catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to build (read) the catalog file.
    #[error("Failed to read catalog {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize the document into catalog entries.
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Catalog {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Catalog {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl CatalogError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }

    pub(crate) fn invalid(path: PathBuf, field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            path,
            field,
            message: message.into(),
        }
    }
}

/// Reasons a configuration cannot be handed to the generation backend yet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinalizeError {
    #[error("no target server has been selected")]
    MissingServer,
    #[error("server `{server}` supports no shell tool")]
    MissingTool { server: String },
    #[error("`{tool}` is not implemented yet and cannot be generated")]
    PlaceholderTool { tool: ToolId },
    #[error("no shell mount type has been selected for `{tool}`")]
    MissingShellType { tool: ToolId },
}

/// Failures while reading a selection event script.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Failed to read event script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse event script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
