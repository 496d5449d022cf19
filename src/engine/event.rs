//! Discrete user selections, the input boundary of a [`Session`](super::Session).
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::{
    threshold::RuntimeVersion,
    tool::{ServerId, ShellType, ToolField, ToolId},
};
use crate::lib::errors::EventError;

/// One user selection, e.g. `{"event": "server", "value": "Tomcat"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum SelectionEvent {
    Server(ServerId),
    Tool(ToolId),
    RuntimeVersion(RuntimeVersion),
    BypassModule(bool),
    ShellType(ShellType),
    Field { field: ToolField, value: String },
    UrlPattern(String),
    ShellClassName(String),
    InjectorClassName(String),
    Debug(bool),
    Shrink(bool),
}

impl SelectionEvent {
    pub const fn kind(&self) -> &'static str {
        match self {
            SelectionEvent::Server(_) => "server",
            SelectionEvent::Tool(_) => "tool",
            SelectionEvent::RuntimeVersion(_) => "runtime_version",
            SelectionEvent::BypassModule(_) => "bypass_module",
            SelectionEvent::ShellType(_) => "shell_type",
            SelectionEvent::Field { .. } => "field",
            SelectionEvent::UrlPattern(_) => "url_pattern",
            SelectionEvent::ShellClassName(_) => "shell_class_name",
            SelectionEvent::InjectorClassName(_) => "injector_class_name",
            SelectionEvent::Debug(_) => "debug",
            SelectionEvent::Shrink(_) => "shrink",
        }
    }
}

/// Read a JSON array of events.
pub fn read_event_script(path: &Path) -> Result<Vec<SelectionEvent>, EventError> {
    let content = fs::read_to_string(path).map_err(|source| EventError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| EventError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
