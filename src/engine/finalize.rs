//! Handoff of a finished configuration to the generation backend.
use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    record::Configuration,
    reset::fields_to_clear_for,
    threshold::RuntimeVersion,
    tool::{ServerId, ShellType, ToolId},
};
use crate::lib::errors::FinalizeError;

/// URL pattern used when the user leaves the field blank.
pub const DEFAULT_URL_PATTERN: &str = "/*";

/// Everything the generation backend needs to build one shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub server: ServerId,
    pub shell_tool: ToolId,
    pub shell_type: ShellType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_runtime_version: Option<RuntimeVersion>,
    pub bypass_module: bool,
    pub debug: bool,
    pub shrink: bool,
    pub url_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injector_class_name: Option<String>,
    /// Values of the fields the tool owns, keyed by camelCase field name.
    pub tool_options: BTreeMap<String, String>,
}

impl Configuration {
    /// Build the backend request, or explain what is still missing.
    pub fn finalize(&self) -> Result<GenerationRequest, FinalizeError> {
        let server = self.server.clone().ok_or(FinalizeError::MissingServer)?;
        let tool = self.shell_tool.ok_or_else(|| FinalizeError::MissingTool {
            server: server.to_string(),
        })?;
        if tool.is_placeholder() {
            return Err(FinalizeError::PlaceholderTool { tool });
        }
        let shell_type = self
            .shell_type
            .clone()
            .ok_or(FinalizeError::MissingShellType { tool })?;

        let url_pattern = match self.url_pattern.trim() {
            "" => DEFAULT_URL_PATTERN.to_string(),
            pattern => pattern.to_string(),
        };
        let tool_options = fields_to_clear_for(tool)
            .iter()
            .filter_map(|field| {
                self.tool_fields
                    .get(*field)
                    .map(|value| (field.to_string(), value.to_string()))
            })
            .collect();

        Ok(GenerationRequest {
            server,
            shell_tool: tool,
            shell_type,
            target_runtime_version: self.target_runtime_version,
            bypass_module: self.bypass_module,
            debug: self.debug,
            shrink: self.shrink,
            url_pattern,
            shell_class_name: self.shell_class_name.clone(),
            injector_class_name: self.injector_class_name.clone(),
            tool_options,
        })
    }
}
