//! The reconciled configuration record.
//!
//! Fields are private: the record changes only through the
//! [`Reconciler`](super::Reconciler) transitions.
use serde::Serialize;

use super::{
    reset::all_tool_fields,
    threshold::RuntimeVersion,
    tool::{ServerId, ShellType, ToolField, ToolId},
};

/// Credentials, headers and parameter names owned by individual tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    godzilla_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    godzilla_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    behinder_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ant_sword_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command_param_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_value: Option<String>,
}

impl ToolFields {
    fn slot(&mut self, field: ToolField) -> &mut Option<String> {
        match field {
            ToolField::GodzillaKey => &mut self.godzilla_key,
            ToolField::GodzillaPass => &mut self.godzilla_pass,
            ToolField::BehinderPass => &mut self.behinder_pass,
            ToolField::AntSwordPass => &mut self.ant_sword_pass,
            ToolField::CommandParamName => &mut self.command_param_name,
            ToolField::HeaderName => &mut self.header_name,
            ToolField::HeaderValue => &mut self.header_value,
        }
    }

    pub fn get(&self, field: ToolField) -> Option<&str> {
        let value = match field {
            ToolField::GodzillaKey => &self.godzilla_key,
            ToolField::GodzillaPass => &self.godzilla_pass,
            ToolField::BehinderPass => &self.behinder_pass,
            ToolField::AntSwordPass => &self.ant_sword_pass,
            ToolField::CommandParamName => &self.command_param_name,
            ToolField::HeaderName => &self.header_name,
            ToolField::HeaderValue => &self.header_value,
        };
        value.as_deref()
    }

    pub(super) fn set(&mut self, field: ToolField, value: Option<String>) {
        *self.slot(field) = value;
    }

    pub(super) fn clear(&mut self, field: ToolField) {
        self.slot(field).take();
    }

    /// Fields currently holding a value.
    pub fn populated(&self) -> impl Iterator<Item = (ToolField, &str)> + '_ {
        all_tool_fields()
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    pub fn is_clear(&self) -> bool {
        self.populated().next().is_none()
    }
}

/// Shell generation parameters kept consistent across selection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) server: Option<ServerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) target_runtime_version: Option<RuntimeVersion>,
    pub(super) bypass_module: bool,
    pub(super) debug: bool,
    pub(super) shrink: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) shell_tool: Option<ToolId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) shell_type: Option<ShellType>,
    pub(super) url_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) shell_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) injector_class_name: Option<String>,
    #[serde(flatten)]
    pub(super) tool_fields: ToolFields,
}

impl Configuration {
    /// Empty record: nothing selected, every switch off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server(&self) -> Option<&ServerId> {
        self.server.as_ref()
    }

    pub fn target_runtime_version(&self) -> Option<RuntimeVersion> {
        self.target_runtime_version
    }

    pub fn bypass_module(&self) -> bool {
        self.bypass_module
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn shrink(&self) -> bool {
        self.shrink
    }

    pub fn shell_tool(&self) -> Option<ToolId> {
        self.shell_tool
    }

    pub fn shell_type(&self) -> Option<&ShellType> {
        self.shell_type.as_ref()
    }

    pub fn url_pattern(&self) -> &str {
        &self.url_pattern
    }

    pub fn shell_class_name(&self) -> Option<&str> {
        self.shell_class_name.as_deref()
    }

    pub fn injector_class_name(&self) -> Option<&str> {
        self.injector_class_name.as_deref()
    }

    pub fn tool_field(&self, field: ToolField) -> Option<&str> {
        self.tool_fields.get(field)
    }

    pub fn tool_fields(&self) -> &ToolFields {
        &self.tool_fields
    }

    /// Drop everything that is only valid for one tool/shell mechanism.
    pub(super) fn clear_tool_state(&mut self) {
        self.shell_type = None;
        self.url_pattern.clear();
        self.shell_class_name = None;
        self.injector_class_name = None;
        for field in all_tool_fields() {
            self.tool_fields.clear(field);
        }
    }
}
