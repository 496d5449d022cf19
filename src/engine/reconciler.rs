//! State transitions that keep a [`Configuration`] consistent with the catalog.
use serde::Serialize;
use tracing::{debug, info};

use super::{
    record::Configuration,
    reset::{fields_to_clear_for, owns_field},
    threshold::{derive_bypass_module, minimum_runtime_for, RuntimeVersion},
    tool::{ServerId, ShellType, ToolField, ToolId},
};
use crate::catalog::{CompatibilityCatalog, ToolMap};

const TARGET: &str = "memshell_config::reconciler";

/// Selectable values derived from `(server, shellTool)`; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOptions {
    pub tools: Vec<ToolId>,
    pub shell_types: Vec<ShellType>,
}

/// Applies selection changes against a catalog.
///
/// Every transition takes the current record by value and returns the next
/// one. Transitions never fail; requests that do not fit the current
/// selection leave the record unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'c> {
    catalog: &'c CompatibilityCatalog,
}

impl<'c> Reconciler<'c> {
    pub fn new(catalog: &'c CompatibilityCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c CompatibilityCatalog {
        self.catalog
    }

    /// Tool map of the selected server; `None` until a server is chosen.
    fn tool_map(&self, config: &Configuration) -> Option<&'c ToolMap> {
        config
            .server
            .as_ref()
            .map(|server| self.catalog.lookup(server))
    }

    /// Tool and shell-type lists for the rendering layer.
    pub fn options(&self, config: &Configuration) -> SelectionOptions {
        let Some(tool_map) = self.tool_map(config) else {
            return SelectionOptions::default();
        };
        let shell_types = match config.shell_tool {
            Some(tool) if tool.has_shell_types() => tool_map.shell_types(tool).to_vec(),
            _ => Vec::new(),
        };
        SelectionOptions {
            tools: tool_map.tools().collect(),
            shell_types,
        }
    }

    pub fn on_server_changed(&self, mut config: Configuration, server: ServerId) -> Configuration {
        let tool_map = self.catalog.lookup(&server);

        config.target_runtime_version = match (
            minimum_runtime_for(&server),
            config.target_runtime_version,
        ) {
            (Some(floor), Some(current)) if current >= floor => Some(current),
            (Some(floor), _) => Some(floor),
            (None, _) => None,
        };
        config.bypass_module = config
            .target_runtime_version
            .is_some_and(derive_bypass_module);
        config.url_pattern.clear();

        info!(
            target: TARGET,
            server = %server,
            tools = tool_map.len(),
            runtime_version = ?config.target_runtime_version.map(RuntimeVersion::value),
            "Selected target server"
        );
        config.server = Some(server);

        match tool_map.first_tool() {
            Some(first) => self.activate_tool(config, first),
            None => {
                config.shell_tool = None;
                config.clear_tool_state();
                config
            }
        }
    }

    pub fn on_tool_changed(&self, config: Configuration, tool: ToolId) -> Configuration {
        let Some(tool_map) = self.tool_map(&config) else {
            debug!(target: TARGET, %tool, "Ignoring tool change before a server is selected");
            return config;
        };
        if !tool_map.contains(tool) {
            debug!(
                target: TARGET,
                %tool,
                server = ?config.server.as_ref().map(ServerId::as_str),
                "Ignoring tool the selected server does not support"
            );
            return config;
        }
        self.activate_tool(config, tool)
    }

    /// Switch to `tool`, dropping every field that belonged to any tool.
    fn activate_tool(&self, mut config: Configuration, tool: ToolId) -> Configuration {
        config.shell_tool = Some(tool);
        config.clear_tool_state();
        info!(
            target: TARGET,
            %tool,
            editable_fields = fields_to_clear_for(tool).len(),
            "Activated shell tool"
        );
        config
    }

    /// Direct edit of the JDK target; the bypass flag follows the stored value.
    pub fn on_runtime_version_changed(
        &self,
        mut config: Configuration,
        version: RuntimeVersion,
    ) -> Configuration {
        let floor = config.server.as_ref().and_then(minimum_runtime_for);
        let version = match floor {
            Some(floor) if version < floor => {
                debug!(
                    target: TARGET,
                    requested = version.value(),
                    floor = floor.value(),
                    "Raising runtime version to the server minimum"
                );
                floor
            }
            _ => version,
        };
        config.target_runtime_version = Some(version);
        config.bypass_module = derive_bypass_module(version);
        config
    }

    /// Manual module-bypass switch, honoured only while no runtime version is set.
    pub fn on_bypass_module_toggled(
        &self,
        mut config: Configuration,
        enabled: bool,
    ) -> Configuration {
        match config.target_runtime_version {
            None => config.bypass_module = enabled,
            Some(version) => {
                debug!(
                    target: TARGET,
                    runtime_version = version.value(),
                    "Ignoring bypass toggle; flag follows the runtime version"
                );
            }
        }
        config
    }

    pub fn on_shell_type_changed(
        &self,
        mut config: Configuration,
        shell_type: ShellType,
    ) -> Configuration {
        if !self.options(&config).shell_types.contains(&shell_type) {
            debug!(
                target: TARGET,
                %shell_type,
                tool = ?config.shell_tool,
                "Ignoring shell type the selected tool does not offer"
            );
            return config;
        }
        config.shell_type = Some(shell_type);
        config
    }

    /// Edit a tool-owned field; a blank value clears it.
    pub fn on_field_edited(
        &self,
        mut config: Configuration,
        field: ToolField,
        value: String,
    ) -> Configuration {
        match config.shell_tool {
            Some(tool) if owns_field(tool, field) => {
                config.tool_fields.set(field, non_blank(value));
            }
            tool => {
                debug!(
                    target: TARGET,
                    %field,
                    ?tool,
                    "Ignoring field the active tool does not own"
                );
            }
        }
        config
    }

    pub fn on_url_pattern_edited(&self, mut config: Configuration, value: String) -> Configuration {
        if self.accepts_mount_edits(&config) {
            config.url_pattern = value;
        }
        config
    }

    pub fn on_shell_class_name_edited(
        &self,
        mut config: Configuration,
        value: String,
    ) -> Configuration {
        if self.accepts_mount_edits(&config) {
            config.shell_class_name = non_blank(value);
        }
        config
    }

    pub fn on_injector_class_name_edited(
        &self,
        mut config: Configuration,
        value: String,
    ) -> Configuration {
        if self.accepts_mount_edits(&config) {
            config.injector_class_name = non_blank(value);
        }
        config
    }

    pub fn on_debug_toggled(&self, mut config: Configuration, enabled: bool) -> Configuration {
        config.debug = enabled;
        config
    }

    pub fn on_shrink_toggled(&self, mut config: Configuration, enabled: bool) -> Configuration {
        config.shrink = enabled;
        config
    }

    fn accepts_mount_edits(&self, config: &Configuration) -> bool {
        let accepted = config.shell_tool.is_some_and(ToolId::has_shell_types);
        if !accepted {
            debug!(
                target: TARGET,
                tool = ?config.shell_tool,
                "Ignoring mount edit without an editable tool"
            );
        }
        accepted
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
