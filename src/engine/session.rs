use uuid::Uuid;

use super::{
    event::SelectionEvent,
    finalize::GenerationRequest,
    reconciler::{Reconciler, SelectionOptions},
    record::Configuration,
};
use crate::{
    catalog::CompatibilityCatalog,
    lib::{errors::FinalizeError, telemetry::TransitionSpan},
};

/// One form-editing session: exclusively owns its record and applies
/// selection events one at a time.
#[derive(Debug)]
pub struct Session<'c> {
    id: Uuid,
    reconciler: Reconciler<'c>,
    config: Configuration,
    applied: usize,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c CompatibilityCatalog) -> Self {
        Self {
            id: Uuid::new_v4(),
            reconciler: Reconciler::new(catalog),
            config: Configuration::new(),
            applied: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Number of events applied so far, including no-ops.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn options(&self) -> SelectionOptions {
        self.reconciler.options(&self.config)
    }

    /// Apply one event; returns whether the record changed.
    pub fn apply(&mut self, event: SelectionEvent) -> bool {
        let span = TransitionSpan::start(self.id, event.kind());
        let previous = std::mem::take(&mut self.config);
        let before = previous.clone();
        let reconciler = self.reconciler;
        let next = span.in_scope(|| match event {
            SelectionEvent::Server(server) => reconciler.on_server_changed(previous, server),
            SelectionEvent::Tool(tool) => reconciler.on_tool_changed(previous, tool),
            SelectionEvent::RuntimeVersion(version) => {
                reconciler.on_runtime_version_changed(previous, version)
            }
            SelectionEvent::BypassModule(enabled) => {
                reconciler.on_bypass_module_toggled(previous, enabled)
            }
            SelectionEvent::ShellType(shell_type) => {
                reconciler.on_shell_type_changed(previous, shell_type)
            }
            SelectionEvent::Field { field, value } => {
                reconciler.on_field_edited(previous, field, value)
            }
            SelectionEvent::UrlPattern(value) => reconciler.on_url_pattern_edited(previous, value),
            SelectionEvent::ShellClassName(value) => {
                reconciler.on_shell_class_name_edited(previous, value)
            }
            SelectionEvent::InjectorClassName(value) => {
                reconciler.on_injector_class_name_edited(previous, value)
            }
            SelectionEvent::Debug(enabled) => reconciler.on_debug_toggled(previous, enabled),
            SelectionEvent::Shrink(enabled) => reconciler.on_shrink_toggled(previous, enabled),
        });

        let changed = next != before;
        self.config = next;
        self.applied += 1;
        span.finish(changed);
        changed
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = SelectionEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn finalize(&self) -> Result<GenerationRequest, FinalizeError> {
        self.config.finalize()
    }

    /// End the session, handing the record over.
    pub fn into_configuration(self) -> Configuration {
        self.config
    }
}
