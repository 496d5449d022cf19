//! Configuration dependency-resolution engine.
//!
//! [`Reconciler`] turns one user selection at a time into a new
//! [`Configuration`], consulting the catalog, the runtime-version thresholds
//! and the per-tool reset table. [`Session`] drives it from a
//! [`SelectionEvent`] stream.

pub mod event;
pub mod finalize;
pub mod reconciler;
pub mod record;
pub mod reset;
pub mod session;
pub mod threshold;
pub mod tool;

pub use event::{read_event_script, SelectionEvent};
pub use finalize::{GenerationRequest, DEFAULT_URL_PATTERN};
pub use reconciler::{Reconciler, SelectionOptions};
pub use record::{Configuration, ToolFields};
pub use reset::{all_tool_fields, fields_to_clear_for, owns_field};
pub use session::Session;
pub use threshold::{
    derive_bypass_module, minimum_runtime_for, RuntimeVersion, MINIMUM_RUNTIME_SERVERS,
    MODULE_ERA_FLOOR, MODULE_SYSTEM_VERSION,
};
pub use tool::{ServerId, ShellType, ToolField, ToolId};
