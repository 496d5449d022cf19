//! Per-tool field reset table.
use std::collections::BTreeSet;

use super::tool::{ToolField, ToolId};

/// Fields owned by `tool`, cleared when it becomes active.
///
/// The match is exhaustive so a new [`ToolId`] variant does not compile
/// until it gets a row here.
pub const fn fields_to_clear_for(tool: ToolId) -> &'static [ToolField] {
    match tool {
        ToolId::Godzilla => &[
            ToolField::GodzillaKey,
            ToolField::GodzillaPass,
            ToolField::HeaderName,
            ToolField::HeaderValue,
        ],
        ToolId::Behinder => &[
            ToolField::BehinderPass,
            ToolField::HeaderName,
            ToolField::HeaderValue,
        ],
        ToolId::Suo5 => &[ToolField::HeaderName, ToolField::HeaderValue],
        ToolId::AntSword => &[
            ToolField::AntSwordPass,
            ToolField::HeaderName,
            ToolField::HeaderValue,
        ],
        ToolId::Command => &[ToolField::CommandParamName],
        ToolId::NeoreGeorg => &[],
    }
}

/// Whether `field` belongs to `tool` and may be edited while it is active.
pub fn owns_field(tool: ToolId, field: ToolField) -> bool {
    fields_to_clear_for(tool).contains(&field)
}

/// Union of every tool's row; cleared on each tool switch.
pub fn all_tool_fields() -> BTreeSet<ToolField> {
    ToolId::all()
        .flat_map(|tool| fields_to_clear_for(tool).iter().copied())
        .collect()
}
