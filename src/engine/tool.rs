//! Post-exploitation client tools, their capability sets and owned fields.
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Client tool the generated shell must speak.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum ToolId {
    Behinder,
    Godzilla,
    Command,
    AntSword,
    Suo5,
    /// Work-in-progress placeholder: listed, but nothing is editable.
    #[serde(rename = "Neo-reGeorg")]
    #[strum(serialize = "Neo-reGeorg")]
    NeoreGeorg,
}

impl ToolId {
    /// Every tool in declaration order.
    pub fn all() -> impl Iterator<Item = ToolId> {
        ToolId::iter()
    }

    /// Whether the tool is mounted through a selectable shell type.
    pub const fn has_shell_types(self) -> bool {
        !matches!(self, ToolId::NeoreGeorg)
    }

    /// Whether the tool gates requests on a header name/value pair.
    pub const fn has_header_pair(self) -> bool {
        matches!(
            self,
            ToolId::Behinder | ToolId::Godzilla | ToolId::AntSword | ToolId::Suo5
        )
    }

    /// Secret fields the tool authenticates with.
    pub const fn secrets(self) -> &'static [ToolField] {
        match self {
            ToolId::Behinder => &[ToolField::BehinderPass],
            ToolId::Godzilla => &[ToolField::GodzillaKey, ToolField::GodzillaPass],
            ToolId::AntSword => &[ToolField::AntSwordPass],
            ToolId::Command | ToolId::Suo5 | ToolId::NeoreGeorg => &[],
        }
    }

    /// Whether the tool reads its command from a named request parameter.
    pub const fn has_param_name(self) -> bool {
        matches!(self, ToolId::Command)
    }

    /// Placeholder tools can be selected but never finalised.
    pub const fn is_placeholder(self) -> bool {
        matches!(self, ToolId::NeoreGeorg)
    }
}

/// Tool-specific configuration fields.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ToolField {
    GodzillaKey,
    GodzillaPass,
    BehinderPass,
    AntSwordPass,
    CommandParamName,
    HeaderName,
    HeaderValue,
}

/// Identifier of a target server or framework.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ServerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Mount mechanism, only meaningful inside the (server, tool) pair that listed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShellType(String);

impl ShellType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShellType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ShellType {
    fn from(value: String) -> Self {
        Self(value)
    }
}
