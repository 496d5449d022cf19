//! Compatibility catalog: which tools and shell types each target server supports.
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::{ServerId, ShellType, ToolId};

pub mod loader;
pub mod telemetry;

pub use loader::{
    parse_catalog, RawCatalog, RawServerEntry, RawToolEntry, BUILTIN_CATALOG, BUILTIN_CATALOG_NAME,
};

/// Tools supported by one server, each with its ordered shell types.
///
/// Iteration follows catalog order, which decides the default tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolMap(IndexMap<ToolId, Vec<ShellType>>);

impl ToolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the shell types listed for `tool`.
    pub fn insert(&mut self, tool: ToolId, shell_types: Vec<ShellType>) {
        self.0.insert(tool, shell_types);
    }

    pub fn tools(&self) -> impl Iterator<Item = ToolId> + '_ {
        self.0.keys().copied()
    }

    pub fn first_tool(&self) -> Option<ToolId> {
        self.0.keys().next().copied()
    }

    pub fn contains(&self, tool: ToolId) -> bool {
        self.0.contains_key(&tool)
    }

    /// Shell types listed for `tool`; empty when the tool is absent.
    pub fn shell_types(&self, tool: ToolId) -> &[ShellType] {
        self.0.get(&tool).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(ToolId, Vec<ShellType>)> for ToolMap {
    fn from_iter<I: IntoIterator<Item = (ToolId, Vec<ShellType>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Where a catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
    Inline,
}

/// Immutable server → tool map table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct CompatibilityCatalog {
    servers: IndexMap<ServerId, ToolMap>,
    source: CatalogSource,
    empty: ToolMap,
}

impl CompatibilityCatalog {
    /// Build a catalog from already validated entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (ServerId, ToolMap)>) -> Self {
        Self {
            servers: entries.into_iter().collect(),
            source: CatalogSource::Inline,
            empty: ToolMap::new(),
        }
    }

    pub(crate) fn with_source(mut self, source: CatalogSource) -> Self {
        self.source = source;
        self
    }

    /// Tool map for `server`; unknown servers yield an empty map.
    pub fn lookup(&self, server: &ServerId) -> &ToolMap {
        self.servers.get(server).unwrap_or(&self.empty)
    }

    pub fn contains_server(&self, server: &ServerId) -> bool {
        self.servers.contains_key(server)
    }

    /// Servers in catalog order.
    pub fn servers(&self) -> impl Iterator<Item = &ServerId> {
        self.servers.keys()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&ServerId, &ToolMap)> {
        self.servers.iter()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}
