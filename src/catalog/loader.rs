//! Load and validate compatibility catalogs.
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tracing::{error, info};

use super::{telemetry, CatalogSource, CompatibilityCatalog, ToolMap};
use crate::{
    engine::{ServerId, ShellType, ToolId},
    lib::errors::CatalogError,
};

/// Catalog shipped with the binary, used when no file is configured.
pub const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");
/// Display name used in errors and logs for the builtin catalog.
pub const BUILTIN_CATALOG_NAME: &str = "<builtin catalog>";

const MAX_NAME_LEN: usize = 128;

#[derive(Debug, Deserialize)]
pub struct RawCatalog {
    pub servers: Option<Vec<RawServerEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct RawServerEntry {
    pub name: Option<String>,
    pub tools: Option<Vec<RawToolEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct RawToolEntry {
    pub tool: Option<String>,
    pub shell_types: Option<Vec<String>>,
}

impl CompatibilityCatalog {
    /// Load from `path` when given, otherwise fall back to the builtin catalog.
    pub fn load(path: Option<PathBuf>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_builtin(),
        }
    }

    /// Load the catalog embedded in the binary.
    pub fn load_builtin() -> Result<Self, CatalogError> {
        let name = PathBuf::from(BUILTIN_CATALOG_NAME);
        let source = config::File::from_str(BUILTIN_CATALOG, config::FileFormat::Toml);
        let catalog = build(config::Config::builder().add_source(source), &name)?
            .with_source(CatalogSource::Builtin);
        telemetry::log_loaded(&catalog, &name);
        Ok(catalog)
    }

    /// Load a catalog file; the format follows the file extension.
    pub fn load_from_path(path: PathBuf) -> Result<Self, CatalogError> {
        info!(
            target: "memshell_config::catalog",
            path = %path.display(),
            "Starting catalog load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let catalog = build(builder, &path)?.with_source(CatalogSource::File(path.clone()));
        telemetry::log_loaded(&catalog, &path);
        Ok(catalog)
    }
}

fn build(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    path: &Path,
) -> Result<CompatibilityCatalog, CatalogError> {
    let document = builder.build().map_err(|err| {
        let error = CatalogError::from_read_error(path.to_path_buf(), err);
        error!(
            target: "memshell_config::catalog",
            path = %path.display(),
            reason = %error,
            "Failed to read catalog"
        );
        error
    })?;

    let raw: RawCatalog = document.try_deserialize().map_err(|err| {
        let error = CatalogError::from_parse_error(path.to_path_buf(), err);
        error!(
            target: "memshell_config::catalog",
            path = %path.display(),
            reason = %error,
            "Failed to parse catalog"
        );
        error
    })?;

    parse_catalog(raw, path).map_err(|err| {
        error!(
            target: "memshell_config::catalog",
            path = %path.display(),
            reason = %err,
            "Failed to validate catalog"
        );
        err
    })
}

/// Validate raw entries into a catalog, keeping document order.
pub fn parse_catalog(raw: RawCatalog, path: &Path) -> Result<CompatibilityCatalog, CatalogError> {
    let servers = raw.servers.ok_or(CatalogError::MissingField {
        path: path.to_path_buf(),
        field: "servers",
    })?;

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(servers.len());
    for entry in servers {
        let name = entry
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(CatalogError::MissingField {
                path: path.to_path_buf(),
                field: "servers.name",
            })?;
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CatalogError::invalid(
                path.to_path_buf(),
                "servers.name",
                format!("Server name exceeds {MAX_NAME_LEN} characters: {name}"),
            ));
        }
        if !seen.insert(name.clone()) {
            return Err(CatalogError::invalid(
                path.to_path_buf(),
                "servers.name",
                format!("Server `{name}` is listed more than once"),
            ));
        }

        let tools = parse_tool_map(&name, entry.tools.unwrap_or_default(), path)?;
        entries.push((ServerId::new(name), tools));
    }

    Ok(CompatibilityCatalog::from_entries(entries))
}

fn parse_tool_map(
    server: &str,
    tools: Vec<RawToolEntry>,
    path: &Path,
) -> Result<ToolMap, CatalogError> {
    let mut map = ToolMap::new();
    for entry in tools {
        let raw_tool = entry.tool.ok_or(CatalogError::MissingField {
            path: path.to_path_buf(),
            field: "servers.tools.tool",
        })?;
        let tool = ToolId::from_str(raw_tool.trim()).map_err(|_| {
            CatalogError::invalid(
                path.to_path_buf(),
                "servers.tools.tool",
                format!("Unknown tool `{raw_tool}` for server `{server}`"),
            )
        })?;
        if map.contains(tool) {
            return Err(CatalogError::invalid(
                path.to_path_buf(),
                "servers.tools.tool",
                format!("Tool `{tool}` is listed more than once for server `{server}`"),
            ));
        }

        let shell_types = parse_shell_types(server, tool, entry.shell_types, path)?;
        map.insert(tool, shell_types);
    }
    Ok(map)
}

fn parse_shell_types(
    server: &str,
    tool: ToolId,
    raw: Option<Vec<String>>,
    path: &Path,
) -> Result<Vec<ShellType>, CatalogError> {
    let mut seen = HashSet::new();
    let mut shell_types = Vec::new();
    for value in raw.unwrap_or_default() {
        let value = value.trim();
        if value.is_empty() {
            return Err(CatalogError::invalid(
                path.to_path_buf(),
                "servers.tools.shell_types",
                format!("Shell type names cannot be empty (`{server}` / `{tool}`)"),
            ));
        }
        if !seen.insert(value.to_string()) {
            return Err(CatalogError::invalid(
                path.to_path_buf(),
                "servers.tools.shell_types",
                format!("Shell type `{value}` is listed more than once (`{server}` / `{tool}`)"),
            ));
        }
        shell_types.push(ShellType::new(value));
    }
    Ok(shell_types)
}
