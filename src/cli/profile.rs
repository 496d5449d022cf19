//! Catalog source resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

pub const MEMSHELL_CATALOG_ENV: &str = "MEMSHELL_CATALOG_PATH";

/// Where the catalog path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPathSource {
    Cli,
    Env,
    Builtin,
}

/// Resolved catalog location; `path` is `None` for the builtin catalog.
#[derive(Debug, Clone)]
pub struct CatalogProfile {
    pub path: Option<PathBuf>,
    pub source: CatalogPathSource,
}

/// Resolve catalog path in the order: CLI override → env var → builtin.
pub fn resolve_catalog_path(override_path: Option<PathBuf>) -> Result<CatalogProfile> {
    let (path, source) = match override_path {
        Some(path) => (path, CatalogPathSource::Cli),
        None => match env::var_os(MEMSHELL_CATALOG_ENV).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), CatalogPathSource::Env),
            None => {
                return Ok(CatalogProfile {
                    path: None,
                    source: CatalogPathSource::Builtin,
                })
            }
        },
    };

    let path = if path.is_absolute() {
        path
    } else {
        env::current_dir()
            .context("failed to obtain current directory")?
            .join(path)
    };
    Ok(CatalogProfile {
        path: Some(path),
        source,
    })
}
