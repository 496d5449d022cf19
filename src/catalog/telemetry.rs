use std::path::Path;

use tracing::{debug, info, warn};

use super::CompatibilityCatalog;

pub fn log_source(path: Option<&Path>, from_env: bool) {
    match path {
        Some(path) if from_env => info!(
            target: "memshell_config::catalog",
            path = %path.display(),
            "Loading catalog using MEMSHELL_CATALOG_PATH environment variable"
        ),
        Some(path) => info!(
            target: "memshell_config::catalog",
            path = %path.display(),
            "Loading catalog from --catalog"
        ),
        None => debug!(
            target: "memshell_config::catalog",
            "No catalog path configured; using builtin catalog"
        ),
    }
}

pub fn log_loaded(catalog: &CompatibilityCatalog, path: &Path) {
    let tool_pairs: usize = catalog.entries().map(|(_, tools)| tools.len()).sum();
    if catalog.is_empty() {
        warn!(
            target: "memshell_config::catalog",
            path = %path.display(),
            "Catalog lists no servers; every selection will yield no tools"
        );
    }
    info!(
        target: "memshell_config::catalog",
        path = %path.display(),
        servers = catalog.len(),
        tool_pairs,
        "Catalog loaded successfully"
    );
}
