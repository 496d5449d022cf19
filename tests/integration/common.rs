use std::path::PathBuf;

use memshell_config::catalog::CompatibilityCatalog;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_memshell-config");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

pub fn valid_catalog() -> CompatibilityCatalog {
    CompatibilityCatalog::load_from_path(fixture("catalog_valid.toml"))
        .expect("catalog_valid.toml should load")
}
