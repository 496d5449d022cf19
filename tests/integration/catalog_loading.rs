use std::fs;

use memshell_config::{
    catalog::{CatalogSource, CompatibilityCatalog},
    engine::{ServerId, ShellType, ToolId},
    lib::errors::CatalogError,
};
use tempfile::tempdir;

use crate::common::{fixture, valid_catalog};

#[test]
fn load_valid_catalog_preserves_document_order() {
    let catalog = valid_catalog();

    let servers: Vec<&str> = catalog.servers().map(ServerId::as_str).collect();
    assert_eq!(servers, ["Lab", "SpringWebFlux", "XXLJOB", "Tomcat", "Bare"]);
    assert_eq!(
        catalog.source(),
        &CatalogSource::File(fixture("catalog_valid.toml"))
    );

    let flux = catalog.lookup(&ServerId::from("SpringWebFlux"));
    assert_eq!(
        flux.tools().collect::<Vec<_>>(),
        [
            ToolId::Godzilla,
            ToolId::Behinder,
            ToolId::Command,
            ToolId::NeoreGeorg
        ]
    );
    assert_eq!(
        flux.shell_types(ToolId::Behinder),
        &[ShellType::from("WebFilter"), ShellType::from("HandlerMethod")]
    );
    assert!(flux.shell_types(ToolId::NeoreGeorg).is_empty());
    assert!(catalog.lookup(&ServerId::from("Bare")).is_empty());
}

#[test]
fn json_catalog_is_selected_by_extension() {
    let catalog = CompatibilityCatalog::load_from_path(fixture("catalog_valid.json"))
        .expect("catalog_valid.json should load");

    let jetty = catalog.lookup(&ServerId::from("Jetty"));
    assert_eq!(jetty.first_tool(), Some(ToolId::Suo5));
    assert_eq!(jetty.len(), 2);
}

#[test]
fn missing_servers_returns_error() {
    let error = CompatibilityCatalog::load_from_path(fixture("catalog_missing_servers.toml"))
        .expect_err("should error when servers is missing");

    match error {
        CatalogError::MissingField { field, .. } => assert_eq!(field, "servers"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn missing_server_name_returns_error() {
    let error = CompatibilityCatalog::load_from_path(fixture("catalog_missing_name.toml"))
        .expect_err("should error when a server has no name");

    match error {
        CatalogError::MissingField { field, .. } => assert_eq!(field, "servers.name"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_tool_returns_error() {
    let error = CompatibilityCatalog::load_from_path(fixture("catalog_unknown_tool.toml"))
        .expect_err("should error for an unknown tool");

    match error {
        CatalogError::InvalidField { field, message, .. } => {
            assert_eq!(field, "servers.tools.tool");
            assert!(message.contains("Cobalt"), "message: {message}");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_server_returns_error() {
    let error = CompatibilityCatalog::load_from_path(fixture("catalog_duplicate_server.toml"))
        .expect_err("should error for a duplicated server");

    match error {
        CatalogError::InvalidField { field, .. } => assert_eq!(field, "servers.name"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn blank_shell_type_returns_error() {
    let error = CompatibilityCatalog::load_from_path(fixture("catalog_blank_shell_type.toml"))
        .expect_err("should error for a blank shell type");

    match error {
        CatalogError::InvalidField { field, .. } => {
            assert_eq!(field, "servers.tools.shell_types")
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file_returns_read_error() {
    let temp = tempdir().expect("can create temporary directory");
    let path = temp.path().join("absent.toml");

    let error = CompatibilityCatalog::load_from_path(path.clone())
        .expect_err("should error for a missing file");

    match error {
        CatalogError::FileRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn scratch_catalog_server_without_tools_loads() {
    let temp = tempdir().expect("can create temporary directory");
    let path = temp.path().join("bare.toml");
    fs::write(&path, "[[servers]]\nname = \"Resin\"\n").expect("can write catalog");

    let catalog = CompatibilityCatalog::load_from_path(path).expect("tools are optional");

    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains_server(&ServerId::from("Resin")));
    assert!(catalog.lookup(&ServerId::from("Resin")).is_empty());
}
