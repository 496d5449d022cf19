use memshell_config::engine::{
    Configuration, Reconciler, RuntimeVersion, ServerId, ShellType, ToolField, ToolId,
};

use crate::common::valid_catalog;

fn godzilla_fully_configured(reconciler: &Reconciler<'_>) -> Configuration {
    let config = reconciler.on_server_changed(Configuration::new(), "Tomcat".into());
    assert_eq!(config.shell_tool(), Some(ToolId::Godzilla));
    let config = reconciler.on_shell_type_changed(config, "Valve".into());
    let config = reconciler.on_url_pattern_edited(config, "/admin/*".into());
    let config = reconciler.on_shell_class_name_edited(config, "org.example.Shell".into());
    let config = reconciler.on_injector_class_name_edited(config, "org.example.Injector".into());
    let config = reconciler.on_field_edited(config, ToolField::GodzillaKey, "key".into());
    let config = reconciler.on_field_edited(config, ToolField::GodzillaPass, "pass".into());
    let config = reconciler.on_field_edited(config, ToolField::HeaderName, "User-Agent".into());
    reconciler.on_field_edited(config, ToolField::HeaderValue, "party".into())
}

#[test]
fn webflux_then_behinder_end_to_end() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);

    let config = reconciler.on_server_changed(Configuration::new(), "SpringWebFlux".into());

    assert_eq!(config.target_runtime_version(), Some(RuntimeVersion::new(52)));
    assert!(!config.bypass_module());
    assert_eq!(config.shell_tool(), Some(ToolId::Godzilla));
    assert_eq!(config.shell_type(), None);
    assert_eq!(config.url_pattern(), "");

    let config = reconciler.on_field_edited(config, ToolField::HeaderName, "X-Stale".into());
    let config = reconciler.on_tool_changed(config, ToolId::Behinder);

    assert_eq!(config.shell_tool(), Some(ToolId::Behinder));
    assert_eq!(config.tool_field(ToolField::BehinderPass), None);
    assert_eq!(config.tool_field(ToolField::HeaderName), None);
    assert_eq!(config.tool_field(ToolField::HeaderValue), None);
    assert_eq!(
        reconciler.options(&config).shell_types,
        [ShellType::from("WebFilter"), ShellType::from("HandlerMethod")]
    );
    assert_eq!(config.target_runtime_version(), Some(RuntimeVersion::JAVA8));
}

#[test]
fn tool_set_derivation_uses_catalog_order() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);

    let config = reconciler.on_server_changed(Configuration::new(), "Lab".into());
    let options = reconciler.options(&config);

    assert_eq!(config.shell_tool(), Some(ToolId::Command));
    assert_eq!(options.tools, [ToolId::Command, ToolId::Suo5]);
    assert_eq!(options.shell_types, [ShellType::from("x"), ShellType::from("y")]);

    let config = reconciler.on_tool_changed(config, ToolId::Suo5);
    assert!(reconciler.options(&config).shell_types.is_empty());
}

#[test]
fn server_missing_from_catalog_has_no_selectable_tool() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);
    let config = godzilla_fully_configured(&reconciler);

    let config = reconciler.on_server_changed(config, "GlassFish".into());
    let options = reconciler.options(&config);

    assert_eq!(config.server(), Some(&ServerId::from("GlassFish")));
    assert_eq!(config.shell_tool(), None);
    assert_eq!(config.shell_type(), None);
    assert!(config.tool_fields().is_clear());
    assert!(options.tools.is_empty());
    assert!(options.shell_types.is_empty());

    let config = reconciler.on_tool_changed(config, ToolId::Godzilla);
    assert_eq!(config.shell_tool(), None);
}

#[test]
fn godzilla_to_command_clears_credentials_and_headers() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);
    let config = reconciler.on_server_changed(Configuration::new(), "SpringWebFlux".into());
    let config = reconciler.on_field_edited(config, ToolField::GodzillaKey, "key".into());
    let config = reconciler.on_field_edited(config, ToolField::GodzillaPass, "pass".into());
    let config = reconciler.on_field_edited(config, ToolField::HeaderName, "User-Agent".into());
    let config = reconciler.on_field_edited(config, ToolField::HeaderValue, "party".into());
    let config = reconciler.on_shell_type_changed(config, "NettyHandler".into());

    let config = reconciler.on_tool_changed(config, ToolId::Command);

    assert!(config.tool_fields().is_clear());
    assert_eq!(config.shell_type(), None);

    let config = reconciler.on_field_edited(config, ToolField::CommandParamName, "cmd".into());
    let config = reconciler.on_field_edited(config, ToolField::GodzillaKey, "late".into());
    let populated: Vec<_> = config.tool_fields().populated().collect();
    assert_eq!(populated, [(ToolField::CommandParamName, "cmd")]);
}

#[test]
fn neo_regeorg_is_a_terminal_placeholder() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);
    let config = reconciler.on_server_changed(Configuration::new(), "SpringWebFlux".into());
    let config = reconciler.on_field_edited(config, ToolField::GodzillaPass, "pass".into());

    let config = reconciler.on_tool_changed(config, ToolId::NeoreGeorg);

    assert_eq!(config.shell_tool(), Some(ToolId::NeoreGeorg));
    assert!(config.tool_fields().is_clear());
    assert!(reconciler.options(&config).shell_types.is_empty());
    for field in [ToolField::HeaderName, ToolField::CommandParamName] {
        let edited = reconciler.on_field_edited(config.clone(), field, "value".into());
        assert_eq!(edited, config, "{field} must not be editable");
    }
    assert!(config.finalize().is_err());
}

#[test]
fn reselecting_the_same_server_resets_exactly_the_tool_state() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);
    let config = reconciler.on_server_changed(Configuration::new(), "SpringWebFlux".into());
    let config = reconciler.on_runtime_version_changed(config, RuntimeVersion::JAVA17);
    let config = reconciler.on_debug_toggled(config, true);
    let config = reconciler.on_shrink_toggled(config, true);
    let config = reconciler.on_tool_changed(config, ToolId::Behinder);
    let config = reconciler.on_shell_type_changed(config, "WebFilter".into());
    let config = reconciler.on_url_pattern_edited(config, "/flux".into());
    let config = reconciler.on_shell_class_name_edited(config, "a.Shell".into());
    let config = reconciler.on_injector_class_name_edited(config, "a.Injector".into());
    let config = reconciler.on_field_edited(config, ToolField::BehinderPass, "pass".into());

    let again = reconciler.on_server_changed(config.clone(), "SpringWebFlux".into());

    // Preserved.
    assert_eq!(again.server(), config.server());
    assert_eq!(again.target_runtime_version(), Some(RuntimeVersion::JAVA17));
    assert_eq!(again.bypass_module(), config.bypass_module());
    assert!(again.debug());
    assert!(again.shrink());
    // Reset.
    assert_eq!(again.shell_tool(), Some(ToolId::Godzilla));
    assert_eq!(again.shell_type(), None);
    assert_eq!(again.url_pattern(), "");
    assert_eq!(again.shell_class_name(), None);
    assert_eq!(again.injector_class_name(), None);
    assert!(again.tool_fields().is_clear());

    let settled = reconciler.on_server_changed(again.clone(), "SpringWebFlux".into());
    assert_eq!(settled, again);
}

#[test]
fn reselecting_a_plain_server_drops_the_runtime_version() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);
    let config = reconciler.on_server_changed(Configuration::new(), "Tomcat".into());
    let config = reconciler.on_runtime_version_changed(config, RuntimeVersion::JAVA11);
    assert!(config.bypass_module());

    let again = reconciler.on_server_changed(config, "Tomcat".into());

    assert_eq!(again.target_runtime_version(), None);
    assert!(!again.bypass_module());
}

#[test]
fn moving_between_distinguished_servers_keeps_a_valid_runtime() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);
    let config = reconciler.on_server_changed(Configuration::new(), "SpringWebFlux".into());
    let config = reconciler.on_runtime_version_changed(config, RuntimeVersion::JAVA9);

    let config = reconciler.on_server_changed(config, "XXLJOB".into());

    assert_eq!(config.target_runtime_version(), Some(RuntimeVersion::JAVA9));
    assert!(config.bypass_module());
    assert_eq!(config.shell_tool(), Some(ToolId::Behinder));
}

#[test]
fn finalized_godzilla_request_carries_only_godzilla_fields() {
    let catalog = valid_catalog();
    let reconciler = Reconciler::new(&catalog);
    let config = godzilla_fully_configured(&reconciler);

    let request = config.finalize().expect("complete configuration");

    assert_eq!(request.server, ServerId::from("Tomcat"));
    assert_eq!(request.shell_tool, ToolId::Godzilla);
    assert_eq!(request.shell_type, ShellType::from("Valve"));
    assert_eq!(request.url_pattern, "/admin/*");
    assert_eq!(request.shell_class_name.as_deref(), Some("org.example.Shell"));
    assert_eq!(request.tool_options.len(), 4);
    assert_eq!(
        request.tool_options.get("godzillaKey").map(String::as_str),
        Some("key")
    );
}
