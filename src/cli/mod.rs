//! CLI entrypoint module structure.
use std::process::ExitCode;

use anyhow::{Context, Error, Result};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::{
    catalog::{telemetry::log_source, CompatibilityCatalog},
    engine::{
        minimum_runtime_for, read_event_script, Configuration, SelectionEvent, SelectionOptions,
        ServerId, Session,
    },
};

pub mod args;
pub mod profile;

pub use args::{CliArgs, CliCommand, Invocation, OptionsArgs, OutputFormat, ReplayArgs};
pub use profile::{resolve_catalog_path, CatalogPathSource, CatalogProfile, MEMSHELL_CATALOG_ENV};

/// Bundles a failure message with the process exit code.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    exit_code: ExitCode,
}

impl CliExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Execute a command and return the user-facing output.
pub fn execute(invocation: Invocation) -> Result<String> {
    let profile = invocation.catalog;
    log_source(
        profile.path.as_deref(),
        profile.source == CatalogPathSource::Env,
    );
    let catalog = CompatibilityCatalog::load(profile.path.clone()).with_context(|| {
        match &profile.path {
            Some(path) => format!("failed to load catalog {}", path.display()),
            None => "failed to load builtin catalog".to_string(),
        }
    })?;

    match invocation.command {
        CliCommand::Servers => list_servers(&catalog),
        CliCommand::Options(args) => show_options(&catalog, args),
        CliCommand::Replay(args) => replay(&catalog, args),
    }
}

fn list_servers(catalog: &CompatibilityCatalog) -> Result<String> {
    let servers: Vec<Value> = catalog
        .entries()
        .map(|(server, tools)| {
            let tools: Map<String, Value> = tools
                .tools()
                .map(|tool| {
                    let shell_types = tools
                        .shell_types(tool)
                        .iter()
                        .map(|shell_type| Value::String(shell_type.to_string()))
                        .collect();
                    (tool.to_string(), Value::Array(shell_types))
                })
                .collect();
            json!({
                "name": server,
                "minimumRuntimeVersion": minimum_runtime_for(server),
                "tools": tools,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&servers)?)
}

fn show_options(catalog: &CompatibilityCatalog, args: OptionsArgs) -> Result<String> {
    let server = ServerId::new(args.server);
    if !catalog.contains_server(&server) {
        warn!(
            target: "memshell_config::cli",
            server = %server,
            "Server is not listed in the catalog; no tools are selectable"
        );
    }

    let mut session = Session::new(catalog);
    session.apply(SelectionEvent::Server(server));
    if let Some(tool) = args.tool {
        session.apply(SelectionEvent::Tool(tool));
    }

    let payload = json!({
        "server": session.config().server(),
        "shellTool": session.config().shell_tool(),
        "targetRuntimeVersion": session.config().target_runtime_version(),
        "options": session.options(),
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

#[derive(Serialize)]
struct ReplayOutput<'a> {
    configuration: &'a Configuration,
    options: SelectionOptions,
}

fn replay(catalog: &CompatibilityCatalog, args: ReplayArgs) -> Result<String> {
    let events = read_event_script(&args.events)?;
    let mut session = Session::new(catalog);
    let total = events.len();
    session.apply_all(events);
    info!(
        target: "memshell_config::cli",
        session_id = %session.id(),
        events = total,
        "Replayed event script"
    );

    if args.finalize {
        let request = session
            .finalize()
            .context("configuration is not ready for generation")?;
        return render(&request, args.format);
    }

    let options = session.options();
    let configuration = session.into_configuration();
    render(
        &ReplayOutput {
            configuration: &configuration,
            options,
        },
        args.format,
    )
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Toml => toml::to_string_pretty(value).context("failed to render TOML"),
    }
}
