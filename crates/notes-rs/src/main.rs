//! `notes-rs` binary: loads configuration and serves the notes API.

use anyhow::{Context, anyhow};
use clap::Parser;
use log::{debug, info};
use notes_rs::config::{LayeredConfigOptions, NotesConfig};
use notes_rs::core::NotesRepository;
use notes_rs::server::build_rocket;
use std::net::IpAddr;
use std::path::PathBuf;

/// Command-line options for the notes server.
#[derive(Parser)]
#[command(name = "notes-rs", version, about = "In-memory notes CRUD service")]
struct Cli {
    /// Optional path to a notes.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen address (overrides config and NOTES_ADDRESS)
    #[arg(long)]
    address: Option<IpAddr>,
    /// Listen port (overrides config and NOTES_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    notes_rs::init_logging();

    let cli = Cli::parse();
    info!(
        "starting notes server (config_set={}, address_set={}, port_set={})",
        cli.config.is_some(),
        cli.address.is_some(),
        cli.port.is_some()
    );

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut options = LayeredConfigOptions::new(&cwd);
    if let Some(path) = cli.config.as_ref() {
        options = options.with_config_path(path);
    }
    if let Some(overrides) = notes_rs::listener_overrides(cli.address, cli.port) {
        options = options.with_runtime_value(overrides);
    }
    let layered =
        NotesConfig::load_layered_with_options(options).context("failed to load config")?;
    debug!("config layers: {:?}", layered.layers);

    let config = layered.config;
    info!(
        "serving {} v{} (address={}, port={})",
        config.app.name, config.app.version, config.server.address, config.server.port
    );
    build_rocket(config, NotesRepository::new())
        .context("failed to build notes server")?
        .launch()
        .await
        .map_err(|err| anyhow!("notes server failed: {err}"))?;
    info!("notes server stopped");
    Ok(())
}
