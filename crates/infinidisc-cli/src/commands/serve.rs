//! Serve command implementation
//!
//! Resolves the server configuration and runs the HTTP server until Ctrl+C.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use crate::config::{CliConfig, FileConfig, ServerConfig};
use crate::server::run_server;

/// Run the serve command
///
/// # Arguments
/// * `cli` - Settings from command-line flags
/// * `config_path` - Optional TOML file overriding them
pub fn run(cli: &CliConfig, config_path: Option<&Path>) -> Result<ExitCode> {
    let file_config = config_path.map(FileConfig::load).transpose()?;
    if let Some(path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }
    let config = ServerConfig::resolve(cli, file_config)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    rt.block_on(run_server(config))?;
    Ok(ExitCode::SUCCESS)
}
