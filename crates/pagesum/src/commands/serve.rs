//! Serve command: MCP server on stdio.

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use pagesum_core::config::{Config, ConfigSources};

use crate::server::SummaryServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol, so all diagnostics go through tracing (stderr).
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = config
        .summary
        .resolve(sources.primary_dir().unwrap_or(cwd))
        .context("failed to resolve summary settings")?;
    options.validate()?;

    info!(
        target_length = options.target_summary_length,
        max_input_bytes = ?max_input_bytes,
        "starting MCP server on stdio"
    );
    let service = SummaryServer::new(options, max_input_bytes)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;
    info!("MCP server stopped");
    Ok(())
}
