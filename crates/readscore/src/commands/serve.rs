//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use readscore_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ReadscoreServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve readability tools over MCP until the client disconnects.
///
/// Stdout carries the protocol, so all logging goes to stderr or the log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let server = ReadscoreServer::new(config.input_limit(), config.report_options());

    info!(limit = ?config.input_limit(), "starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    service.waiting().await.context("MCP server terminated")?;
    info!("MCP server stopped");
    Ok(())
}
