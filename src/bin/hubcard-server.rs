// ABOUTME: Server binary for the HubSpot card backend
// ABOUTME: Loads configuration, initializes logging, and starts the HTTP listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # HubSpot Card Server Binary
//!
//! Starts the HTTP backend serving the CRM card definition and the OAuth
//! flow endpoints. All behavior is controlled by environment variables; the
//! only flag is a port override.

use anyhow::Result;
use clap::Parser;
use hubcard_server::{
    config::environment::ServerConfig,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::info;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "hubcard-server")]
#[command(about = "HubSpot card backend - custom card definitions and OAuth2 code exchange")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Containers may invoke the binary with host-specific arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using configuration from environment");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_config(&config)?;

    info!("Starting HubSpot card server");
    info!("{}", config.summary());

    if config.runtime.hosted {
        // An external host process owns the listener in hosted mode
        info!("Hosted runtime detected; not starting a listener");
        return Ok(());
    }

    let port = config.http_port;
    info!("To start the HubSpot OAuth flow, navigate to: http://localhost:{port}/start-hubspot-oauth");

    let resources = Arc::new(ServerResources::new(config));
    server::serve(resources).await?;

    Ok(())
}
