// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Command-line arguments and the `version` command handler.
//!
//! This module is `pub` so that integration tests can drive the command against
//! in-memory writers without spawning the binary.

use crate::models::version::ClientVersionInfo;
use crate::services::gateway::{GatewayClient, DEFAULT_TIMEOUT};
use crate::services::render::{
    write_client_version, write_gateway_error, write_gateway_info, write_short_version,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::time::Duration;

/// Command-line client for a function-as-a-service gateway.
#[derive(Parser, Debug)]
#[command(name = "faas-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display the CLI version and, given a gateway, the gateway and provider versions
    Version(VersionArgs),
}

#[derive(Args, Debug, Clone)]
pub struct VersionArgs {
    /// Gateway URI, e.g. http://127.0.0.1:8080
    #[arg(short, long, env = "OPENFAAS_URL")]
    pub gateway: Option<String>,

    /// Print only the bare CLI version
    #[arg(long)]
    pub short_version: bool,

    /// Gateway request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl VersionArgs {
    /// The gateway to query, if any. An empty `--gateway` counts as none.
    pub fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref().filter(|uri| !uri.trim().is_empty())
    }
}

/// Dispatch a parsed command line.
pub async fn execute<O: Write, E: Write>(
    cli: &Cli,
    build: &ClientVersionInfo,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    match &cli.command {
        Command::Version(args) => run_version(args, build, out, err).await,
    }
}

/// Print the CLI version, then the gateway report if a gateway was given.
///
/// A gateway that cannot be queried is reported on `err` and does not fail the
/// command; only I/O errors on the writers do.
pub async fn run_version<O: Write, E: Write>(
    args: &VersionArgs,
    build: &ClientVersionInfo,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    if args.short_version {
        write_short_version(out, build)?;
        return Ok(());
    }

    write_client_version(out, build)?;
    out.flush()?;

    let Some(gateway) = args.gateway() else {
        return Ok(());
    };

    let resolved =
        match GatewayClient::with_timeout(gateway, Duration::from_secs(args.timeout)) {
            Ok(client) => client.resolve().await,
            Err(e) => Err(e),
        };

    match resolved {
        Ok(info) => write_gateway_info(out, gateway, &info)?,
        Err(e) => write_gateway_error(err, gateway, &e)?,
    }

    Ok(())
}
