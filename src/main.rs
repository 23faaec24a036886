// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use clap::Parser;
use faas_cli::app::{execute, Cli};
use faas_cli::models::version::ClientVersionInfo;
use faas_cli::services::logging::init_tracing;
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Build identifiers are read once and passed down by reference
    let build = ClientVersionInfo::from_build();

    execute(&cli, &build, &mut io::stdout(), &mut io::stderr()).await
}
