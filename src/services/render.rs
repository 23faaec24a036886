// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Plain-text rendering of the version report.

use crate::error::GatewayError;
use crate::models::gateway::GatewayInfo;
use crate::models::version::ClientVersionInfo;
use crate::services::logging::redact_uri;
use std::io::{self, Write};

// Provider labels are padded so the values line up in one column
const PROVIDER_LABEL_WIDTH: usize = 15;

/// `CLI version: <version>` and `CLI commit: <commit>`.
pub fn write_client_version<W: Write>(out: &mut W, info: &ClientVersionInfo) -> io::Result<()> {
    let (version, commit) = info.report();
    writeln!(out, "CLI version: {}", version)?;
    writeln!(out, "CLI commit: {}", commit)
}

/// The bare release tag, nothing else.
pub fn write_short_version<W: Write>(out: &mut W, info: &ClientVersionInfo) -> io::Result<()> {
    writeln!(out, "{}", info.version)
}

/// Gateway and provider sections.
///
/// The gateway `version:`, `sha:` and `commit:` lines are always written, with an empty
/// value when the gateway predates reporting its own build.
pub fn write_gateway_info<W: Write>(
    out: &mut W,
    gateway_uri: &str,
    info: &GatewayInfo,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Gateway")?;
    writeln!(out, "uri: {}", gateway_uri)?;
    writeln!(out, "version: {}", info.gateway_release)?;
    writeln!(out, "sha: {}", info.gateway_sha)?;
    writeln!(out, "commit: {}", info.gateway_commit_message)?;
    writeln!(out)?;
    writeln!(out, "Provider")?;
    write_provider_line(out, "name:", &info.provider_name)?;
    write_provider_line(out, "orchestration:", &info.provider_orchestration)?;
    write_provider_line(out, "version:", &info.provider_version_release)?;
    write_provider_line(out, "sha:", &info.provider_version_sha)
}

/// One-line diagnostic for a gateway that could not be queried.
///
/// Unreachable gateways and unreadable answers get different wording. The URI has its
/// password masked, unlike the `uri:` report line.
pub fn write_gateway_error<W: Write>(
    out: &mut W,
    gateway_uri: &str,
    error: &GatewayError,
) -> io::Result<()> {
    let gateway_uri = redact_uri(gateway_uri);
    if error.is_connectivity() {
        writeln!(out, "Error: gateway {} is unavailable: {}", gateway_uri, error)
    } else {
        writeln!(
            out,
            "Error: gateway {} sent an unreadable response: {}",
            gateway_uri, error
        )
    }
}

fn write_provider_line<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{:<width$}{}", label, value, width = PROVIDER_LABEL_WIDTH)
}
