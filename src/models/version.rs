// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

/// Release tag used when the build did not inject one.
pub const DEV_VERSION: &str = "dev";

/// Identifiers of the CLI build itself.
///
/// Populated once at process start (see `build.rs`) and handed to the reporter by
/// reference. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientVersionInfo {
    pub version: String,
    pub commit: String,
}

impl ClientVersionInfo {
    /// Build identifiers embedded at compile time.
    pub fn from_build() -> Self {
        Self::new(env!("FAAS_CLI_VERSION"), env!("FAAS_CLI_COMMIT"))
    }

    /// Empty or whitespace-only versions fall back to `"dev"`.
    pub fn new(version: impl Into<String>, commit: impl Into<String>) -> Self {
        let version = version.into();
        let version = if version.trim().is_empty() {
            DEV_VERSION.to_string()
        } else {
            version
        };

        Self {
            version,
            commit: commit.into(),
        }
    }

    /// Returns `(version, commit)`.
    pub fn report(&self) -> (&str, &str) {
        (&self.version, &self.commit)
    }
}

impl Default for ClientVersionInfo {
    fn default() -> Self {
        Self::new(DEV_VERSION, "")
    }
}
