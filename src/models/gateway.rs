// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Wire types for the gateway's `/system/info` endpoint.
//!
//! The endpoint changed shape across a gateway release. Newer gateways nest the
//! provider under `provider` and report their own build under `version`:
//!
//! ```json
//! {"provider": {"provider": "faas-swarm", "orchestration": "swarm",
//!               "version": {"sha": "...", "release": "..."}},
//!  "version": {"sha": "...", "release": "...", "commit_message": "..."}}
//! ```
//!
//! Older gateways return the provider fields at the top level and say nothing about
//! the gateway itself:
//!
//! ```json
//! {"provider": "faas-swarm", "orchestration": "swarm",
//!  "version": {"sha": "...", "release": "..."}}
//! ```
//!
//! The JSON type of `provider` is the only thing telling the two apart.

use crate::error::GatewayError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Build identifiers of the provider (`sha`, `release`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release: String,
}

/// Build identifiers of the gateway itself. Only present in the structured shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GatewayVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commit_message: String,
}

/// The nested `provider` object of the structured shape.
///
/// Every member is optional: `{"provider": {}}` decodes to an empty provider, and the
/// report then shows the provider labels with no values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orchestration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: ProviderVersion,
}

/// Response of gateways after the schema revision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructuredProviderInfo {
    pub provider: ProviderDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: GatewayVersion,
}

/// Response of gateways before the schema revision.
///
/// `version` here belongs to the provider, not the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyProviderInfo {
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orchestration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: ProviderVersion,
}

/// A decoded `/system/info` body in whichever shape the gateway used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemInfo {
    Structured(StructuredProviderInfo),
    Legacy(LegacyProviderInfo),
}

impl SystemInfo {
    /// Decode a raw response body.
    ///
    /// Bodies that are not JSON at all yield [`GatewayError::Decode`]; JSON that fits
    /// neither shape yields [`GatewayError::SchemaMismatch`].
    pub fn from_json(body: &str) -> Result<Self, GatewayError> {
        let value: Value = serde_json::from_str(body).map_err(GatewayError::Decode)?;
        Self::from_value(value)
    }

    /// Branch on the JSON type of `provider`, then decode strictly into that shape.
    pub fn from_value(value: Value) -> Result<Self, GatewayError> {
        let Some(object) = value.as_object() else {
            return Err(GatewayError::SchemaMismatch(format!(
                "expected a JSON object, got {}",
                json_type(&value)
            )));
        };

        let structured = match object.get("provider") {
            Some(Value::Object(_)) => true,
            Some(Value::String(_)) => false,
            Some(other) => {
                return Err(GatewayError::SchemaMismatch(format!(
                    "`provider` must be an object or a string, got {}",
                    json_type(other)
                )))
            }
            None => {
                return Err(GatewayError::SchemaMismatch(
                    "missing `provider` field".to_string(),
                ))
            }
        };

        if structured {
            serde_json::from_value(value)
                .map(SystemInfo::Structured)
                .map_err(|e| GatewayError::SchemaMismatch(format!("structured response: {e}")))
        } else {
            serde_json::from_value(value)
                .map(SystemInfo::Legacy)
                .map_err(|e| GatewayError::SchemaMismatch(format!("legacy response: {e}")))
        }
    }

    /// Short name of the detected shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            SystemInfo::Structured(_) => "structured",
            SystemInfo::Legacy(_) => "legacy",
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalized gateway and provider metadata.
///
/// Every field is a plain string; anything the gateway did not report is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayInfo {
    pub gateway_sha: String,
    pub gateway_release: String,
    pub gateway_commit_message: String,
    pub provider_name: String,
    pub provider_orchestration: String,
    pub provider_version_release: String,
    pub provider_version_sha: String,
}

impl From<SystemInfo> for GatewayInfo {
    fn from(info: SystemInfo) -> Self {
        match info {
            SystemInfo::Structured(info) => GatewayInfo {
                gateway_sha: info.version.sha,
                gateway_release: info.version.release,
                gateway_commit_message: info.version.commit_message,
                provider_name: info.provider.provider,
                provider_orchestration: info.provider.orchestration,
                provider_version_release: info.provider.version.release,
                provider_version_sha: info.provider.version.sha,
            },
            // Older gateways never reported their own build
            SystemInfo::Legacy(info) => GatewayInfo {
                provider_name: info.provider,
                provider_orchestration: info.orchestration,
                provider_version_release: info.version.release,
                provider_version_sha: info.version.sha,
                ..GatewayInfo::default()
            },
        }
    }
}

impl std::str::FromStr for GatewayInfo {
    type Err = GatewayError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        SystemInfo::from_json(body).map(GatewayInfo::from)
    }
}
