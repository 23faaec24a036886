// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Errors raised while querying a gateway.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway URI could not be parsed or is not http(s).
    #[error("Invalid gateway URI: {0}")]
    InvalidUri(String),

    /// Connection refused, timeout, DNS failure and other transport errors.
    #[error("Cannot connect to gateway: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway answered with something other than 200 OK.
    #[error("Gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body is not JSON.
    #[error("Cannot decode /system/info response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Valid JSON, but neither of the known `/system/info` shapes.
    #[error("Unexpected /system/info response: {0}")]
    SchemaMismatch(String),
}

impl GatewayError {
    /// True for failures to reach the gateway or get a 200 from it, as opposed to a
    /// gateway that answered with something unreadable.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            GatewayError::InvalidUri(_) | GatewayError::Request(_) | GatewayError::Status { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_connectivity() {
        let err = GatewayError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert!(err.is_connectivity());
        assert_eq!(err.to_string(), "Gateway returned HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_schema_mismatch_is_not_connectivity() {
        let err = GatewayError::SchemaMismatch("missing `provider` field".to_string());
        assert!(!err.is_connectivity());
    }

    #[test]
    fn test_decode_error_is_not_connectivity() {
        let err = GatewayError::Decode(serde_json::from_str::<u8>("nope").unwrap_err());
        assert!(!err.is_connectivity());
        assert!(err.to_string().starts_with("Cannot decode"));
    }
}
