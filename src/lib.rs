// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod app;
pub mod error;
pub mod models;
pub mod services;

pub use error::GatewayError;
pub use models::gateway::GatewayInfo;
pub use models::version::ClientVersionInfo;
