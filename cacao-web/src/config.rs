// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server configuration

use std::net::SocketAddr;

use cacao_core::{CacaoError, CmsConfig};
use thiserror::Error;

use crate::error::ServerResult;

/// Default listen address
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WebConfigError {
    #[error("invalid listen address: {0}")]
    InvalidListenAddr(String),
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl WebConfig {
    /// Reads `LISTEN_ADDR` from the environment.
    pub fn from_env() -> Result<Self, WebConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WebConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw
            .trim()
            .parse()
            .map_err(|_| WebConfigError::InvalidListenAddr(raw.clone()))?;
        Ok(WebConfig { listen_addr })
    }
}

/// Everything the binary needs to start: CMS connection and listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub web: WebConfig,
    pub cms: CmsConfig,
}

impl ServerConfig {
    /// Reads both configurations from the environment.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds both configurations from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let web = WebConfig::from_lookup(&lookup)?;
        let cms = CmsConfig::from_lookup(&lookup).map_err(CacaoError::from)?;
        Ok(ServerConfig { web, cms })
    }
}
