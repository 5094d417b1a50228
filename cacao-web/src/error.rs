// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server startup errors

use cacao_core::CacaoError;
use thiserror::Error;

use crate::config::WebConfigError;

/// Errors that stop the server from starting.
#[derive(Error, Debug)]
pub enum ServerError {
    /// CMS configuration or client setup failed.
    #[error(transparent)]
    Core(#[from] CacaoError),

    /// Web server configuration error.
    #[error("{0}")]
    Config(#[from] WebConfigError),

    /// Listener could not be bound or the server stopped.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server startup.
pub type ServerResult<T> = Result<T, ServerError>;
