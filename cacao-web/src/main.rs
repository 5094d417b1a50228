// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cacao Web Server
//!
//! Serves the site pages rendered from CMS content.

use std::process::ExitCode;

use cacao_core::{CacaoError, HttpCmsTransport};
use cacao_web::{create_router, AppState, ServerConfig, ServerResult};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::filter::Directive;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let directive: Directive = match "cacao_web=info".parse() {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("invalid log directive: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerResult<()> {
    let config = ServerConfig::from_env()?;

    info!("Starting Cacao Web v{}", env!("CARGO_PKG_VERSION"));
    info!("CMS: {}", config.cms.base_url);
    info!("Default locale: {}", config.cms.default_locale);

    let transport = HttpCmsTransport::new(&config.cms).map_err(CacaoError::from)?;
    let state = AppState::new(transport).with_default_locale(&config.cms.default_locale);
    let router = create_router(state);

    let listener = TcpListener::bind(config.web.listen_addr).await?;
    info!("HTTP server listening on {}", config.web.listen_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
