// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Papierwerk API server - HTTP frontend for the document engine
//!
//! Provides REST endpoints for:
//! - Multipart file upload and attachment download
//! - Image-to-PDF conversion and JPEG compression
//! - PDF merge, page rotation, page deletion, and range splitting

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use papierwerk_core::AppConfig;

mod counter;
mod error;
mod handlers;
mod models;
mod state;
mod storage;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("papierwerk_api=info".parse()?)
                .add_directive("papierwerk_document=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state
    let config = AppConfig::from_env();
    info!(
        upload_dir = %config.upload_dir.display(),
        "initialising Papierwerk API"
    );
    let port = config.port;
    let state = Arc::new(AppState::new(config)?);

    let app = handlers::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("starting Papierwerk API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
