// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings for the Papierwerk service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory where uploads and produced artifacts are stored.
    pub upload_dir: PathBuf,
    /// Path of the usage counter file.
    pub counter_file: PathBuf,
    /// TCP port for the HTTP server.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            counter_file: PathBuf::from("usage_counter.txt"),
            port: 5001,
            max_body_bytes: 50 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognised variables: `PAPIERWERK_UPLOAD_DIR`,
    /// `PAPIERWERK_COUNTER_FILE`, `PORT`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("PAPIERWERK_UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Ok(file) = std::env::var("PAPIERWERK_COUNTER_FILE") {
            config.counter_file = PathBuf::from(file);
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        config
    }
}
