// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Shared application state for the Papierwerk API

use papierwerk_core::AppConfig;

use crate::counter::UsageCounter;

/// State handed to every handler.
pub struct AppState {
    pub config: AppConfig,
    pub counter: UsageCounter,
}

impl AppState {
    /// Initialise state: ensure the working directory exists and bind the
    /// usage counter to its file.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.upload_dir)?;
        let counter = UsageCounter::new(config.counter_file.clone());
        Ok(Self { config, counter })
    }
}
