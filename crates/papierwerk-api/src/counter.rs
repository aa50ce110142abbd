// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Best-effort usage counter persisted to a plain text file
//!
//! The read-increment-rewrite cycle is serialised in-process by a mutex;
//! concurrent processes sharing the file may still lose updates. This is
//! telemetry, not accounting.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Process-wide operation counter backed by a text file.
pub struct UsageCounter {
    path: PathBuf,
    lock: Mutex<()>,
}

impl UsageCounter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Current count; a missing or unparseable file counts as zero.
    pub fn read(&self) -> u64 {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_unlocked()
    }

    /// Increment and persist, returning the new value. Persistence failures
    /// are logged and otherwise ignored.
    pub fn increment(&self) -> u64 {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let next = self.read_unlocked() + 1;
        if let Err(err) = std::fs::write(&self.path, next.to_string()) {
            warn!(%err, path = %self.path.display(), "failed to persist usage counter");
        }
        next
    }

    fn read_unlocked(&self) -> u64 {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or(0),
            Err(_) => 0,
        }
    }
}
