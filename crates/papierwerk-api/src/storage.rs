// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Working-directory storage helpers
//!
//! Clients only ever hold server-generated storage names; this module turns
//! them back into paths without letting anything escape the upload
//! directory, and mints fresh names for produced artifacts.

use std::path::{Path, PathBuf};
use uuid::Uuid;

use papierwerk_core::error::{PapierwerkError, Result};

/// Resolve a client-supplied storage name inside the working directory.
///
/// Names carrying path separators or parent components are rejected so the
/// upload directory stays the only reachable namespace.
pub fn resolve(upload_dir: &Path, server_name: &str) -> Result<PathBuf> {
    if server_name.is_empty() || server_name.contains(['/', '\\']) || server_name.contains("..") {
        return Err(PapierwerkError::Validation(format!(
            "invalid file reference: {server_name:?}"
        )));
    }
    Ok(upload_dir.join(server_name))
}

/// Mint a fresh collision-resistant output filename, e.g. `out_<uuid>.pdf`.
pub fn output_name(prefix: &str, extension: &str) -> String {
    format!("{}_{}.{}", prefix, Uuid::new_v4(), extension)
}

/// Best-effort Content-Type from a filename extension.
pub fn content_type_for(name: &str) -> &'static str {
    match name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tiff") => "image/tiff",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
