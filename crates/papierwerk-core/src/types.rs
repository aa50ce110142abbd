// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Papierwerk document service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::PapierwerkError;

/// File extensions accepted by the upload gateway.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp", "pdf",
];

/// Check whether a filename carries an accepted extension.
pub fn extension_allowed(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reduce a user-supplied filename to a safe single path component.
///
/// Takes the last path component, replaces anything outside
/// `[A-Za-z0-9._-]` with `_`, and strips leading dots so the result can
/// never name a hidden file or traverse upward.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A file persisted in the working directory.
///
/// `storage_name` is the only handle clients pass back to reference the
/// file; the sanitized original name is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub original_name: String,
    pub storage_name: String,
    pub path: PathBuf,
}

impl StoredFile {
    /// Create a record for a fresh upload: a sanitized display name plus a
    /// uuid-prefixed storage name resolved inside `upload_dir`.
    pub fn new(upload_dir: &Path, original_name: &str) -> Self {
        let sanitized = sanitize_filename(original_name);
        let storage_name = format!("{}_{}", Uuid::new_v4(), sanitized);
        let path = upload_dir.join(&storage_name);
        Self {
            original_name: sanitized,
            storage_name,
            path,
        }
    }
}

/// Mapping from 0-based page index to a rotation angle in degrees.
///
/// Absent entries mean "leave the page alone". Angles must be multiples of
/// 90 and are applied on top of any rotation the page already carries.
pub type RotationMap = BTreeMap<u32, i32>;

/// A 1-indexed page selection used by the split operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRangeSpec {
    /// A single page, e.g. `"5"`.
    Single(u32),
    /// An inclusive range, e.g. `"1-3"`.
    Range { start: u32, end: u32 },
}

impl PageRangeSpec {
    /// Resolve to concrete 1-indexed page numbers of a `total_pages`
    /// document. Ranges clamp silently to the document bounds; a single
    /// page outside them resolves to nothing.
    pub fn resolve(&self, total_pages: u32) -> Vec<u32> {
        match *self {
            Self::Single(page) => {
                if page >= 1 && page <= total_pages {
                    vec![page]
                } else {
                    Vec::new()
                }
            }
            Self::Range { start, end } => {
                let lo = start.max(1);
                let hi = end.min(total_pages);
                if lo > hi {
                    Vec::new()
                } else {
                    (lo..=hi).collect()
                }
            }
        }
    }
}

impl FromStr for PageRangeSpec {
    type Err = PapierwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PapierwerkError::Validation(format!("invalid page range: {s:?}"));

        if let Some((start, end)) = s.split_once('-') {
            let start = start.trim().parse().map_err(|_| invalid())?;
            let end = end.trim().parse().map_err(|_| invalid())?;
            Ok(Self::Range { start, end })
        } else {
            let page = s.trim().parse().map_err(|_| invalid())?;
            Ok(Self::Single(page))
        }
    }
}

impl std::fmt::Display for PageRangeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(page) => write!(f, "{page}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}
