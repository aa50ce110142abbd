// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Wire models for the Papierwerk API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use papierwerk_core::StoredFile;

/// One accepted file in an upload response.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    pub original_name: String,
    pub server_name: String,
    pub path: String,
}

impl From<StoredFile> for UploadedFile {
    fn from(stored: StoredFile) -> Self {
        Self {
            original_name: stored.original_name,
            server_name: stored.storage_name,
            path: stored.path.display().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub files: Vec<String>,
    /// Client-suggested name, echoed nowhere; outputs always get fresh
    /// server-generated names.
    #[serde(default)]
    pub output_name: Option<String>,
}

/// Response for every operation that produces a single PDF artifact.
#[derive(Debug, Serialize)]
pub struct PdfResponse {
    pub pdf_url: String,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RotateRequest {
    pub file: String,
    /// 0-based page index to rotation angle. JSON object keys arrive as
    /// strings; serde parses them into integers.
    #[serde(default)]
    pub rotations: BTreeMap<u32, i32>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePagesRequest {
    pub file: String,
    /// 1-indexed page numbers; duplicates and out-of-range values are
    /// harmless.
    #[serde(default)]
    pub pages: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SplitRequest {
    pub file: String,
    #[serde(default)]
    pub ranges: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SplitPart {
    pub pdf_url: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct SplitResponse {
    pub parts: Vec<SplitPart>,
}

#[derive(Debug, Deserialize)]
pub struct CompressRequest {
    pub file: String,
    pub quality: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct CompressResponse {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub count: u64,
}
