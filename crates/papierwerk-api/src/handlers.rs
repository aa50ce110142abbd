// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! HTTP handlers for the Papierwerk API
//!
//! Each handler is thin glue: validate the request, resolve storage names
//! inside the working directory, hand the paths to the document engine on a
//! blocking worker, and mint a download URL for the produced artifact.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};
use uuid::Uuid;

use papierwerk_core::{PageRangeSpec, StoredFile, extension_allowed};
use papierwerk_document::{DEFAULT_COMPRESS_QUALITY, PdfEditor};

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;
use crate::storage;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_body = state.config.max_body_bytes;

    Router::new()
        // Health check
        .route("/health", get(health))
        // File gateway
        .route("/api/upload", post(upload))
        .route("/api/download/:filename", get(download))
        // Document operations
        .route("/api/convert", post(convert))
        .route("/api/merge", post(merge))
        .route("/api/rotate", post(rotate))
        .route("/api/delete-pages", post(delete_pages))
        .route("/api/split", post(split))
        .route("/api/compress", post(compress))
        // Telemetry
        .route("/api/counter", get(get_counter))
        // Add middleware
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Run a synchronous engine operation without blocking the async runtime.
async fn run_blocking<T, F>(operation: F) -> Result<T, ApiError>
where
    F: FnOnce() -> papierwerk_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|err| ApiError::Internal(anyhow::anyhow!("worker task failed: {err}")))?
        .map_err(ApiError::from)
}

/// Accept one or more files from the multipart field `files`.
///
/// Files with disallowed extensions are skipped, never stored, and never
/// reach the document engine.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut accepted = Vec::new();
    let mut saw_files_field = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::InvalidRequest(format!("malformed multipart body: {err}")))?
    {
        if field.name() != Some("files") {
            continue;
        }
        saw_files_field = true;

        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if !extension_allowed(&original_name) {
            warn!(file = %original_name, "rejecting upload with disallowed extension");
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::InvalidRequest(format!("failed to read upload: {err}")))?;

        let stored = StoredFile::new(&state.config.upload_dir, &original_name);
        tokio::fs::write(&stored.path, &data)
            .await
            .map_err(|err| ApiError::Internal(anyhow::anyhow!("failed to store upload: {err}")))?;

        debug!(
            server_name = %stored.storage_name,
            bytes = data.len(),
            "upload stored"
        );
        accepted.push(UploadedFile::from(stored));
    }

    if !saw_files_field {
        return Err(ApiError::InvalidRequest("no file part".to_string()));
    }

    Ok(Json(UploadResponse { files: accepted }))
}

/// Convert previously uploaded images into a single PDF.
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<PdfResponse>, ApiError> {
    state.counter.increment();

    if req.files.is_empty() {
        return Err(ApiError::InvalidRequest("no files provided".to_string()));
    }
    if let Some(name) = &req.output_name {
        debug!(requested = %name, "client-suggested output name ignored");
    }

    let mut image_paths = Vec::with_capacity(req.files.len());
    for name in &req.files {
        image_paths.push(storage::resolve(&state.config.upload_dir, name)?);
    }

    let filename = storage::output_name("out", "pdf");
    let output_path = state.config.upload_dir.join(&filename);

    run_blocking(move || papierwerk_document::convert_images_to_pdf(&image_paths, &output_path))
        .await?;

    Ok(Json(PdfResponse {
        pdf_url: format!("/api/download/{filename}"),
        filename,
    }))
}

/// Merge two or more previously uploaded PDFs.
pub async fn merge(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MergeRequest>,
) -> Result<Json<PdfResponse>, ApiError> {
    if req.files.len() < 2 {
        return Err(ApiError::InvalidRequest(
            "at least 2 files required for merging".to_string(),
        ));
    }

    let mut pdf_paths = Vec::with_capacity(req.files.len());
    for name in &req.files {
        pdf_paths.push(storage::resolve(&state.config.upload_dir, name)?);
    }

    let filename = storage::output_name("merged", "pdf");
    let output_path = state.config.upload_dir.join(&filename);

    run_blocking(move || papierwerk_document::merge_pdfs(&pdf_paths, &output_path)).await?;

    Ok(Json(PdfResponse {
        pdf_url: format!("/api/download/{filename}"),
        filename,
    }))
}

/// Rotate selected pages of an uploaded PDF.
pub async fn rotate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RotateRequest>,
) -> Result<Json<PdfResponse>, ApiError> {
    let input_path = storage::resolve(&state.config.upload_dir, &req.file)?;

    let filename = storage::output_name("rotated", "pdf");
    let output_path = state.config.upload_dir.join(&filename);
    let rotations = req.rotations;

    run_blocking(move || PdfEditor::open(&input_path)?.rotate_pages(&rotations, &output_path))
        .await?;

    Ok(Json(PdfResponse {
        pdf_url: format!("/api/download/{filename}"),
        filename,
    }))
}

/// Delete selected 1-indexed pages from an uploaded PDF.
pub async fn delete_pages(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeletePagesRequest>,
) -> Result<Json<PdfResponse>, ApiError> {
    state.counter.increment();

    let input_path = storage::resolve(&state.config.upload_dir, &req.file)?;

    // Non-positive entries can never match a page; drop them here so the
    // engine works on plain page numbers.
    let pages: Vec<u32> = req
        .pages
        .iter()
        .filter(|&&page| page > 0 && page <= u32::MAX as i64)
        .map(|&page| page as u32)
        .collect();

    let filename = storage::output_name("edited", "pdf");
    let output_path = state.config.upload_dir.join(&filename);

    run_blocking(move || PdfEditor::open(&input_path)?.delete_pages(&pages, &output_path)).await?;

    Ok(Json(PdfResponse {
        pdf_url: format!("/api/download/{filename}"),
        filename,
    }))
}

/// Split an uploaded PDF into one document per page range.
pub async fn split(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SplitRequest>,
) -> Result<Json<SplitResponse>, ApiError> {
    let input_path = storage::resolve(&state.config.upload_dir, &req.file)?;

    if req.ranges.is_empty() {
        return Err(ApiError::InvalidRequest("no ranges provided".to_string()));
    }
    let specs = req
        .ranges
        .iter()
        .map(|range| range.parse::<PageRangeSpec>())
        .collect::<Result<Vec<_>, _>>()?;

    // The engine names parts by position; give it a scratch directory, then
    // move the parts onto collision-resistant storage names.
    let scratch = state
        .config
        .upload_dir
        .join(format!("split_scratch_{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&scratch)
        .await
        .map_err(|err| ApiError::Internal(anyhow::anyhow!("failed to create scratch dir: {err}")))?;

    let scratch_for_engine = scratch.clone();
    let produced = run_blocking(move || {
        PdfEditor::open(&input_path)?.split_by_ranges(&specs, &scratch_for_engine)
    })
    .await?;

    let batch = Uuid::new_v4();
    let mut parts = Vec::with_capacity(produced.len());
    for (index, part_path) in produced.iter().enumerate() {
        let filename = format!("split_{}_part_{}.pdf", batch, index + 1);
        let destination = state.config.upload_dir.join(&filename);
        tokio::fs::rename(part_path, &destination)
            .await
            .map_err(|err| {
                ApiError::Internal(anyhow::anyhow!("failed to publish split part: {err}"))
            })?;
        parts.push(SplitPart {
            pdf_url: format!("/api/download/{filename}"),
            filename,
        });
    }
    let _ = tokio::fs::remove_dir(&scratch).await;

    Ok(Json(SplitResponse { parts }))
}

/// Re-encode an uploaded image as a JPEG at the requested quality.
pub async fn compress(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompressRequest>,
) -> Result<Json<CompressResponse>, ApiError> {
    state.counter.increment();

    let input_path = storage::resolve(&state.config.upload_dir, &req.file)?;
    let quality = req.quality.unwrap_or(DEFAULT_COMPRESS_QUALITY).clamp(1, 100);

    let filename = storage::output_name("compressed", "jpg");
    let output_path = state.config.upload_dir.join(&filename);

    run_blocking(move || {
        papierwerk_document::compress_to_file(&input_path, &output_path, quality, None)
    })
    .await?;

    Ok(Json(CompressResponse {
        url: format!("/api/download/{filename}"),
        filename,
    }))
}

/// Current value of the usage counter.
pub async fn get_counter(State(state): State<Arc<AppState>>) -> Json<CounterResponse> {
    Json(CounterResponse {
        count: state.counter.read(),
    })
}

/// Stream a previously produced file back as an attachment.
pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let path = storage::resolve(&state.config.upload_dir, &filename)?;

    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::NotFound(filename.clone()))?;

    Ok((
        StatusCode::OK,
        [
            (
                "Content-Type".to_string(),
                storage::content_type_for(&filename).to_string(),
            ),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        data,
    ))
}
