// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// papierwerk-document — Document processing for the Papierwerk service.
//
// Provides image normalization (alpha/palette flattening, downscaling, lossy
// re-encoding), image-to-PDF assembly, and PDF page editing (merge, page
// deletion, rotation, splitting by page ranges).

pub mod image;
pub mod pdf;

// Re-export the primary entry points so callers can use
// `papierwerk_document::PdfEditor` etc.
pub use image::normalizer::{
    CONVERT_QUALITY, DEFAULT_COMPRESS_QUALITY, ImageNormalizer, compress_to_file,
    normalize_for_pdf,
};
pub use pdf::assembler::convert_images_to_pdf;
pub use pdf::editor::{PdfEditor, merge_pdfs};
