// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF assembler — build a paginated document from raster images using
// `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Each input image becomes one page sized to the image
// itself, so the output carries no artificial margins.

use std::path::{Path, PathBuf};

use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument, warn};

use papierwerk_core::error::{PapierwerkError, Result};

use crate::image::normalizer::normalize_for_pdf;

/// Resolution at which pixel dimensions map to page dimensions.
const ASSEMBLY_DPI: f32 = 96.0;

/// Convert a list of image files into a single PDF, one image per page.
///
/// Images are normalized (flattened, re-encoded at conversion quality) before
/// assembly. An image that cannot be read or decoded is logged and skipped;
/// the surviving images keep their relative order. The operation fails with
/// [`PapierwerkError::NoValidInput`] when nothing survives, and writes the
/// output file only after the whole document has been encoded.
#[instrument(skip_all, fields(inputs = image_paths.len(), output = %output_path.as_ref().display()))]
pub fn convert_images_to_pdf(
    image_paths: &[PathBuf],
    output_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let mut survivors: Vec<Vec<u8>> = Vec::new();
    for path in image_paths {
        match normalize_for_pdf(path) {
            Ok(bytes) => survivors.push(bytes),
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable image");
            }
        }
    }

    if survivors.is_empty() {
        return Err(PapierwerkError::NoValidInput);
    }

    let bytes = assemble(&survivors)?;
    std::fs::write(output_path.as_ref(), &bytes)?;

    info!(
        pages = survivors.len(),
        output_bytes = bytes.len(),
        "images assembled into PDF"
    );
    Ok(output_path.as_ref().to_path_buf())
}

/// Build the PDF from normalized image bytes, one page per image.
fn assemble(images: &[Vec<u8>]) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("Papierwerk Document");
    let mut pages: Vec<PdfPage> = Vec::with_capacity(images.len());

    for (index, jpeg) in images.iter().enumerate() {
        let dynamic_image = ::image::load_from_memory(jpeg).map_err(|err| {
            PapierwerkError::ImageError(format!(
                "failed to decode normalized image {}: {}",
                index, err
            ))
        })?;

        let width_px = dynamic_image.width() as usize;
        let height_px = dynamic_image.height() as usize;

        let rgb_image = dynamic_image.to_rgb8();
        let raw = RawImage {
            pixels: RawImageData::U8(rgb_image.into_raw()),
            width: width_px,
            height: height_px,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        // Page size equals the image size at the assembly DPI.
        let page_w = Mm(width_px as f32 * 25.4 / ASSEMBLY_DPI);
        let page_h = Mm(height_px as f32 * 25.4 / ASSEMBLY_DPI);

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: Some(1.0),
                scale_y: Some(1.0),
                dpi: Some(ASSEMBLY_DPI),
                rotate: None,
            },
        }];

        debug!(index, width_px, height_px, "image placed on page");
        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use lopdf::Document;
    use std::io::Cursor;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 60, 100]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        std::fs::write(path, buffer.into_inner()).unwrap();
    }

    #[test]
    fn one_page_per_image_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        write_png(&first, 100, 50);
        write_png(&second, 64, 64);

        let output = dir.path().join("out.pdf");
        convert_images_to_pdf(&[first, second], &output).unwrap();

        let doc = Document::load(&output).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn unreadable_images_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        write_png(&good, 40, 40);

        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"not an image at all").unwrap();
        let missing = dir.path().join("missing.png");

        let output = dir.path().join("out.pdf");
        convert_images_to_pdf(&[corrupt, good, missing], &output).unwrap();

        let doc = Document::load(&output).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn all_invalid_inputs_fail_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"garbage").unwrap();

        let output = dir.path().join("out.pdf");
        let err =
            convert_images_to_pdf(&[corrupt, dir.path().join("missing.png")], &output).unwrap_err();

        assert!(matches!(err, PapierwerkError::NoValidInput));
        assert!(!output.exists());
    }

    #[test]
    fn rgba_input_yields_single_flattened_page() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("photo.png");
        write_png(&photo, 100, 50);

        let output = dir.path().join("photo.pdf");
        convert_images_to_pdf(&[photo], &output).unwrap();

        let doc = Document::load(&output).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
