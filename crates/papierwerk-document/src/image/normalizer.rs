// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image normalizer — decode, flatten alpha/palette color modes to opaque RGB,
// optionally downscale, and re-encode as baseline JPEG. Operates on in-memory
// images using the `image` crate.

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage};
use std::path::Path;
use tracing::{debug, info, instrument};

use papierwerk_core::error::{PapierwerkError, Result};

/// Default JPEG quality for the standalone compression endpoint.
pub const DEFAULT_COMPRESS_QUALITY: u8 = 60;

/// JPEG quality used when preparing images for PDF assembly. Higher than the
/// compression default: the conversion pipeline optimises for fidelity, the
/// compression endpoint for size.
pub const CONVERT_QUALITY: u8 = 95;

/// Normalization pipeline operating on a single in-memory image.
///
/// All transforms are non-destructive: each method consumes `self` and
/// returns a new `ImageNormalizer` wrapping the transformed image, enabling
/// method chaining.
///
/// ```ignore
/// let jpeg = ImageNormalizer::open("photo.png")?
///     .flatten()
///     .resize_to_width(1200)
///     .to_jpeg_bytes(60)?;
/// ```
#[derive(Debug)]
pub struct ImageNormalizer {
    /// The current working image.
    image: DynamicImage,
}

impl ImageNormalizer {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            PapierwerkError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        debug!(width = img.width(), height = img.height(), "image loaded");
        Ok(Self { image: img })
    }

    /// Create a normalizer from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            PapierwerkError::ImageError(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Drop alpha-bearing or palette color modes, producing opaque 8-bit RGB.
    ///
    /// Alpha is discarded rather than composited against a background; the
    /// pipeline trades color accuracy for robustness here.
    #[instrument(skip(self))]
    pub fn flatten(self) -> Self {
        if self.image.color() == ColorType::Rgb8 {
            return self;
        }
        debug!(mode = ?self.image.color(), "flattening to RGB");
        Self {
            image: DynamicImage::ImageRgb8(self.image.to_rgb8()),
        }
    }

    /// Downscale to `max_width` when the image is wider, preserving aspect
    /// ratio with Lanczos3 filtering. Narrower images pass through untouched.
    #[instrument(skip(self), fields(max_width))]
    pub fn resize_to_width(self, max_width: u32) -> Self {
        let (width, height) = (self.image.width(), self.image.height());
        if width <= max_width {
            return self;
        }
        let ratio = max_width as f64 / width as f64;
        let new_height = ((height as f64 * ratio).round() as u32).max(1);
        info!(
            from_w = width,
            from_h = height,
            to_w = max_width,
            to_h = new_height,
            "downscaling image"
        );
        let resized =
            self.image
                .resize_exact(max_width, new_height, image::imageops::FilterType::Lanczos3);
        Self { image: resized }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as baseline JPEG bytes at `quality` (1-100).
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let rgb = self.image.to_rgb8();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        rgb.write_with_encoder(encoder)
            .map_err(|err| PapierwerkError::ImageError(format!("JPEG encoding failed: {}", err)))?;
        Ok(buffer)
    }
}

/// Normalize an on-disk image for PDF embedding: flatten and re-encode at
/// conversion quality.
pub fn normalize_for_pdf(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    ImageNormalizer::open(path)?
        .flatten()
        .to_jpeg_bytes(CONVERT_QUALITY)
}

/// Compress an image file to a JPEG on disk.
///
/// The standalone entry point behind the compress endpoint: flatten, cap the
/// width when `max_width` is given, and re-encode at `quality`. The output is
/// written only after encoding succeeds.
#[instrument(skip_all, fields(input = %input.as_ref().display(), quality, max_width))]
pub fn compress_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    quality: u8,
    max_width: Option<u32>,
) -> Result<()> {
    let mut normalizer = ImageNormalizer::open(&input)?.flatten();
    if let Some(max_width) = max_width {
        normalizer = normalizer.resize_to_width(max_width);
    }
    let bytes = normalizer.to_jpeg_bytes(quality)?;
    std::fs::write(output.as_ref(), &bytes)?;
    info!(
        output = %output.as_ref().display(),
        bytes = bytes.len(),
        "image compressed"
    );
    Ok(())
}
