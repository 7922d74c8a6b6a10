//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only, no full decode) |
//! | Decode (JPEG, PNG) | `image` crate, format sniffed from content |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the requested quality |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, adaptive filtering |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{Codec, Quality, ResizeParams};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, BackendError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(BackendError::Io)
}

/// Decode an image held in memory.
fn load_image(bytes: &[u8]) -> Result<DynamicImage, BackendError> {
    reader(bytes)?
        .decode()
        .map_err(|e| BackendError::ProcessingFailed(format!("Failed to decode image: {}", e)))
}

/// Encode into a fresh buffer with the given codec.
fn encode_image(img: &DynamicImage, codec: Codec, quality: Quality) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    let result = match codec {
        // JPEG has no alpha channel
        Codec::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality.value() as u8)),
        Codec::Png => img.write_with_encoder(PngEncoder::new_with_quality(
            &mut buf,
            quality.png_compression(),
            PngFilter::Adaptive,
        )),
    };
    result.map_err(|e| BackendError::ProcessingFailed(format!("{:?} encode failed: {}", codec, e)))?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, BackendError> {
        let (width, height) = reader(bytes)?.into_dimensions().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<Vec<u8>, BackendError> {
        let img = load_image(params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        encode_image(&resized, params.codec, params.quality)
    }
}
