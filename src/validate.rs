//! Pre-flight validation of the source image.
//!
//! Checks run in a fixed order so the same bad input always reports the same
//! error: existence → extension → read → decode → size → aspect ratio. Nothing
//! is written to disk here; a rejected input leaves the output directory
//! untouched.

use crate::catalog::MIN_SOURCE_EDGE;
use crate::hash::content_hash;
use crate::imaging::{BackendError, Dimensions, ImageBackend};
use crate::types::SourceFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("File does not exist: {0}")]
    NotFound(PathBuf),
    #[error("File extension is not jpg, jpeg or png: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: BackendError,
    },
    #[error(
        "Image is too small ({}x{}). Minimum size is {min}x{min}",
        .dims.width,
        .dims.height
    )]
    TooSmall { dims: Dimensions, min: u32 },
    #[error("Image is not square ({}x{})", .dims.width, .dims.height)]
    NotSquare { dims: Dimensions },
}

/// A validated source image, read once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub dimensions: Dimensions,
    pub format: SourceFormat,
    /// Cache-busting token derived from `bytes`.
    pub hash: String,
}

/// Validate the input path and load it as a [`SourceImage`].
pub fn validate(
    backend: &impl ImageBackend,
    path: &Path,
) -> Result<SourceImage, ValidationError> {
    if !path.exists() {
        return Err(ValidationError::NotFound(path.to_path_buf()));
    }

    let format = SourceFormat::from_path(path)
        .ok_or_else(|| ValidationError::UnsupportedFormat(path.to_path_buf()))?;

    let bytes = std::fs::read(path).map_err(|source| ValidationError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dimensions = backend
        .identify(&bytes)
        .map_err(|source| ValidationError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    check_dimensions(dimensions)?;

    let hash = content_hash(&bytes);
    log::info!(
        "Source → {} ({}x{}, {}, {} bytes)",
        path.display(),
        dimensions.width,
        dimensions.height,
        format,
        bytes.len()
    );

    Ok(SourceImage {
        path: path.to_path_buf(),
        bytes,
        dimensions,
        format,
        hash,
    })
}

/// Size check first, then aspect ratio.
fn check_dimensions(dims: Dimensions) -> Result<(), ValidationError> {
    if dims.width < MIN_SOURCE_EDGE || dims.height < MIN_SOURCE_EDGE {
        return Err(ValidationError::TooSmall {
            dims,
            min: MIN_SOURCE_EDGE,
        });
    }
    if !dims.is_square() {
        return Err(ValidationError::NotSquare { dims });
    }
    Ok(())
}
