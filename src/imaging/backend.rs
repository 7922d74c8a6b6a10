//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the icon pipeline
//! needs from an imaging engine: identify (read dimensions) and resize
//! (decode, scale to exact dimensions, encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Both operations work on in-memory bytes; the pipeline reads the
//! source file exactly once and owns all filesystem writes.

use super::params::ResizeParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

/// Trait for image processing backends.
///
/// `Sync` is required because icons are emitted in parallel with rayon and
/// every worker shares the same backend reference.
pub trait ImageBackend: Sync {
    /// Get image dimensions from encoded bytes.
    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, BackendError>;

    /// Resize to exactly the requested dimensions and return the encoded bytes.
    fn resize(&self, params: &ResizeParams) -> Result<Vec<u8>, BackendError>;
}
