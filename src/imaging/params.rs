//! Parameter types for image operations.
//!
//! These structs describe *what* to produce, not *how*. They are the
//! interface between the [`emit`](crate::emit) stage (which decides which
//! icons to create) and the [`backend`](super::backend) (which does the pixel
//! work). Keeping them separate lets tests swap in a mock backend without
//! touching emission logic.
//!
//! ## Types
//!
//! - [`Quality`]: Encoding quality (1–100, default 90). Clamped on construction.
//! - [`Codec`]: Output codec. Always mirrors the source format.
//! - [`ResizeParams`]: Everything one icon needs: source bytes, target dimensions, codec, quality.

use image::codecs::png::CompressionType;

/// Quality setting for image encoding (1-100).
///
/// JPEG takes the value as its encoder quality. PNG is lossless, so the value
/// picks a compression effort instead (see [`Quality::png_compression`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Map the quality knob onto the PNG encoder's compression levels.
    pub fn png_compression(self) -> CompressionType {
        match self.0 {
            67.. => CompressionType::Best,
            34..=66 => CompressionType::Default,
            _ => CompressionType::Fast,
        }
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Output codec for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Jpeg,
    Png,
}

/// Parameters for one resize + encode operation.
///
/// The source bytes are borrowed: every icon reads the same immutable buffer
/// and decodes its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams<'a> {
    pub source: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub codec: Codec,
    pub quality: Quality,
}
