//! Image processing in pure Rust, statically linked.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Resize → JPEG/PNG** | Lanczos3 + `JpegEncoder` / `PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing one icon encode
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use params::{Codec, Quality, ResizeParams};
pub use rust_backend::RustBackend;
