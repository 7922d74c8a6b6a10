//! # favicon-generator
//!
//! Turns one square JPEG or PNG into a complete favicon set, a web app
//! manifest and the `<link>` tags that reference them.
//!
//! # Architecture: One Linear Pipeline
//!
//! ```text
//! logo.png ──validate──▶ SourceImage ──hash──▶ ?v= token
//!                            │
//!                            ├──emit (parallel)──▶ favicon-{W}x{H}.png ×9
//!                            ├──links──────────▶ <link> snippet (stdout)
//!                            └──manifest───────▶ manifest.webmanifest
//! ```
//!
//! Everything is deterministic: the same input bytes always produce the same
//! files, the same snippet and the same cache-busting token.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | The fixed table of icon sizes and their HTML/manifest roles |
//! | [`validate`] | Existence, extension, size and aspect checks; loads the [`validate::SourceImage`] |
//! | [`hash`] | Content-derived cache-busting token |
//! | [`emit`] | Parallel resize + encode + write of every catalog entry |
//! | [`links`] | HTML `<link>` snippet, rendered with Maud |
//! | [`manifest`] | `manifest.webmanifest` document and writer |
//! | [`pipeline`] | Runs the stages in order |
//! | [`imaging`] | Backend trait and the pure-Rust `image` implementation |
//! | [`config`] | Optional TOML config: quality and worker count |
//! | [`output`] | Stdout snippet and stderr report formatting |
//! | [`types`] | Shared types ([`types::SourceFormat`]) |
//!
//! # Design Decisions
//!
//! ## Output Mirrors Input
//!
//! A `.jpg` source produces `.jpg` icons advertised as `image/jpg`; a `.png`
//! source produces `.png` icons. The extension is taken verbatim, so `jpg`
//! and `jpeg` are kept distinct in file names and MIME types.
//!
//! ## Content-Hashed Manifest URLs
//!
//! Manifest icon URLs carry `?v=<sha256 of the source>`. Browsers refetch
//! icons only when the source actually changes, and re-runs on an unchanged
//! image leave the manifest byte-identical.
//!
//! ## Pure-Rust Imaging
//!
//! Resizing and encoding use the `image` crate (Lanczos3, JPEG and PNG
//! encoders). No system libraries are needed; the binary is self-contained.

pub mod catalog;
pub mod config;
pub mod emit;
pub mod hash;
pub mod imaging;
pub mod links;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod types;
pub mod validate;

pub use pipeline::{GenerateOptions, GenerateResult, PipelineError, generate};

#[cfg(test)]
pub(crate) mod test_helpers;
