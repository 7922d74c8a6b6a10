//! Icon emission: resize, encode and write one file per catalog entry.
//!
//! ## Output Structure
//!
//! ```text
//! <output>/
//! ├── favicon-32x32.png
//! ├── favicon-48x48.png
//! ├── ...
//! └── favicon-512x512.png
//! ```
//!
//! The extension always mirrors the source (`logo.jpeg` → `favicon-*.jpeg`).
//!
//! ## Parallel Processing
//!
//! Entries have no data dependency on each other, so they fan out across the
//! global [rayon](https://docs.rs/rayon) pool. Each worker borrows the same
//! immutable source bytes, decodes its own copy and writes a distinct path;
//! nothing needs locking. [`emit_all`] joins every worker before returning
//! and reports *all* failures, not just the first one to finish.

use crate::catalog::SizeSpec;
use crate::imaging::{BackendError, ImageBackend, Quality, ResizeParams};
use crate::validate::SourceImage;
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to encode {name}: {source}")]
    Encode {
        name: &'static str,
        source: BackendError,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Every emission that failed in one run, in catalog order.
#[derive(Debug)]
pub struct EmitFailures(pub Vec<EmitError>);

impl fmt::Display for EmitFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} icon(s) failed", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for EmitFailures {}

impl From<EmitError> for EmitFailures {
    fn from(err: EmitError) -> Self {
        Self(vec![err])
    }
}

/// One encoded icon, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl GeneratedAsset {
    /// Write the encoded bytes, overwriting any previous run's output.
    pub fn write(&self) -> Result<(), EmitError> {
        std::fs::write(&self.path, &self.bytes).map_err(|source| EmitError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// What remains of a [`GeneratedAsset`] once it is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedIcon {
    pub name: &'static str,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub byte_len: usize,
}

/// Resize and encode one catalog entry. Pure: nothing touches the disk.
pub fn render(
    backend: &impl ImageBackend,
    source: &SourceImage,
    output_dir: &Path,
    spec: &SizeSpec,
    quality: Quality,
) -> Result<GeneratedAsset, EmitError> {
    let bytes = backend
        .resize(&ResizeParams {
            source: &source.bytes,
            width: spec.width,
            height: spec.height,
            codec: source.format.codec(),
            quality,
        })
        .map_err(|source| EmitError::Encode {
            name: spec.name,
            source,
        })?;

    Ok(GeneratedAsset {
        path: output_dir.join(spec.file_name(source.format)),
        bytes,
    })
}

/// Render one catalog entry and write it to `output_dir`.
pub fn emit(
    backend: &impl ImageBackend,
    source: &SourceImage,
    output_dir: &Path,
    spec: &SizeSpec,
    quality: Quality,
) -> Result<GeneratedAsset, EmitError> {
    let asset = render(backend, source, output_dir, spec, quality)?;
    asset.write()?;
    log::debug!("wrote {} ({} bytes)", asset.path.display(), asset.bytes.len());
    Ok(asset)
}

/// Create the output directory if needed. Only the last path component is
/// created; a missing parent is an error.
pub fn ensure_output_dir(output_dir: &Path) -> Result<(), EmitError> {
    if output_dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir(output_dir).map_err(|source| EmitError::Write {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Emit every entry of `specs` in parallel.
///
/// Results keep the order of `specs`. If any entry fails, the others still
/// run to completion (their files stay on disk) and every failure is
/// returned.
pub fn emit_all(
    backend: &impl ImageBackend,
    source: &SourceImage,
    output_dir: &Path,
    specs: &[SizeSpec],
    quality: Quality,
) -> Result<Vec<EmittedIcon>, EmitFailures> {
    ensure_output_dir(output_dir)?;

    let results: Vec<Result<EmittedIcon, EmitError>> = specs
        .par_iter()
        .map(|spec| {
            emit(backend, source, output_dir, spec, quality).map(|asset| EmittedIcon {
                name: spec.name,
                path: asset.path,
                width: spec.width,
                height: spec.height,
                byte_len: asset.bytes.len(),
            })
        })
        .collect();

    let mut icons = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(icon) => icons.push(icon),
            Err(err) => {
                log::error!("{}", err);
                failures.push(err);
            }
        }
    }

    if failures.is_empty() {
        Ok(icons)
    } else {
        Err(EmitFailures(failures))
    }
}
