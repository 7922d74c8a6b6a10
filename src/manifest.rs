//! Web app manifest (`manifest.webmanifest`).
//!
//! ## Output
//!
//! ```json
//! {
//!   "name": "Demo",
//!   "short_name": "Demo",
//!   "icons": [
//!     {
//!       "src": "/favicon-48x48.png?v=<sha256>",
//!       "sizes": "48x48",
//!       "type": "image/png"
//!     }
//!   ]
//! }
//! ```
//!
//! Only catalog entries flagged for the manifest are listed, in catalog
//! order. Every `src` carries the same content-derived `?v=` token, so
//! re-running on an unchanged image produces a byte-identical file.

use crate::catalog::SizeSpec;
use crate::types::SourceFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILENAME: &str = "manifest.webmanifest";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The manifest document. Missing names are omitted rather than written as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Build the manifest from the catalog entries marked for inclusion.
pub fn build_manifest(
    specs: &[SizeSpec],
    app_name: Option<&str>,
    short_name: Option<&str>,
    format: SourceFormat,
    hash: &str,
) -> ManifestDocument {
    let icons = specs
        .iter()
        .filter(|spec| spec.include_in_manifest)
        .map(|spec| ManifestIcon {
            src: format!("{}?v={}", spec.href(format), hash),
            sizes: spec.sizes(),
            mime_type: format.mime_type(),
        })
        .collect();

    ManifestDocument {
        name: app_name.map(str::to_string),
        short_name: short_name.map(str::to_string),
        icons,
    }
}

/// Serialize as 2-space pretty JSON.
pub fn to_json(manifest: &ManifestDocument) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Write the manifest into `output_dir`, replacing any existing file.
pub fn write_manifest(
    manifest: &ManifestDocument,
    output_dir: &Path,
) -> Result<PathBuf, ManifestError> {
    let path = output_dir.join(MANIFEST_FILENAME);
    std::fs::write(&path, to_json(manifest)?)?;
    Ok(path)
}
