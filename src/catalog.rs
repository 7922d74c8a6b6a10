//! The fixed table of icons to generate.
//!
//! Order matters: it is the order of the printed `<link>` lines and of the
//! manifest's `icons` array.
//!
//! | Name | Size | `rel` | Manifest |
//! |---|---|---|---|
//! | favicon-32x32 | 32 | icon | no |
//! | favicon-48x48 | 48 | apple-touch-icon | yes |
//! | favicon-72x72 | 72 | apple-touch-icon | yes |
//! | favicon-96x96 | 96 | apple-touch-icon | yes |
//! | favicon-144x144 | 144 | — | yes |
//! | favicon-192x192 | 192 | — | yes |
//! | favicon-256x256 | 256 | apple-touch-icon | yes |
//! | favicon-384x384 | 384 | apple-touch-icon | yes |
//! | favicon-512x512 | 512 | apple-touch-icon | yes |

use crate::types::SourceFormat;

/// HTML link relation advertised for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRel {
    Icon,
    AppleTouchIcon,
}

impl LinkRel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::AppleTouchIcon => "apple-touch-icon",
        }
    }
}

/// One output icon: target resolution plus its HTML/manifest role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Output file stem.
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    /// `None` means no discrete `<link>` line.
    pub rel: Option<LinkRel>,
    pub include_in_manifest: bool,
}

impl SizeSpec {
    /// `"{width}x{height}"`, as used by both `sizes=` and the manifest.
    pub fn sizes(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    pub fn file_name(&self, format: SourceFormat) -> String {
        format!("{}.{}", self.name, format.extension())
    }

    /// Root-relative URL of the icon, e.g. `/favicon-32x32.png`.
    pub fn href(&self, format: SourceFormat) -> String {
        format!("/{}", self.file_name(format))
    }
}

const fn spec(
    name: &'static str,
    edge: u32,
    rel: Option<LinkRel>,
    include_in_manifest: bool,
) -> SizeSpec {
    SizeSpec {
        name,
        width: edge,
        height: edge,
        rel,
        include_in_manifest,
    }
}

use LinkRel::{AppleTouchIcon, Icon};

pub const CATALOG: &[SizeSpec] = &[
    spec("favicon-32x32", 32, Some(Icon), false),
    spec("favicon-48x48", 48, Some(AppleTouchIcon), true),
    spec("favicon-72x72", 72, Some(AppleTouchIcon), true),
    spec("favicon-96x96", 96, Some(AppleTouchIcon), true),
    spec("favicon-144x144", 144, None, true),
    spec("favicon-192x192", 192, None, true),
    spec("favicon-256x256", 256, Some(AppleTouchIcon), true),
    spec("favicon-384x384", 384, Some(AppleTouchIcon), true),
    spec("favicon-512x512", 512, Some(AppleTouchIcon), true),
];

/// Smallest accepted source edge: the largest icon must never be upscaled.
pub const MIN_SOURCE_EDGE: u32 = 512;
