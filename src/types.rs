//! Shared types used across pipeline stages.

use crate::imaging::Codec;
use std::fmt;
use std::path::Path;

/// Format of the source image, taken verbatim from its file extension.
///
/// The extension is kept as written (`jpg` vs `jpeg`) because it is reused
/// for output file names and MIME types: a `logo.jpg` input yields
/// `favicon-32x32.jpg` files advertised as `image/jpg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpg,
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Detect the format from a path's extension. Matching is case-sensitive:
    /// `logo.PNG` is not accepted.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    pub fn mime_type(self) -> String {
        format!("image/{}", self.extension())
    }

    /// Codec used to encode outputs. Outputs always mirror the input format.
    pub fn codec(self) -> Codec {
        match self {
            Self::Jpg | Self::Jpeg => Codec::Jpeg,
            Self::Png => Codec::Png,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_accepts_whitelist() {
        assert_eq!(SourceFormat::from_path(Path::new("a/logo.jpg")), Some(SourceFormat::Jpg));
        assert_eq!(SourceFormat::from_path(Path::new("logo.jpeg")), Some(SourceFormat::Jpeg));
        assert_eq!(SourceFormat::from_path(Path::new("logo.png")), Some(SourceFormat::Png));
    }

    #[test]
    fn from_path_is_case_sensitive() {
        assert_eq!(SourceFormat::from_path(Path::new("logo.PNG")), None);
        assert_eq!(SourceFormat::from_path(Path::new("logo.Jpg")), None);
    }

    #[test]
    fn from_path_rejects_other_and_missing_extensions() {
        assert_eq!(SourceFormat::from_path(Path::new("logo.gif")), None);
        assert_eq!(SourceFormat::from_path(Path::new("logo")), None);
        assert_eq!(SourceFormat::from_path(Path::new(".png")), None);
    }

    #[test]
    fn mime_type_mirrors_extension() {
        assert_eq!(SourceFormat::Jpg.mime_type(), "image/jpg");
        assert_eq!(SourceFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(SourceFormat::Png.mime_type(), "image/png");
    }

    #[test]
    fn codec_never_cross_converts() {
        assert_eq!(SourceFormat::Jpg.codec(), Codec::Jpeg);
        assert_eq!(SourceFormat::Jpeg.codec(), Codec::Jpeg);
        assert_eq!(SourceFormat::Png.codec(), Codec::Png);
    }

    #[test]
    fn display_includes_dot() {
        assert_eq!(SourceFormat::Jpeg.to_string(), ".jpeg");
    }
}
