//! The icon-set generation pipeline.
//!
//! ```text
//! Start → Validated → Hashed → Emitting (×9) → LinksBuilt → ManifestWritten → Done
//! ```
//!
//! The pipeline runs straight through with no retries. The first failing step
//! ends the run with a [`PipelineError`]. Validation failures happen before
//! anything is written. An emission failure is reported only after every
//! in-flight icon has finished, and icons that were already written are left
//! in place (a re-run overwrites them).
//!
//! The source file is read exactly once, and hashed exactly once, before any
//! emission starts.

use crate::catalog::{CATALOG, SizeSpec};
use crate::emit::{EmitFailures, EmittedIcon, emit_all};
use crate::imaging::{ImageBackend, Quality, RustBackend};
use crate::links::build_links;
use crate::manifest::{ManifestError, build_manifest, write_manifest};
use crate::validate::{ValidationError, validate};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Emit(#[from] EmitFailures),
    #[error("Failed to write manifest: {0}")]
    Manifest(#[from] ManifestError),
}

/// Options for one run, validated once at the CLI boundary.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Source image (`.jpg`, `.jpeg` or `.png`).
    pub input: PathBuf,
    /// Where icons and the manifest go. Defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
    /// Manifest `name`.
    pub app_name: Option<String>,
    /// Manifest `short_name`.
    pub short_name: Option<String>,
    pub quality: Quality,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// The explicit output directory, or the directory holding the input.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => default_output_dir(&self.input),
        }
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Everything a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// HTML `<link>` lines, in paste order.
    pub links: Vec<String>,
    pub manifest_path: PathBuf,
    pub output_dir: PathBuf,
    /// Written icons, in catalog order.
    pub icons: Vec<EmittedIcon>,
    /// Cache-busting token used in the manifest.
    pub hash: String,
}

/// Run the pipeline with the production image backend.
pub fn generate(options: &GenerateOptions) -> Result<GenerateResult, PipelineError> {
    generate_with_backend(&RustBackend::new(), options)
}

/// Run the pipeline with a specific backend (allows testing with mock).
pub fn generate_with_backend(
    backend: &impl ImageBackend,
    options: &GenerateOptions,
) -> Result<GenerateResult, PipelineError> {
    generate_catalog(backend, options, CATALOG)
}

fn generate_catalog(
    backend: &impl ImageBackend,
    options: &GenerateOptions,
    catalog: &[SizeSpec],
) -> Result<GenerateResult, PipelineError> {
    let source = validate(backend, &options.input)?;
    log::debug!("cache token v={}", source.hash);

    let output_dir = options.resolved_output_dir();
    log::debug!(
        "emitting {} icons into {}",
        catalog.len(),
        output_dir.display()
    );
    let icons = emit_all(backend, &source, &output_dir, catalog, options.quality)?;

    let links = build_links(catalog, source.format);
    log::debug!("built {} link lines", links.len());

    let manifest = build_manifest(
        catalog,
        options.app_name.as_deref(),
        options.short_name.as_deref(),
        source.format,
        &source.hash,
    );
    let manifest_path = write_manifest(&manifest, &output_dir)?;
    log::debug!("wrote {}", manifest_path.display());

    Ok(GenerateResult {
        links,
        manifest_path,
        output_dir,
        icons,
        hash: source.hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LinkRel;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::imaging::{Codec, Dimensions};
    use crate::manifest::{MANIFEST_FILENAME, ManifestDocument};
    use crate::test_helpers::{list_files, write_jpeg, write_png};
    use crate::types::SourceFormat;
    use std::fs;
    use tempfile::TempDir;

    fn read_manifest(dir: &Path) -> ManifestDocument {
        let content = fs::read_to_string(dir.join(MANIFEST_FILENAME)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    fn options(input: PathBuf, out: &Path) -> GenerateOptions {
        GenerateOptions {
            output_dir: Some(out.to_path_buf()),
            app_name: Some("Demo".into()),
            short_name: Some("Demo".into()),
            ..GenerateOptions::new(input)
        }
    }

    #[test]
    fn default_output_dir_is_input_directory() {
        assert_eq!(
            GenerateOptions::new("assets/logo.png").resolved_output_dir(),
            PathBuf::from("assets")
        );
        assert_eq!(
            GenerateOptions::new("logo.png").resolved_output_dir(),
            PathBuf::from(".")
        );
    }

    #[test]
    fn explicit_output_dir_wins() {
        let opts = GenerateOptions {
            output_dir: Some("dist".into()),
            ..GenerateOptions::new("assets/logo.png")
        };
        assert_eq!(opts.resolved_output_dir(), PathBuf::from("dist"));
    }

    #[test]
    fn mock_run_produces_every_output() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("logo.png");
        fs::write(&input, b"fake png").unwrap();
        let out = tmp.path().join("out");

        let backend = MockBackend::square(600);
        let result = generate_with_backend(&backend, &options(input, &out)).unwrap();

        let mut expected: Vec<String> = CATALOG
            .iter()
            .map(|s| s.file_name(SourceFormat::Png))
            .collect();
        expected.push(MANIFEST_FILENAME.to_string());
        expected.sort();
        assert_eq!(list_files(&out), expected);

        assert_eq!(result.icons.len(), 9);
        assert_eq!(result.links.len(), 8);
        assert_eq!(result.manifest_path, out.join(MANIFEST_FILENAME));
        assert_eq!(result.hash, crate::hash::content_hash(b"fake png"));
    }

    #[test]
    fn mock_run_identifies_once_then_resizes_each_entry() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("logo.jpg");
        fs::write(&input, b"fake").unwrap();

        let backend = MockBackend::square(512);
        generate_with_backend(&backend, &options(input, tmp.path())).unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops[0], RecordedOp::Identify(4));
        assert_eq!(ops.len(), 1 + CATALOG.len());
        assert!(ops[1..].iter().all(|op| matches!(
            op,
            RecordedOp::Resize {
                codec: Codec::Jpeg,
                quality: 90,
                ..
            }
        )));
    }

    #[test]
    fn quality_option_reaches_backend() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("logo.png");
        fs::write(&input, b"fake").unwrap();

        let backend = MockBackend::square(512);
        let opts = GenerateOptions {
            quality: Quality::new(70),
            ..options(input, tmp.path())
        };
        generate_with_backend(&backend, &opts).unwrap();

        assert!(backend.get_operations()[1..]
            .iter()
            .all(|op| matches!(op, RecordedOp::Resize { quality: 70, .. })));
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("logo.png");
        fs::write(&input, b"fake").unwrap();
        let out = tmp.path().join("out");

        let cases = [
            Dimensions { width: 256, height: 256 },
            Dimensions { width: 800, height: 600 },
        ];
        for dims in cases {
            let backend = MockBackend::with_dimensions(vec![dims]);
            let result = generate_with_backend(&backend, &options(input.clone(), &out));
            assert!(matches!(result, Err(PipelineError::Validation(_))));
            assert!(!out.exists(), "{dims:?} must not create output");
            assert!(backend.resized_widths().is_empty());
        }
    }

    #[test]
    fn emission_failure_skips_manifest() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("logo.png");
        fs::write(&input, b"fake").unwrap();
        let out = tmp.path().join("out");

        let backend = MockBackend::square(512).failing_on(&[144]);
        let result = generate_with_backend(&backend, &options(input, &out));

        assert!(matches!(result, Err(PipelineError::Emit(ref f)) if f.0.len() == 1));
        assert!(!out.join(MANIFEST_FILENAME).exists());
        assert_eq!(list_files(&out).len(), CATALOG.len() - 1);
    }

    #[test]
    fn manifest_tokens_match_and_are_stable() {
        let tmp = TempDir::new().unwrap();
        let input = write_png(tmp.path(), "logo.png", 512, 512);
        let out = tmp.path().join("out");

        let first = generate(&options(input.clone(), &out)).unwrap();
        let first_manifest = fs::read(&first.manifest_path).unwrap();

        let manifest = read_manifest(&out);
        let token = format!("?v={}", first.hash);
        assert_eq!(manifest.icons.len(), 8);
        assert!(manifest.icons.iter().all(|i| i.src.ends_with(&token)));

        let second = generate(&options(input, &out)).unwrap();
        assert_eq!(second.hash, first.hash);
        assert_eq!(fs::read(&second.manifest_path).unwrap(), first_manifest);
    }

    #[test]
    fn changed_byte_changes_token() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("logo.png");
        fs::write(&input, b"fake one").unwrap();

        let a = generate_with_backend(&MockBackend::square(512), &options(input.clone(), tmp.path()))
            .unwrap();
        fs::write(&input, b"fake two").unwrap();
        let b = generate_with_backend(&MockBackend::square(512), &options(input, tmp.path()))
            .unwrap();

        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn real_jpeg_run_mirrors_extension() {
        let tmp = TempDir::new().unwrap();
        let input = write_jpeg(tmp.path(), "logo.jpeg", 512, 512);

        let result = generate(&GenerateOptions::new(&input)).unwrap();

        assert_eq!(result.output_dir, tmp.path());
        for icon in &result.icons {
            assert_eq!(icon.path.extension().unwrap(), "jpeg");
            assert_eq!(
                image::image_dimensions(&icon.path).unwrap(),
                (icon.width, icon.height)
            );
        }
        let manifest = read_manifest(tmp.path());
        assert!(manifest.name.is_none());
        assert!(manifest.icons.iter().all(|i| i.mime_type == "image/jpeg"));
        assert!(result.links[0].contains(r#"type="image/jpeg""#));
    }

    #[test]
    fn custom_catalog_drives_links_and_manifest() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("logo.png");
        fs::write(&input, b"fake").unwrap();
        let catalog = [SizeSpec {
            name: "tile",
            width: 64,
            height: 64,
            rel: Some(LinkRel::AppleTouchIcon),
            include_in_manifest: true,
        }];

        let result =
            generate_catalog(&MockBackend::square(512), &options(input, tmp.path()), &catalog)
                .unwrap();

        assert_eq!(result.links.len(), 2);
        assert!(tmp.path().join("tile.png").exists());
        assert_eq!(read_manifest(tmp.path()).icons[0].sizes, "64x64");
    }
}
