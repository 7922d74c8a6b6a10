//! CLI output formatting.
//!
//! Standard output carries exactly one thing: the `<link>` snippet, ready to
//! paste into a page's `<head>`. Everything else (the run report, progress
//! and diagnostics) goes to stderr through the logger so that
//! `favicon-generator logo.png > head.html` stays clean.
//!
//! # Output Format
//!
//! ## Snippet (stdout)
//!
//! ```text
//! <link rel="icon" type="image/png" href="/favicon-32x32.png">
//! <link rel="apple-touch-icon" sizes="48x48" href="/favicon-48x48.png">
//! ...
//! <link rel="manifest" href="/manifest.webmanifest" crossorigin="anonymous">
//! ```
//!
//! ## Report (stderr, `-v`)
//!
//! ```text
//! Icons → public/
//!     001 favicon-32x32.png (32x32, 1.2 KB)
//!     002 favicon-48x48.png (48x48, 2.9 KB)
//!     ...
//! Manifest → public/manifest.webmanifest (v=3f2a9c1d)
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and are pure. `print_*`
//! wrappers do the writing.

use crate::pipeline::GenerateResult;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte count.
fn format_bytes(len: usize) -> String {
    if len < 1024 {
        format!("{} B", len)
    } else if len < 1024 * 1024 {
        format!("{:.1} KB", len as f64 / 1024.0)
    } else {
        format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
    }
}

/// The snippet printed to stdout.
pub fn format_links(result: &GenerateResult) -> Vec<String> {
    result.links.clone()
}

/// Per-icon report of a finished run.
pub fn format_report(result: &GenerateResult) -> Vec<String> {
    let mut lines = vec![format!("Icons → {}", result.output_dir.display())];

    for (i, icon) in result.icons.iter().enumerate() {
        let file_name = icon
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| icon.name.to_string());
        lines.push(format!(
            "{}{} {} ({}x{}, {})",
            indent(1),
            format_index(i + 1),
            file_name,
            icon.width,
            icon.height,
            format_bytes(icon.byte_len)
        ));
    }

    let short_hash: String = result.hash.chars().take(8).collect();
    lines.push(format!(
        "Manifest → {} (v={})",
        result.manifest_path.display(),
        short_hash
    ));
    lines
}

pub fn print_links(result: &GenerateResult) {
    println!("{}", format_links(result).join("\n"));
}

/// Log the report at `info`, one record per line.
pub fn log_report(result: &GenerateResult) {
    for line in format_report(result) {
        log::info!("{}", line);
    }
}
