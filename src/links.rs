//! HTML `<link>` snippet for the generated icons.
//!
//! The snippet is meant to be pasted straight into a page's `<head>`, so line
//! order is part of the contract: catalog order, then the manifest link.
//!
//! | Entry | Line |
//! |---|---|
//! | `rel` = icon | `<link rel="icon" type="image/png" href="/favicon-32x32.png">` |
//! | other `rel` | `<link rel="apple-touch-icon" sizes="48x48" href="/favicon-48x48.png">` |
//! | no `rel` | *(none, manifest-only)* |
//!
//! Markup is rendered with [maud](https://maud.lambda.xyz/), so attribute
//! values are escaped and `<link>` is emitted as a void element.

use crate::catalog::{LinkRel, SizeSpec};
use crate::types::SourceFormat;
use maud::{Markup, html};

/// Path the manifest is served from, relative to the site root.
pub const MANIFEST_HREF: &str = "/manifest.webmanifest";

/// The `<link>` line for one catalog entry, or `None` if the entry is
/// manifest-only.
pub fn link_for(spec: &SizeSpec, format: SourceFormat) -> Option<Markup> {
    let rel = spec.rel?;
    let href = spec.href(format);
    Some(match rel {
        LinkRel::Icon => html! {
            link rel=(rel.as_str()) type=(format.mime_type()) href=(href);
        },
        _ => html! {
            link rel=(rel.as_str()) sizes=(spec.sizes()) href=(href);
        },
    })
}

pub fn manifest_link() -> Markup {
    html! {
        link rel="manifest" href=(MANIFEST_HREF) crossorigin="anonymous";
    }
}

/// Build the full snippet: one line per linked entry, then the manifest link.
pub fn build_links(specs: &[SizeSpec], format: SourceFormat) -> Vec<String> {
    specs
        .iter()
        .filter_map(|spec| link_for(spec, format))
        .chain(std::iter::once(manifest_link()))
        .map(|markup| markup.into_string())
        .collect()
}
