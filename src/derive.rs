//! Routing-field derivation from content file paths.
//!
//! Each content file gets its routing metadata from pure string transforms
//! over its path, with front matter able to override the result:
//!
//! - **Slug**: the page URL. `index.md` files become directory indexes
//!   (`docs/index.md` → `/docs/`), everything else gets its extension
//!   stripped and a trailing slash (`blog/post.md` → `/blog/post/`).
//!   A `permalink` front-matter value wins verbatim.
//! - **Section**: the top-level directory (`blog/post.md` → `blog`), or
//!   `home` for files at the content root. Used for layout-template
//!   fallback during route building.
//! - **Layout**: passed through from front matter untouched.
//!
//! JSON data files get a different field: their absolute path with the
//! root-directory prefix stripped, so downstream queries can filter by
//! project-relative globs.
//!
//! Derivation never fails. Malformed paths degrade into best-effort slugs
//! rather than aborting ingestion; every function here is a pure function
//! of its inputs.

use crate::node::{ContentNode, DerivedFields, JsonFields, MarkdownFields, NodeKind};
use std::path::Path;

/// Fallback section for files living at the content root.
pub const ROOT_SECTION: &str = "home";

/// Derive routing fields for a node, dispatching on its kind.
///
/// `root_dir` is the project root used to relativize JSON data paths.
/// It is threaded in explicitly so derivation stays a pure function —
/// nothing here reads the process working directory.
///
/// Returns `None` only for JSON nodes missing an absolute path, which
/// have nothing to derive.
pub fn derive_fields(node: &ContentNode, root_dir: &Path) -> Option<DerivedFields> {
    match node.kind {
        NodeKind::Markdown => Some(DerivedFields::Markdown(markdown_fields(node))),
        NodeKind::Json => json_fields(node, root_dir).map(DerivedFields::Json),
    }
}

/// Derive slug, section, and layout for a markdown node.
pub fn markdown_fields(node: &ContentNode) -> MarkdownFields {
    MarkdownFields {
        slug: derive_slug(&node.relative_path, node.permalink.as_deref()),
        section: derive_section(&node.relative_path),
        layout: node.layout.clone(),
    }
}

/// Compute the URL slug for a markdown file.
///
/// - A non-empty `permalink` is used verbatim.
/// - `index.md` at the root maps to `/`.
/// - `<dir>/index.md` maps to `/<dir>/` (directory index).
/// - `<path>.md` maps to `/<path>/`.
pub fn derive_slug(relative_path: &str, permalink: Option<&str>) -> String {
    if let Some(p) = permalink
        && !p.is_empty()
    {
        return p.to_string();
    }

    if relative_path == "index.md" {
        return "/".to_string();
    }

    if let Some(prefix) = relative_path.strip_suffix("index.md") {
        // Directory index: keep the prefix with its trailing slash.
        return format!("/{prefix}");
    }

    let stem = relative_path
        .strip_suffix(".md")
        .unwrap_or(relative_path);
    format!("/{stem}/")
}

/// Compute the section for a relative path.
///
/// The section is the leading path segment (one or more word or hyphen
/// characters followed by `/`, with an optional leading `/`). Files
/// without a directory prefix fall back to [`ROOT_SECTION`].
pub fn derive_section(relative_path: &str) -> String {
    let trimmed = relative_path.strip_prefix('/').unwrap_or(relative_path);

    let end = trimmed
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(trimmed.len());

    if end > 0 && trimmed[end..].starts_with('/') {
        trimmed[..end].to_string()
    } else {
        ROOT_SECTION.to_string()
    }
}

/// Derive the root-relative file path for a JSON data node.
///
/// This is a plain substring removal of the root-directory prefix, not a
/// path-relative computation: paths outside the root keep their absolute
/// form, matching the manifest's best-effort contract.
pub fn json_fields(node: &ContentNode, root_dir: &Path) -> Option<JsonFields> {
    let absolute = node.absolute_path.as_ref()?;
    let absolute = absolute.to_string_lossy();
    let root = root_dir.to_string_lossy();
    Some(JsonFields {
        file_relative_path: absolute.replacen(root.as_ref(), "", 1),
    })
}
