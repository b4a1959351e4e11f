//! Template resolution: ordered fallback search for page components.
//!
//! Each page picks its template through a fixed hierarchy:
//!
//! 1. the `layout` value from the content's front matter, if any
//! 2. a template matching the content's section (top-level directory)
//! 3. the generic `page` template
//!
//! The search is a pure first-match-wins fold over an injected existence
//! check, so tests can resolve templates without touching a real
//! filesystem.

use std::path::{Path, PathBuf};

/// Name of the guaranteed generic template, without extension.
pub const DEFAULT_TEMPLATE: &str = "page";

/// Build the ordered candidate list for a page.
///
/// The layout candidate is skipped when there is no override (absent and
/// empty layouts mean the same thing). The section candidate and the
/// generic default are always present, in that order.
pub fn candidates(
    templates_dir: &Path,
    ext: &str,
    layout: Option<&str>,
    section: &str,
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    if let Some(layout) = layout
        && !layout.is_empty()
    {
        paths.push(templates_dir.join(format!("{layout}.{ext}")));
    }
    paths.push(templates_dir.join(format!("{section}.{ext}")));
    paths.push(templates_dir.join(format!("{DEFAULT_TEMPLATE}.{ext}")));
    paths
}

/// Return the first candidate that exists, or `None` if none do.
///
/// Short-circuits on the first match; later candidates are not probed.
/// In a normal setup the last candidate is the always-present generic
/// template, but callers must still handle `None` — its existence is a
/// convention, not a guarantee of this function.
pub fn first_found<F>(candidates: &[PathBuf], exists: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    candidates.iter().find(|p| exists(p)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn first_found_returns_first_existing() {
        let cands = paths(&["a.js", "b.js", "c.js"]);
        let found = first_found(&cands, |p| p == Path::new("b.js"));
        assert_eq!(found, Some(PathBuf::from("b.js")));
    }

    #[test]
    fn first_found_only_last_existing() {
        let cands = paths(&["a.js", "b.js", "c.js"]);
        let found = first_found(&cands, |p| p == Path::new("c.js"));
        assert_eq!(found, Some(PathBuf::from("c.js")));
    }

    #[test]
    fn first_found_none_existing() {
        let cands = paths(&["a.js", "b.js", "c.js"]);
        assert_eq!(first_found(&cands, |_| false), None);
    }

    #[test]
    fn first_found_short_circuits() {
        use std::cell::Cell;
        let cands = paths(&["a.js", "b.js", "c.js"]);
        let probes = Cell::new(0usize);
        let found = first_found(&cands, |_| {
            probes.set(probes.get() + 1);
            true
        });
        assert_eq!(found, Some(PathBuf::from("a.js")));
        assert_eq!(probes.get(), 1);
    }

    #[test]
    fn first_found_empty_candidates() {
        assert_eq!(first_found(&[], |_| true), None);
    }

    #[test]
    fn candidates_with_layout() {
        let cands = candidates(Path::new("src/templates"), "js", Some("wide"), "blog");
        assert_eq!(
            cands,
            paths(&[
                "src/templates/wide.js",
                "src/templates/blog.js",
                "src/templates/page.js",
            ])
        );
    }

    #[test]
    fn candidates_without_layout() {
        let cands = candidates(Path::new("src/templates"), "js", None, "home");
        assert_eq!(
            cands,
            paths(&["src/templates/home.js", "src/templates/page.js"])
        );
    }

    #[test]
    fn empty_layout_same_as_absent() {
        let with_empty = candidates(Path::new("t"), "js", Some(""), "docs");
        let with_none = candidates(Path::new("t"), "js", None, "docs");
        assert_eq!(with_empty, with_none);
    }

    #[test]
    fn candidates_honor_extension() {
        let cands = candidates(Path::new("templates"), "html", None, "blog");
        assert_eq!(
            cands,
            paths(&["templates/blog.html", "templates/page.html"])
        );
    }
}
