//! Page-route building.
//!
//! Stage 2 of the routemark pipeline. Reads the nodes manifest back (the
//! stage boundary doubles as the query step, capped by `routes.limit`),
//! resolves a template for every markdown node via the layout → section →
//! default fallback, and emits one page-route descriptor per node.
//!
//! This is the one place the tool fails loudly: a manifest that can't be
//! read or parsed, or a page whose entire template chain is missing,
//! aborts the build. A partial route set would produce a broken site, so
//! the granularity of failure is the whole build, not per page.

use crate::ingest::NodesManifest;
use crate::template;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no template found for page {slug} (last candidate: {last_candidate})")]
    NoTemplate { slug: String, last_candidate: String },
}

/// Query variables passed to a page's data-fetching layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteContext {
    pub slug: String,
}

/// One page to be generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRoute {
    /// URL path, straight from the node's slug.
    pub path: String,
    /// Resolved template file path.
    pub component_path: String,
    pub context: RouteContext,
}

/// Manifest output from the routes stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesManifest {
    pub routes: Vec<PageRoute>,
}

/// Read the nodes manifest written by the ingest stage.
///
/// Any failure here is fatal to the build.
pub fn load_nodes(manifest_path: &Path) -> Result<NodesManifest, RouteError> {
    let content = fs::read_to_string(manifest_path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Build one route per markdown node, resolving templates on disk.
pub fn build_routes(manifest: &NodesManifest, root_dir: &Path) -> Result<Vec<PageRoute>, RouteError> {
    build_routes_with(manifest, root_dir, |p| p.exists())
}

/// Build routes with an injected path-existence check.
///
/// Nodes beyond `routes.limit` are not consulted. The layout candidate
/// is skipped for nodes without an override; a node whose whole chain is
/// missing (including the generic default) aborts with
/// [`RouteError::NoTemplate`].
pub fn build_routes_with<F>(
    manifest: &NodesManifest,
    root_dir: &Path,
    exists: F,
) -> Result<Vec<PageRoute>, RouteError>
where
    F: Fn(&Path) -> bool,
{
    let templates_dir = root_dir.join(&manifest.config.templates.dir);
    let ext = &manifest.config.templates.ext;

    let mut routes = Vec::new();
    let markdown = manifest
        .nodes
        .iter()
        .filter_map(|r| r.markdown_fields())
        .take(manifest.config.routes.limit);

    for fields in markdown {
        let candidates = template::candidates(
            &templates_dir,
            ext,
            fields.layout.as_deref(),
            &fields.section,
        );
        let component = template::first_found(&candidates, &exists).ok_or_else(|| {
            RouteError::NoTemplate {
                slug: fields.slug.clone(),
                last_candidate: candidates
                    .last()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            }
        })?;

        routes.push(PageRoute {
            path: fields.slug.clone(),
            component_path: component.to_string_lossy().into_owned(),
            context: RouteContext {
                slug: fields.slug.clone(),
            },
        });
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::node::{ContentNode, DerivedFields, JsonFields, MarkdownFields, NodeKind, NodeRecord};
    use std::path::PathBuf;

    fn md_record(slug: &str, section: &str, layout: Option<&str>) -> NodeRecord {
        NodeRecord {
            node: ContentNode {
                kind: NodeKind::Markdown,
                relative_path: format!("{section}{slug}.md"),
                permalink: None,
                layout: layout.map(String::from),
                absolute_path: None,
            },
            fields: DerivedFields::Markdown(MarkdownFields {
                slug: slug.to_string(),
                section: section.to_string(),
                layout: layout.map(String::from),
            }),
        }
    }

    fn manifest(nodes: Vec<NodeRecord>) -> NodesManifest {
        NodesManifest {
            nodes,
            config: SiteConfig::default(),
        }
    }

    fn exists_in<'a>(present: &'a [&'a str]) -> impl Fn(&Path) -> bool + 'a {
        let present: Vec<PathBuf> = present.iter().map(PathBuf::from).collect();
        move |p: &Path| present.iter().any(|q| q == p)
    }

    #[test]
    fn layout_template_wins_when_present() {
        let m = manifest(vec![md_record("/blog/post/", "blog", Some("wide"))]);
        let routes = build_routes_with(
            &m,
            Path::new("."),
            exists_in(&[
                "./src/templates/wide.js",
                "./src/templates/blog.js",
                "./src/templates/page.js",
            ]),
        )
        .unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].component_path, "./src/templates/wide.js");
    }

    #[test]
    fn section_template_when_no_layout() {
        let m = manifest(vec![md_record("/blog/post/", "blog", None)]);
        let routes = build_routes_with(
            &m,
            Path::new("."),
            exists_in(&["./src/templates/blog.js", "./src/templates/page.js"]),
        )
        .unwrap();
        assert_eq!(routes[0].component_path, "./src/templates/blog.js");
    }

    #[test]
    fn generic_default_as_last_resort() {
        let m = manifest(vec![md_record("/about/", "home", None)]);
        let routes =
            build_routes_with(&m, Path::new("."), exists_in(&["./src/templates/page.js"]))
                .unwrap();
        assert_eq!(routes[0].component_path, "./src/templates/page.js");
    }

    #[test]
    fn context_carries_slug() {
        let m = manifest(vec![md_record("/docs/setup/", "docs", None)]);
        let routes =
            build_routes_with(&m, Path::new("."), exists_in(&["./src/templates/page.js"]))
                .unwrap();
        assert_eq!(routes[0].path, "/docs/setup/");
        assert_eq!(routes[0].context.slug, "/docs/setup/");
    }

    #[test]
    fn missing_template_chain_is_fatal() {
        let m = manifest(vec![md_record("/about/", "home", None)]);
        let err = build_routes_with(&m, Path::new("."), |_| false).unwrap_err();
        assert!(matches!(err, RouteError::NoTemplate { .. }));
        assert!(err.to_string().contains("/about/"));
    }

    #[test]
    fn json_nodes_produce_no_routes() {
        let json_record = NodeRecord {
            node: ContentNode {
                kind: NodeKind::Json,
                relative_path: "data/authors.json".to_string(),
                permalink: None,
                layout: None,
                absolute_path: Some(PathBuf::from("/p/content/data/authors.json")),
            },
            fields: DerivedFields::Json(JsonFields {
                file_relative_path: "/content/data/authors.json".to_string(),
            }),
        };
        let m = manifest(vec![json_record, md_record("/about/", "home", None)]);
        let routes =
            build_routes_with(&m, Path::new("."), exists_in(&["./src/templates/page.js"]))
                .unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/about/");
    }

    #[test]
    fn route_limit_caps_consumed_nodes() {
        let mut m = manifest(
            (0..5)
                .map(|i| md_record(&format!("/p{i}/"), "home", None))
                .collect(),
        );
        m.config.routes.limit = 3;
        let routes =
            build_routes_with(&m, Path::new("."), exists_in(&["./src/templates/page.js"]))
                .unwrap();
        assert_eq!(routes.len(), 3);
    }

    #[test]
    fn empty_layout_treated_as_absent() {
        let m = manifest(vec![md_record("/blog/post/", "blog", Some(""))]);
        let routes = build_routes_with(
            &m,
            Path::new("."),
            exists_in(&["./src/templates/blog.js", "./src/templates/page.js"]),
        )
        .unwrap();
        assert_eq!(routes[0].component_path, "./src/templates/blog.js");
    }

    #[test]
    fn load_nodes_missing_manifest_is_fatal() {
        let err = load_nodes(Path::new("/nonexistent/nodes.json")).unwrap_err();
        assert!(matches!(err, RouteError::Io(_)));
    }

    #[test]
    fn load_nodes_corrupt_manifest_is_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nodes.json");
        std::fs::write(&path, "not json at all").unwrap();
        let err = load_nodes(&path).unwrap_err();
        assert!(matches!(err, RouteError::Json(_)));
    }
}
