//! Shared types for content nodes and their derived routing fields.
//!
//! These types are serialized to JSON between stages (ingest → routes)
//! and must stay identical across both modules.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of a discovered content file.
///
/// The kind drives derivation dispatch: each kind owns its own derivation
/// function in [`crate::derive`]. A node has exactly one kind, determined
/// from its file extension at ingest time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Markdown content (`.md` files). Gets slug/section/layout fields.
    Markdown,
    /// JSON data files. Gets a root-relative file path field.
    Json,
}

impl NodeKind {
    /// Determine the node kind from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// One discovered content file, before derivation.
///
/// Created during ingest, enriched exactly once by the deriver, never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    pub kind: NodeKind,
    /// POSIX-style path relative to the content root, e.g. `blog/post-1.md`.
    pub relative_path: String,
    /// Front-matter slug override. Wins over path derivation when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    /// Front-matter template override. `None` and `Some("")` mean the same
    /// thing downstream: no override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Absolute path on disk. Only set for JSON nodes, where it feeds the
    /// root-relative path field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<PathBuf>,
}

/// Routing fields attached to a node by derivation.
///
/// Tagged by node kind so the manifest schema is uniform: every markdown
/// record carries `slug` and `section`, every JSON record carries
/// `file_relative_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DerivedFields {
    Markdown(MarkdownFields),
    Json(JsonFields),
}

/// Fields derived for markdown nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkdownFields {
    /// Final URL path. Always starts with `/` when derived from a path;
    /// the empty string is the explicit "unset" sentinel.
    pub slug: String,
    /// First path segment, or `home` for files at the content root.
    pub section: String,
    /// Template override from front matter, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

/// Fields derived for JSON nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFields {
    /// Absolute path with the root-directory prefix stripped.
    pub file_relative_path: String,
}

/// A node plus its derived fields, as written to the nodes manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub node: ContentNode,
    pub fields: DerivedFields,
}

impl NodeRecord {
    /// The markdown routing fields, if this is a markdown record.
    pub fn markdown_fields(&self) -> Option<&MarkdownFields> {
        match &self.fields {
            DerivedFields::Markdown(f) => Some(f),
            DerivedFields::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(NodeKind::from_extension("md"), Some(NodeKind::Markdown));
        assert_eq!(NodeKind::from_extension("MD"), Some(NodeKind::Markdown));
        assert_eq!(NodeKind::from_extension("json"), Some(NodeKind::Json));
        assert_eq!(NodeKind::from_extension("txt"), None);
        assert_eq!(NodeKind::from_extension(""), None);
    }

    #[test]
    fn derived_fields_roundtrip_markdown() {
        let fields = DerivedFields::Markdown(MarkdownFields {
            slug: "/blog/post/".to_string(),
            section: "blog".to_string(),
            layout: None,
        });
        let json = serde_json::to_string(&fields).unwrap();
        assert!(json.contains("\"kind\":\"markdown\""));
        assert!(!json.contains("layout"));
        let back: DerivedFields = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fields);
    }

    #[test]
    fn derived_fields_roundtrip_json() {
        let fields = DerivedFields::Json(JsonFields {
            file_relative_path: "/content/data/authors.json".to_string(),
        });
        let json = serde_json::to_string(&fields).unwrap();
        let back: DerivedFields = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fields);
    }
}
