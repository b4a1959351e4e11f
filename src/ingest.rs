//! Content discovery and node-field derivation.
//!
//! Stage 1 of the routemark pipeline. Walks the content root, turns each
//! markdown and JSON file into a [`ContentNode`], derives its routing
//! fields, and produces a [`NodesManifest`] that the routes stage
//! consumes.
//!
//! ## Discovery Rules
//!
//! - `.md` files become markdown nodes; front matter supplies the
//!   optional `permalink` and `layout` overrides.
//! - `.json` files become JSON data nodes, recorded with their absolute
//!   path so derivation can relativize them against the project root.
//! - Hidden files and directories, `config.toml`, and token tables are
//!   skipped.
//!
//! Files are visited in sorted order so the manifest is deterministic
//! across runs. Derivation itself never fails; only I/O and config
//! problems abort the stage.

use crate::config::{self, SiteConfig};
use crate::derive;
use crate::frontmatter;
use crate::node::{ContentNode, NodeKind, NodeRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Manifest output from the ingest stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodesManifest {
    pub nodes: Vec<NodeRecord>,
    pub config: SiteConfig,
}

impl NodesManifest {
    /// Count of markdown records.
    pub fn markdown_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|r| r.node.kind == NodeKind::Markdown)
            .count()
    }

    /// Count of JSON records.
    pub fn json_count(&self) -> usize {
        self.nodes.len() - self.markdown_count()
    }
}

/// Walk the content root and derive fields for every content file.
///
/// `root_dir` is the project root: JSON data paths are recorded relative
/// to it, and the routes stage later resolves templates against it.
pub fn ingest(source: &Path, root_dir: &Path) -> Result<NodesManifest, IngestError> {
    let config = config::load_config(source)?;

    let mut nodes = Vec::new();
    let walker = WalkDir::new(source)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || is_excluded(entry.file_name()) {
            continue;
        }

        let ext = entry
            .path()
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let Some(kind) = NodeKind::from_extension(&ext) else {
            continue;
        };

        let relative_path = posix_relative(entry.path(), source);
        let node = match kind {
            NodeKind::Markdown => {
                let content = fs::read_to_string(entry.path())?;
                let (fm, _body) = frontmatter::parse(&content);
                ContentNode {
                    kind,
                    relative_path,
                    permalink: fm.permalink,
                    layout: fm.layout,
                    absolute_path: None,
                }
            }
            NodeKind::Json => ContentNode {
                kind,
                relative_path,
                permalink: None,
                layout: None,
                absolute_path: Some(std::path::absolute(entry.path())?),
            },
        };

        if let Some(fields) = derive::derive_fields(&node, root_dir) {
            nodes.push(NodeRecord { node, fields });
        }
    }

    Ok(NodesManifest { nodes, config })
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Non-content files that live alongside content.
fn is_excluded(name: &std::ffi::OsStr) -> bool {
    let name = name.to_string_lossy();
    name == "config.toml" || name == "tokens.toml"
}

/// Relative path from `base` as a forward-slash string.
fn posix_relative(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
