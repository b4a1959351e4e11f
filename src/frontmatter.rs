//! Front-matter extraction for markdown content.
//!
//! Supports YAML front matter delimited by `---` and TOML front matter
//! delimited by `+++`. Only the routing-relevant fields are modeled;
//! everything else in the front-matter block is ignored.
//!
//! Parsing is deliberately lenient: a file without front matter, or with
//! front matter that fails to parse, yields the empty default. A missing
//! override must never fail ingestion.

use serde::Deserialize;

/// Routing overrides from a content file's front matter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Frontmatter {
    /// Slug override. Used verbatim when non-empty.
    #[serde(default)]
    pub permalink: Option<String>,
    /// Template override for route building.
    #[serde(default)]
    pub layout: Option<String>,
}

/// Front-matter delimiter flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `---` fences, YAML body.
    Yaml,
    /// `+++` fences, TOML body.
    Toml,
}

impl Format {
    fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into its front-matter block and body.
///
/// Returns `None` when the content doesn't open with a recognized fence
/// or the fence never closes.
pub fn split(content: &str) -> Option<(Format, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        Format::Yaml
    } else if content.starts_with("+++") {
        Format::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();
    let rest = &content[delimiter.len()..];
    let close = rest.find(&format!("\n{delimiter}"))?;

    let block = rest[..close].trim();
    let body = rest[close + 1 + delimiter.len()..].trim_start();
    Some((format, block, body))
}

/// Parse front matter out of content, returning the overrides and body.
///
/// Unparseable front matter degrades to the empty default rather than
/// erroring; the body is the full content in that case only when no
/// fence was found at all.
pub fn parse(content: &str) -> (Frontmatter, &str) {
    match split(content) {
        None => (Frontmatter::default(), content),
        Some((format, block, body)) => {
            let fm = match format {
                Format::Yaml => serde_yaml::from_str(block).unwrap_or_default(),
                Format::Toml => toml::from_str(block).unwrap_or_default(),
            };
            (fm, body)
        }
    }
}
