//! # routemark
//!
//! Route derivation and template resolution for content-driven static
//! sites. Your content tree is the data source: markdown files become
//! pages, their paths become URLs, and their top-level directory picks a
//! default template.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! routemark processes content through two independent stages, each
//! producing a JSON manifest that the next consumer reads:
//!
//! ```text
//! 1. Ingest   content/   →  nodes.json    (discover files, derive routing fields)
//! 2. Routes   nodes.json →  routes.json   (resolve templates, emit page routes)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: each manifest is human-readable JSON you can inspect.
//! - **Host integration**: a site framework can consume `nodes.json` or
//!   `routes.json` directly without linking against this crate.
//! - **Testability**: each stage is a pure function from manifest to
//!   manifest, so pipeline logic is testable without a real site around it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`ingest`] | Stage 1 — walks the content root, derives fields, produces the nodes manifest |
//! | [`routes`] | Stage 2 — resolves a template per node and emits page-route descriptors |
//! | [`node`] | Shared types serialized between stages (`ContentNode`, `NodeRecord`) |
//! | [`derive`] | Slug/section/layout derivation — pure string transforms over paths |
//! | [`template`] | Layout → section → default fallback search over an injected existence check |
//! | [`frontmatter`] | YAML (`---`) and TOML (`+++`) front-matter extraction |
//! | [`typography`] | Design-token lookup: `(text type, size)` → CSS-ready dimensions |
//! | [`config`] | `config.toml` loading, validation, stock defaults |
//! | [`output`] | CLI output formatting — per-stage result summaries |
//!
//! # Design Decisions
//!
//! ## Silent Derivation, Fatal Route Building
//!
//! Field derivation never fails: missing front matter, unmatched path
//! patterns, and unknown typography keys all resolve to documented
//! defaults, because a half-ingested tree is more useful than none. Route
//! building is the opposite — a manifest that can't be read, or a page
//! with no resolvable template, aborts the whole build, because a partial
//! route set silently produces a broken site.
//!
//! ## Explicit Root Directory
//!
//! The project root is resolved once at CLI startup and threaded into the
//! library as a parameter. Nothing inside the library reads the process
//! working directory, so ingest-time and query-time results can't drift
//! apart when the tool is invoked from different directories.
//!
//! ## Templates Are Probed, Not Registered
//!
//! Template resolution is a first-match-wins fold over candidate paths
//! with an injected `exists` check. There is no template registry to keep
//! in sync with the filesystem, and tests resolve templates against a
//! plain closure instead of a fixture tree.

pub mod config;
pub mod derive;
pub mod frontmatter;
pub mod ingest;
pub mod node;
pub mod output;
pub mod routes;
pub mod template;
pub mod typography;

#[cfg(test)]
pub(crate) mod test_helpers;
