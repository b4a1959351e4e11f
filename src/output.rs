//! CLI output formatting.
//!
//! Plain-text summaries of pipeline results, printed after each stage.

use crate::ingest::NodesManifest;
use crate::node::DerivedFields;
use crate::routes::PageRoute;
use std::collections::BTreeMap;
use std::path::Path;

/// Summarize the ingest stage: node counts and section breakdown.
pub fn print_ingest_output(manifest: &NodesManifest, source: &Path) {
    println!(
        "Ingested {} nodes from {} ({} markdown, {} json)",
        manifest.nodes.len(),
        source.display(),
        manifest.markdown_count(),
        manifest.json_count(),
    );

    let mut sections: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &manifest.nodes {
        if let DerivedFields::Markdown(f) = &record.fields {
            *sections.entry(f.section.as_str()).or_default() += 1;
        }
    }
    if !sections.is_empty() {
        let listing: Vec<String> = sections
            .iter()
            .map(|(section, count)| format!("{section} ({count})"))
            .collect();
        println!("  sections: {}", listing.join(", "));
    }
}

/// Summarize the routes stage: one line per page.
pub fn print_routes_output(routes: &[PageRoute]) {
    println!("Built {} page routes", routes.len());
    for route in routes {
        println!("  {} -> {}", route.path, route.component_path);
    }
}
