use clap::{Parser, Subcommand};
use routemark::typography::{self, TypographyTokens};
use routemark::{config, ingest, output, routes};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "routemark")]
#[command(about = "Route derivation and template resolution for content sites")]
#[command(long_about = "\
Route derivation and template resolution for content sites

Your content tree is the data source. Markdown files become pages, their
paths become URLs, and their top-level directory picks a default template.

Content structure:

  content/
  ├── config.toml              # Site config (optional)
  ├── index.md                 # → /            (site root)
  ├── about.md                 # → /about/      (section: home)
  ├── blog/
  │   ├── index.md             # → /blog/       (section: blog)
  │   └── my-post.md           # → /blog/my-post/
  └── data/
      └── authors.json         # Data node, no route

Front matter overrides (YAML --- or TOML +++ fences):
  permalink:  use this URL verbatim instead of the path-derived slug
  layout:     try src/templates/<layout>.js first

Template fallback, per page (first existing file wins):
  src/templates/<layout>.js → src/templates/<section>.js → src/templates/page.js

Run 'routemark gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Directory for stage manifests
    #[arg(long, default_value = ".routemark-temp", global = true)]
    temp_dir: PathBuf,

    /// Project root templates and data paths are resolved against
    /// (defaults to the current directory)
    #[arg(long, global = true)]
    root_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a nodes manifest
    Ingest,
    /// Build page routes from the nodes manifest
    Routes,
    /// Run the full pipeline: ingest then routes
    Build,
    /// Validate content and config without writing manifests
    Check,
    /// Resolve typography dimensions for a text type and size
    Font {
        /// Text role: "text" or "heading"
        text_type: String,
        /// Size key
        #[arg(default_value_t = typography::DEFAULT_SIZE)]
        size: u32,
        /// Token table file (TOML); defaults to the stock table
        #[arg(long)]
        tokens: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Resolved once, up front: the library never reads the working
    // directory itself.
    let root_dir = match &cli.root_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    match cli.command {
        Command::Ingest => {
            let manifest = ingest::ingest(&cli.source, &root_dir)?;
            write_nodes_manifest(&cli.temp_dir, &manifest)?;
            output::print_ingest_output(&manifest, &cli.source);
        }
        Command::Routes => {
            let manifest = routes::load_nodes(&cli.temp_dir.join("nodes.json"))?;
            let built = routes::build_routes(&manifest, &root_dir)?;
            write_routes_manifest(&cli.temp_dir, &built)?;
            output::print_routes_output(&built);
        }
        Command::Build => {
            println!("==> Stage 1: Ingesting {}", cli.source.display());
            let manifest = ingest::ingest(&cli.source, &root_dir)?;
            write_nodes_manifest(&cli.temp_dir, &manifest)?;
            output::print_ingest_output(&manifest, &cli.source);

            println!("==> Stage 2: Building routes");
            let built = routes::build_routes(&manifest, &root_dir)?;
            write_routes_manifest(&cli.temp_dir, &built)?;
            output::print_routes_output(&built);

            println!("==> Build complete: {}", cli.temp_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = ingest::ingest(&cli.source, &root_dir)?;
            output::print_ingest_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::Font {
            text_type,
            size,
            tokens,
        } => {
            let text_type = match text_type.as_str() {
                "text" => typography::TextType::Text,
                "heading" => typography::TextType::Heading,
                other => return Err(format!("unknown text type: {other}").into()),
            };
            // Flag wins over config; config wins over the stock table.
            let table = match tokens {
                Some(path) => TypographyTokens::load(&path)?,
                None => {
                    let site = config::load_config(&cli.source)?;
                    match site.typography.tokens {
                        Some(rel) => TypographyTokens::load(&cli.source.join(rel))?,
                        None => typography::stock_tokens(),
                    }
                }
            };
            let dims = typography::determine_font_dimensions(&table, text_type, size);
            println!("{}", serde_json::to_string_pretty(&dims)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_nodes_manifest(
    temp_dir: &std::path::Path,
    manifest: &ingest::NodesManifest,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("nodes.json"), json)?;
    Ok(())
}

fn write_routes_manifest(
    temp_dir: &std::path::Path,
    built: &[routes::PageRoute],
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest = routes::RoutesManifest {
        routes: built.to_vec(),
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(temp_dir.join("routes.json"), json)?;
    Ok(())
}
