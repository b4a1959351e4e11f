//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//! All options have stock defaults; user config files are sparse and only
//! override what they name. Unknown keys are rejected to catch typos
//! early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [templates]
//! dir = "src/templates"   # Template directory, relative to the project root
//! ext = "js"              # Template file extension
//!
//! [routes]
//! limit = 1000            # Max content nodes consumed by route building
//!
//! [typography]
//! tokens = "tokens.toml"  # Optional external token table (omit for stock)
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Template lookup settings.
    pub templates: TemplatesConfig,
    /// Route building settings.
    pub routes: RoutesConfig,
    /// Typography token settings.
    pub typography: TypographyConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.templates.dir.is_empty() {
            return Err(ConfigError::Validation(
                "templates.dir must not be empty".into(),
            ));
        }
        if self.templates.ext.is_empty() || self.templates.ext.starts_with('.') {
            return Err(ConfigError::Validation(
                "templates.ext must be a bare extension like \"js\"".into(),
            ));
        }
        if self.routes.limit == 0 {
            return Err(ConfigError::Validation("routes.limit must be > 0".into()));
        }
        Ok(())
    }
}

/// Where page templates live and how they are named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Template directory, relative to the project root.
    pub dir: String,
    /// Template file extension, without the leading dot.
    pub ext: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: "src/templates".to_string(),
            ext: "js".to_string(),
        }
    }
}

/// Route building settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutesConfig {
    /// Maximum number of markdown nodes consumed by route building.
    pub limit: usize,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self { limit: 1000 }
    }
}

/// Typography token settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyConfig {
    /// Path to an external token table, relative to the content root.
    /// When absent, the stock table is used.
    pub tokens: Option<String>,
}

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults if the file doesn't exist.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml`, for the `gen-config` command.
pub fn stock_config_toml() -> &'static str {
    r#"# routemark configuration
# All options are optional - defaults shown below.

[templates]
# Directory page templates are resolved against, relative to the project root.
dir = "src/templates"
# Template file extension, without the leading dot.
ext = "js"

[routes]
# Maximum number of markdown nodes consumed by route building.
limit = 1000

[typography]
# Path to an external typography token table (TOML), relative to the
# content root. Omit to use the built-in stock table.
# tokens = "tokens.toml"
"#
}
