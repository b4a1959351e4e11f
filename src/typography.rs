//! Typography token resolution for the design system.
//!
//! Maps a `(text type, size key)` pair from the token table to concrete
//! CSS-ready style attributes. The token table is external data (loadable
//! from TOML); a stock table ships as a default the same way stock config
//! values do.
//!
//! Unknown size keys never error: they resolve to a fixed 16px/1.2
//! fallback so the UI always has usable dimensions. This is a deliberate
//! graceful-degradation contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Text role a token applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    Text,
    Heading,
}

/// Size key callers pass when they don't care: the body-copy default.
pub const DEFAULT_SIZE: u32 = 400;

/// Smallest heading step, rendered uppercase as an overline style.
const OVERLINE_SIZE: u32 = 100;

/// Raw metrics for one size step, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontMetrics {
    pub font_size: f64,
    pub line_height: f64,
    #[serde(default)]
    pub letter_spacing: f64,
}

/// The token table: size-keyed metrics per text role.
///
/// TOML table keys are strings, so size keys are stored as strings and
/// looked up via the numeric key's decimal form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyTokens {
    pub text: BTreeMap<String, FontMetrics>,
    pub heading: BTreeMap<String, FontMetrics>,
}

impl TypographyTokens {
    /// Load a token table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TokenError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Look up the metrics for a text type and size key.
    pub fn get(&self, text_type: TextType, size: u32) -> Option<&FontMetrics> {
        let table = match text_type {
            TextType::Text => &self.text,
            TextType::Heading => &self.heading,
        };
        table.get(&size.to_string())
    }
}

/// Resolved style attributes, ready to serialize as inline-style values.
///
/// Optional attributes are skipped during serialization so consumers see
/// exactly the keys that apply — the fallback result carries only
/// `fontSize` and `lineHeight`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDimensions {
    pub font_size: String,
    pub line_height: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
}

/// Resolve style attributes for a text type and size key.
///
/// Headings get a fixed light weight and their letter spacing; the
/// smallest heading step additionally renders uppercase. Body text gets
/// a fixed regular weight and no letter spacing. Unknown size keys
/// resolve to the 16px/1.2 fallback with no weight at all.
pub fn determine_font_dimensions(
    tokens: &TypographyTokens,
    text_type: TextType,
    size: u32,
) -> FontDimensions {
    let Some(metrics) = tokens.get(text_type, size) else {
        return FontDimensions {
            font_size: "16px".to_string(),
            line_height: "1.2".to_string(),
            font_weight: None,
            letter_spacing: None,
            text_transform: None,
        };
    };

    match text_type {
        TextType::Heading => FontDimensions {
            font_size: format!("{}px", metrics.font_size),
            line_height: format!("{}px", metrics.line_height),
            font_weight: Some(100),
            letter_spacing: Some(format!("{}px", metrics.letter_spacing)),
            text_transform: (size == OVERLINE_SIZE).then(|| "uppercase".to_string()),
        },
        TextType::Text => FontDimensions {
            font_size: format!("{}px", metrics.font_size),
            line_height: format!("{}px", metrics.line_height),
            font_weight: Some(400),
            letter_spacing: None,
            text_transform: None,
        },
    }
}

/// Stock token table used when no external table is supplied.
pub fn stock_tokens() -> TypographyTokens {
    fn table(entries: &[(u32, f64, f64, f64)]) -> BTreeMap<String, FontMetrics> {
        entries
            .iter()
            .map(|&(size, font_size, line_height, letter_spacing)| {
                (
                    size.to_string(),
                    FontMetrics {
                        font_size,
                        line_height,
                        letter_spacing,
                    },
                )
            })
            .collect()
    }

    TypographyTokens {
        text: table(&[
            (100, 12.0, 16.0, 0.0),
            (200, 14.0, 20.0, 0.0),
            (300, 16.0, 24.0, 0.0),
            (400, 18.0, 28.0, 0.0),
            (500, 20.0, 32.0, 0.0),
        ]),
        heading: table(&[
            (100, 14.0, 20.0, 1.0),
            (200, 18.0, 24.0, -0.2),
            (300, 22.0, 28.0, -0.3),
            (400, 27.0, 32.0, -0.4),
            (500, 36.0, 40.0, -0.6),
            (600, 48.0, 56.0, -0.8),
            (700, 64.0, 72.0, -1.0),
        ]),
    }
}
