//! Deck configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! standard deck look.

use crate::common::{Error, Result};
use crate::ooxml::pptx::format::is_hex_color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a config file to load.
pub const CONFIG_ENV_VAR: &str = "STRATEGY_DECK_CONFIG";

/// Deck-level settings: fonts, colors, agenda and chunking limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Characters per appendix slide
    pub appendix_chunk_chars: usize,
    /// Recommendations placed on the impact × effort grid
    pub max_recommendations: usize,
    pub font: String,
    /// Font for the raw JSON appendix
    pub mono_font: String,
    pub palette: Palette,
    /// Agenda slide bullets
    pub agenda: Vec<String>,
}

/// Six-digit hex RGB colors used across the deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    /// Accent bar and section labels
    pub primary: String,
    /// Headings and body text
    pub dark: String,
    /// Grid outlines and small labels
    pub medium: String,
    /// Grid dividers and table header fill
    pub light: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "1F4E79".to_string(),
            dark: "222222".to_string(),
            medium: "7F7F7F".to_string(),
            light: "D9D9D9".to_string(),
        }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            appendix_chunk_chars: 2000,
            max_recommendations: 5,
            font: "Calibri".to_string(),
            mono_font: "Courier New".to_string(),
            palette: Palette::default(),
            agenda: vec![
                "Inputs & Goals".to_string(),
                "Framework Insights".to_string(),
                "Recommendations".to_string(),
                "Next Steps".to_string(),
            ],
        }
    }
}

impl DeckConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DeckConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded deck configuration");
        Ok(config)
    }

    /// Load from an explicit path, else from `STRATEGY_DECK_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.appendix_chunk_chars == 0 {
            return Err(Error::Config("appendix_chunk_chars must be > 0".to_string()));
        }
        if self.max_recommendations == 0 {
            return Err(Error::Config("max_recommendations must be > 0".to_string()));
        }
        if self.font.trim().is_empty() || self.mono_font.trim().is_empty() {
            return Err(Error::Config("font names must not be empty".to_string()));
        }
        for (name, value) in [
            ("primary", &self.palette.primary),
            ("dark", &self.palette.dark),
            ("medium", &self.palette.medium),
            ("light", &self.palette.light),
        ] {
            if !is_hex_color(value) {
                return Err(Error::Config(format!(
                    "palette.{} must be six hex digits, got '{}'",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
