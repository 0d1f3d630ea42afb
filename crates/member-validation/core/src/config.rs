// File: src/config.rs
// Purpose: Configuration parsing from member-validation.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::alert::AlertTheme;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    #[serde(default)]
    pub alert: AlertTheme,
}

impl ValidationConfig {
    /// Parse configuration from TOML text. Blank text yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Failed to parse validation config")
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {:?}", path))
    }

    /// Load configuration from default path (./member-validation.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("member-validation.toml")
    }
}
