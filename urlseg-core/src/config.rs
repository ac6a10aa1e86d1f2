//! Affix configuration
//!
//! This module defines the TOML schema for the prefix and suffix mark sets and
//! loads the embedded default once.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum number of marks in a single set
pub const MAX_MARKS: usize = 255;

/// Embedded default configuration
const DEFAULT_AFFIXES: &str = include_str!("../configs/affixes.toml");

/// Root affix configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixConfig {
    #[serde(default)]
    pub metadata: Metadata,
    pub prefixes: MarkList,
    pub suffixes: MarkList,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ordered list of single-character marks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkList {
    pub chars: Vec<char>,
}

impl AffixConfig {
    /// Parse a configuration from TOML and validate it
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: AffixConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading affix configuration");
        Self::from_toml_str(&content)
    }

    /// Embedded default configuration, parsed on first use
    pub fn embedded() -> &'static AffixConfig {
        static EMBEDDED: OnceLock<AffixConfig> = OnceLock::new();
        EMBEDDED.get_or_init(|| match AffixConfig::from_toml_str(DEFAULT_AFFIXES) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load embedded affix config: {e}");
                AffixConfig::fallback()
            }
        })
    }

    /// Minimal sets used if the embedded file ever fails to parse
    fn fallback() -> Self {
        Self {
            metadata: Metadata {
                name: "fallback".to_string(),
                description: None,
            },
            prefixes: MarkList {
                chars: vec!['(', '"', '>'],
            },
            suffixes: MarkList {
                chars: vec![')', '"', ':', '>'],
            },
        }
    }

    /// Append marks to either set, skipping ones already present
    pub fn extend(
        &mut self,
        prefixes: impl IntoIterator<Item = char>,
        suffixes: impl IntoIterator<Item = char>,
    ) -> Result<()> {
        push_unique(&mut self.prefixes.chars, prefixes);
        push_unique(&mut self.suffixes.chars, suffixes);
        self.validate()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (label, marks) in [("prefix", &self.prefixes), ("suffix", &self.suffixes)] {
            if marks.chars.is_empty() {
                return Err(Error::Configuration(format!("No {label} characters defined")));
            }
            if marks.chars.len() > MAX_MARKS {
                return Err(Error::Configuration(format!(
                    "Too many {label} characters (max {MAX_MARKS})"
                )));
            }
            if let Some(ch) = marks.chars.iter().find(|ch| ch.is_whitespace()) {
                return Err(Error::Configuration(format!(
                    "Whitespace {ch:?} cannot be a {label} character"
                )));
            }
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for AffixConfig {
    fn default() -> Self {
        Self::embedded().clone()
    }
}

fn push_unique(target: &mut Vec<char>, marks: impl IntoIterator<Item = char>) {
    for ch in marks {
        if !target.contains(&ch) {
            target.push(ch);
        }
    }
}
