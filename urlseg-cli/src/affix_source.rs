//! Affix mark source management for CLI

use std::path::PathBuf;

use anyhow::Result;
use urlseg_core::{AffixConfig, AffixRules};

use crate::error::CliError;

/// Source of the prefix and suffix mark sets
#[derive(Debug, Clone, Default)]
pub enum AffixSource {
    /// Embedded default configuration
    #[default]
    BuiltIn,
    /// External TOML configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl AffixSource {
    /// Pick the source from an optional `--affixes` path
    pub fn from_arg(path: Option<&PathBuf>) -> Self {
        match path {
            Some(path) => AffixSource::External { path: path.clone() },
            None => AffixSource::BuiltIn,
        }
    }

    /// Get the display name for the affix source
    pub fn display_name(&self) -> String {
        match self {
            AffixSource::BuiltIn => "Built-in: default".to_string(),
            AffixSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the configuration and append extra marks from the command line
    pub fn load_config(&self, extra_prefixes: &[char], extra_suffixes: &[char]) -> Result<AffixConfig> {
        let mut config = match self {
            AffixSource::BuiltIn => AffixConfig::default(),
            AffixSource::External { path } => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                AffixConfig::from_file(path)
                    .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?
            }
        };

        config
            .extend(extra_prefixes.iter().copied(), extra_suffixes.iter().copied())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::info!("Using affix marks from {}", self.display_name());
        log::debug!(
            "prefixes: {:?}, suffixes: {:?}",
            config.prefixes.chars,
            config.suffixes.chars
        );
        Ok(config)
    }

    /// Load runtime rules
    pub fn load_rules(&self, extra_prefixes: &[char], extra_suffixes: &[char]) -> Result<AffixRules> {
        let config = self.load_config(extra_prefixes, extra_suffixes)?;
        Ok(AffixRules::from_config(&config)?)
    }
}
