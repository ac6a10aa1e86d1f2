//! Config command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::affix_source::AffixSource;

/// Arguments for the config command
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Affix configuration file to load instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub affixes: Option<PathBuf>,
}

impl ConfigArgs {
    /// Render the effective configuration
    pub fn render(&self) -> Result<String> {
        let source = AffixSource::from_arg(self.affixes.as_ref());
        let config = source.load_config(&[], &[])?;
        Ok(config.to_toml_string()?)
    }

    /// Execute the config command
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }
}
