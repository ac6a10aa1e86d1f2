//! Output formatting module

use anyhow::Result;
use urlseg_core::Token;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Mark the start of a new input; only called when several inputs are processed
    fn begin_source(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single token
    fn format_token(&mut self, token: &Token<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
