//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use urlseg_core::{Token, UnitKind};

/// JSON formatter - outputs tokens as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    source: Option<String>,
    tokens: Vec<TokenData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct TokenData {
    /// The token text
    pub text: String,
    /// Starting byte offset in the input
    pub start: usize,
    /// End byte offset in the input
    pub end: usize,
    /// Prefix, suffix or core
    pub kind: UnitKind,
    /// Whether the token is a protected URL
    pub url: bool,
    /// Input the token came from, present when several inputs are processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            source: None,
            tokens: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.source = Some(name.to_string());
        Ok(())
    }

    fn format_token(&mut self, token: &Token<'_>) -> Result<()> {
        self.tokens.push(TokenData {
            text: token.text.to_string(),
            start: token.start,
            end: token.end,
            kind: token.kind,
            url: token.is_url,
            source: self.source.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
