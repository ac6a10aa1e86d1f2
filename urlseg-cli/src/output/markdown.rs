//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use urlseg_core::{Token, UnitKind};

/// Markdown formatter - outputs tokens as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    header_written: bool,
    token_count: usize,
    url_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
            token_count: 0,
            url_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| # | Token | Kind | URL | Span |")?;
        writeln!(self.writer, "|---|-------|------|-----|------|")?;
        self.header_written = true;
        Ok(())
    }
}

/// Escape characters with meaning inside a table cell
fn escape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '|' | '`' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

fn kind_label(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Prefix => "prefix",
        UnitKind::Suffix => "suffix",
        UnitKind::Core => "core",
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        if self.header_written {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        self.write_header()
    }

    fn format_token(&mut self, token: &Token<'_>) -> Result<()> {
        if !self.header_written {
            self.write_header()?;
        }
        self.token_count += 1;
        if token.is_url {
            self.url_count += 1;
        }
        writeln!(
            self.writer,
            "| {} | `{}` | {} | {} | {}..{} |",
            self.token_count,
            escape_cell(token.text),
            kind_label(token.kind),
            if token.is_url { "yes" } else { "no" },
            token.start,
            token.end
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total tokens: {} ({} URLs)*",
            self.token_count, self.url_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
