//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use urlseg_core::Token;

/// Plain text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &Token<'_>) -> Result<()> {
        writeln!(self.writer, "{}", token.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlseg_core::tokenize;

    #[test]
    fn test_one_token_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            for token in tokenize("(www.red-stars.com)") {
                formatter.format_token(&token).unwrap();
            }
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "(\nwww.red-stars.com\n)\n");
    }
}
