//! Whitespace chunking and token emission
//!
//! Text is split on whitespace runs, each chunk goes through the
//! [`AffixStripper`], and the resulting units become [`Token`]s carrying byte
//! offsets into the original text. Whitespace itself is never emitted.

use std::sync::OnceLock;

use serde::Serialize;

use crate::affix::{AffixRules, AffixStripper, Unit, UnitKind};
use crate::grammar::GrammarRules;

/// An atomic token with its position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// Token text, always `&source[start..end]`
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Whether the token was split off as a prefix or suffix mark
    pub kind: UnitKind,
    /// Whether the token is a protected URL
    #[serde(rename = "url")]
    pub is_url: bool,
}

impl<'a> From<Unit<'a>> for Token<'a> {
    fn from(unit: Unit<'a>) -> Self {
        Self {
            text: unit.text,
            start: unit.offset,
            end: unit.end(),
            kind: unit.kind,
            is_url: unit.protected,
        }
    }
}

impl Token<'_> {
    /// Byte length of the token
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the token spans zero bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Maximal run of non-whitespace characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Iterator over the whitespace-delimited chunks of a text
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Chunks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(|ch: char| !ch.is_whitespace())?;
        let end = self.text[start..]
            .find(char::is_whitespace)
            .map_or(self.text.len(), |len| start + len);
        self.pos = end;
        Some(Chunk {
            text: &self.text[start..end],
            offset: start,
        })
    }
}

/// Lazy token stream; same output as [`Tokenizer::tokenize`]
#[derive(Debug)]
pub struct Tokens<'a, 's, 'g> {
    stripper: &'s AffixStripper<'g>,
    chunks: Chunks<'a>,
    pending: std::vec::IntoIter<Unit<'a>>,
}

impl<'a> Iterator for Tokens<'a, '_, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(unit) = self.pending.next() {
                return Some(unit.into());
            }
            let chunk = self.chunks.next()?;
            self.pending = self.stripper.strip(chunk.text, chunk.offset).into_iter();
        }
    }
}

/// URL-aware tokenizer
#[derive(Debug)]
pub struct Tokenizer<'g> {
    stripper: AffixStripper<'g>,
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(AffixStripper::default())
    }
}

impl Tokenizer<'static> {
    /// Process-wide tokenizer over the default grammar and mark sets
    pub fn shared() -> &'static Tokenizer<'static> {
        static SHARED: OnceLock<Tokenizer<'static>> = OnceLock::new();
        SHARED.get_or_init(Tokenizer::default)
    }

    /// Default grammar with custom mark sets
    pub fn with_affixes(rules: &AffixRules) -> Self {
        Self::with_rules(GrammarRules::shared(), rules)
    }
}

impl<'g> Tokenizer<'g> {
    /// Tokenizer around an existing stripper
    pub fn new(stripper: AffixStripper<'g>) -> Self {
        Self { stripper }
    }

    /// Tokenizer over an explicit grammar and mark sets
    pub fn with_rules(grammar: &'g GrammarRules, rules: &AffixRules) -> Self {
        Self::new(AffixStripper::new(grammar, rules))
    }

    /// The stripper applied to each chunk
    pub fn stripper(&self) -> &AffixStripper<'g> {
        &self.stripper
    }

    /// Whitespace-delimited chunks of `text`
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks::new(text)
    }

    /// Stream tokens lazily
    pub fn tokens<'a, 's>(&'s self, text: &'a str) -> Tokens<'a, 's, 'g> {
        Tokens {
            stripper: &self.stripper,
            chunks: Chunks::new(text),
            pending: Vec::new().into_iter(),
        }
    }

    /// Split `text` into tokens in left-to-right order
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let tokens: Vec<Token<'a>> = self.tokens(text).collect();
        tracing::debug!(bytes = text.len(), tokens = tokens.len(), "tokenized text");
        tokens
    }
}

/// Tokenize with the default grammar and mark sets
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Tokenizer::shared().tokenize(text)
}
