//! Affix peeling loop
//!
//! Repeatedly asks the strategy chain about the remaining inner span. A
//! protected span stops the loop immediately, so a matched URL is never split.

use std::sync::OnceLock;

use serde::Serialize;

use crate::affix::{AffixRules, SpanDecision, StrategyChain};
use crate::grammar::GrammarRules;

/// Role of a unit within its chunk
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Mark split off the front
    Prefix,
    /// Mark split off the end
    Suffix,
    /// Whatever remains between the marks
    Core,
}

/// A piece of a chunk after stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'t> {
    /// Text of the unit
    pub text: &'t str,
    /// Byte offset of the unit in the text the chunk was taken from
    pub offset: usize,
    /// Prefix, suffix or core
    pub kind: UnitKind,
    /// True for a core the chain protected as a whole (a matched URL)
    pub protected: bool,
}

impl Unit<'_> {
    /// Byte offset one past the end of the unit
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Splits leading and trailing marks off chunks
#[derive(Debug)]
pub struct AffixStripper<'g> {
    chain: StrategyChain<'g>,
}

impl Default for AffixStripper<'static> {
    fn default() -> Self {
        Self::new(GrammarRules::shared(), AffixRules::shared())
    }
}

impl AffixStripper<'static> {
    /// Process-wide stripper over the default grammar and mark sets
    pub fn shared() -> &'static AffixStripper<'static> {
        static SHARED: OnceLock<AffixStripper<'static>> = OnceLock::new();
        SHARED.get_or_init(AffixStripper::default)
    }
}

impl<'g> AffixStripper<'g> {
    /// Stripper with the standard chain over a grammar and mark sets
    pub fn new(grammar: &'g GrammarRules, rules: &AffixRules) -> Self {
        Self::with_chain(StrategyChain::standard(grammar, rules))
    }

    /// Stripper driven by a custom chain
    pub fn with_chain(chain: StrategyChain<'g>) -> Self {
        Self { chain }
    }

    /// The strategy chain in use
    pub fn chain(&self) -> &StrategyChain<'g> {
        &self.chain
    }

    /// Split `chunk` into prefix, core and suffix units.
    ///
    /// `base_offset` is the byte position of `chunk` in the surrounding text;
    /// unit offsets are reported relative to that text.
    pub fn strip<'t>(&self, chunk: &'t str, base_offset: usize) -> Vec<Unit<'t>> {
        let mut prefixes = Vec::new();
        let mut suffixes = Vec::new();
        let mut start = 0;
        let mut end = chunk.len();
        let mut protected = false;

        while start < end {
            let span = &chunk[start..end];
            match self.chain.decide(span) {
                SpanDecision::Protect => {
                    protected = true;
                    break;
                }
                SpanDecision::PeelPrefix(len) if is_peelable(span, len, true) => {
                    prefixes.push(Unit {
                        text: &span[..len],
                        offset: base_offset + start,
                        kind: UnitKind::Prefix,
                        protected: false,
                    });
                    start += len;
                }
                SpanDecision::PeelSuffix(len) if is_peelable(span, len, false) => {
                    suffixes.push(Unit {
                        text: &span[span.len() - len..],
                        offset: base_offset + end - len,
                        kind: UnitKind::Suffix,
                        protected: false,
                    });
                    end -= len;
                }
                // Pass, or a decision that would not shorten the span
                _ => break,
            }
        }

        let mut units = prefixes;
        if start < end {
            units.push(Unit {
                text: &chunk[start..end],
                offset: base_offset + start,
                kind: UnitKind::Core,
                protected,
            });
        }
        units.extend(suffixes.into_iter().rev());

        tracing::trace!(chunk, units = units.len(), protected, "stripped affixes");
        units
    }
}

/// A peel must remove at least one byte and land on a char boundary
fn is_peelable(span: &str, len: usize, from_front: bool) -> bool {
    if len == 0 || len > span.len() {
        return false;
    }
    if from_front {
        span.is_char_boundary(len)
    } else {
        span.is_char_boundary(span.len() - len)
    }
}

/// Strip a chunk with the default grammar and mark sets
pub fn strip_affixes(chunk: &str) -> Vec<Unit<'_>> {
    AffixStripper::shared().strip(chunk, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::{BoundaryStrategy, PrefixPunctuation};
    use std::time::{Duration, Instant};

    fn texts<'t>(units: &[Unit<'t>]) -> Vec<&'t str> {
        units.iter().map(|u| u.text).collect()
    }

    fn kinds(units: &[Unit<'_>]) -> Vec<UnitKind> {
        units.iter().map(|u| u.kind).collect()
    }

    #[test]
    fn test_url_chunk_is_single_core() {
        let units = strip_affixes("http://foo.com/blah_(wikipedia)#cite-1");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].kind, UnitKind::Core);
        assert!(units[0].protected);
    }

    #[test]
    fn test_stacked_prefixes() {
        let units = strip_affixes("((www.red-stars.com");
        assert_eq!(texts(&units), vec!["(", "(", "www.red-stars.com"]);
        assert_eq!(
            kinds(&units),
            vec![UnitKind::Prefix, UnitKind::Prefix, UnitKind::Core]
        );
    }

    #[test]
    fn test_stacked_suffixes_keep_order() {
        let units = strip_affixes("www.red-stars.com\">");
        assert_eq!(texts(&units), vec!["www.red-stars.com", "\"", ">"]);
        assert_eq!(
            kinds(&units),
            vec![UnitKind::Core, UnitKind::Suffix, UnitKind::Suffix]
        );
    }

    #[test]
    fn test_enclosed_url() {
        let units = strip_affixes("(mailto:foo.bar@baz.com)");
        assert_eq!(texts(&units), vec!["(", "mailto:foo.bar@baz.com", ")"]);
        assert!(units[1].protected);
    }

    #[test]
    fn test_plain_word_punctuation() {
        let units = strip_affixes("(hello),");
        assert_eq!(texts(&units), vec!["(", "hello", ")", ","]);
        assert!(!units[1].protected);
    }

    #[test]
    fn test_only_punctuation_has_no_core() {
        let units = strip_affixes("((\"::");
        assert_eq!(texts(&units), vec!["(", "(", "\"", ":", ":"]);
        assert!(units.iter().all(|u| u.kind != UnitKind::Core));
    }

    #[test]
    fn test_offsets_are_relative_to_base() {
        let stripper = AffixStripper::default();
        let units = stripper.strip("(www.red-stars.com)", 10);
        assert_eq!(units[0].offset, 10);
        assert_eq!(units[1].offset, 11);
        assert_eq!(units[1].end(), 28);
        assert_eq!(units[2].offset, 28);
    }

    #[test]
    fn test_multibyte_offsets() {
        let units = strip_affixes("«word»");
        assert_eq!(texts(&units), vec!["«", "word", "»"]);
        assert_eq!(units[1].offset, '«'.len_utf8());
        assert_eq!(units[2].offset, '«'.len_utf8() + 4);
    }

    #[test]
    fn test_empty_chunk() {
        assert!(strip_affixes("").is_empty());
    }

    #[test]
    fn test_long_mark_runs_strip_in_linear_time() {
        let runs = [
            "(".repeat(100_000),
            ".".repeat(100_000),
            format!("\"{}", "\"".repeat(100_000)),
            format!("(www.red-stars.com{}", ".".repeat(100_000)),
            format!("{}mailto:foo.bar@baz.com{}", "(".repeat(50_000), ")".repeat(50_000)),
        ];

        let start = Instant::now();
        for run in &runs {
            let units = strip_affixes(run);
            assert_eq!(units.iter().map(|u| u.text.len()).sum::<usize>(), run.len());
        }
        // Quadratic peeling takes minutes at this size
        assert!(
            start.elapsed() < Duration::from_secs(5),
            "stripping took {:?}",
            start.elapsed()
        );

        let units = strip_affixes(&runs[4]);
        assert_eq!(units.len(), 100_001);
        assert_eq!(units[50_000].text, "mailto:foo.bar@baz.com");
        assert!(units[50_000].protected);
    }

    #[derive(Debug)]
    struct ZeroPeel;

    impl BoundaryStrategy for ZeroPeel {
        fn name(&self) -> &'static str {
            "zero-peel"
        }

        fn decide(&self, _span: &str) -> SpanDecision {
            SpanDecision::PeelPrefix(0)
        }
    }

    #[test]
    fn test_non_shrinking_decision_terminates() {
        let stripper = AffixStripper::with_chain(StrategyChain::new().with(ZeroPeel));
        let units = stripper.strip("(abc", 0);
        assert_eq!(texts(&units), vec!["(abc"]);
    }

    #[test]
    fn test_custom_chain_without_url_protection() {
        let chain = StrategyChain::new().with(PrefixPunctuation::new(['('].into_iter().collect()));
        let stripper = AffixStripper::with_chain(chain);
        let units = stripper.strip("(http://foo.com", 0);
        assert_eq!(texts(&units), vec!["(", "http://foo.com"]);
        assert!(!units[1].protected);
    }
}
