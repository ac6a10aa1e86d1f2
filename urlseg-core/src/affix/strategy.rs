//! Boundary strategies consulted while peeling affixes
//!
//! Each strategy looks at the current inner span and either claims it or
//! passes. The chain asks its strategies in order and the first claim wins.

use std::fmt;

use crate::affix::{AffixRules, AffixSet};
use crate::grammar::GrammarRules;
use crate::matcher::UrlMatcher;

/// Decision about the current inner span
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpanDecision {
    /// Keep the whole span as one protected core
    Protect,
    /// Split this many bytes off the front
    PeelPrefix(usize),
    /// Split this many bytes off the end
    PeelSuffix(usize),
    /// No opinion; ask the next strategy
    Pass,
}

/// One boundary-detection rule
pub trait BoundaryStrategy: Send + Sync + fmt::Debug {
    /// Strategy name for debugging
    fn name(&self) -> &'static str;

    /// Decide what to do with a non-empty span
    fn decide(&self, span: &str) -> SpanDecision;
}

/// Protects spans the URL grammar accepts in full
#[derive(Debug, Clone, Copy)]
pub struct UrlProtection<'g> {
    matcher: UrlMatcher<'g>,
}

impl<'g> UrlProtection<'g> {
    pub fn new(matcher: UrlMatcher<'g>) -> Self {
        Self { matcher }
    }
}

impl BoundaryStrategy for UrlProtection<'_> {
    fn name(&self) -> &'static str {
        "url-protection"
    }

    fn decide(&self, span: &str) -> SpanDecision {
        if self.matcher.matches(span) {
            SpanDecision::Protect
        } else {
            SpanDecision::Pass
        }
    }
}

/// Peels a leading mark from the prefix set
#[derive(Debug, Clone)]
pub struct PrefixPunctuation {
    marks: AffixSet,
}

impl PrefixPunctuation {
    pub fn new(marks: AffixSet) -> Self {
        Self { marks }
    }
}

impl BoundaryStrategy for PrefixPunctuation {
    fn name(&self) -> &'static str {
        "prefix-punctuation"
    }

    fn decide(&self, span: &str) -> SpanDecision {
        match span.chars().next() {
            Some(ch) if self.marks.contains(ch) => SpanDecision::PeelPrefix(ch.len_utf8()),
            _ => SpanDecision::Pass,
        }
    }
}

/// Peels a trailing mark from the suffix set
#[derive(Debug, Clone)]
pub struct SuffixPunctuation {
    marks: AffixSet,
}

impl SuffixPunctuation {
    pub fn new(marks: AffixSet) -> Self {
        Self { marks }
    }
}

impl BoundaryStrategy for SuffixPunctuation {
    fn name(&self) -> &'static str {
        "suffix-punctuation"
    }

    fn decide(&self, span: &str) -> SpanDecision {
        match span.chars().next_back() {
            Some(ch) if self.marks.contains(ch) => SpanDecision::PeelSuffix(ch.len_utf8()),
            _ => SpanDecision::Pass,
        }
    }
}

/// Ordered list of strategies tried in priority order
#[derive(Debug, Default)]
pub struct StrategyChain<'g> {
    strategies: Vec<Box<dyn BoundaryStrategy + 'g>>,
}

impl<'g> StrategyChain<'g> {
    /// Empty chain; every span passes
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// URL protection, then prefix marks, then suffix marks
    pub fn standard(grammar: &'g GrammarRules, rules: &AffixRules) -> Self {
        Self::new()
            .with(UrlProtection::new(UrlMatcher::new(grammar)))
            .with(PrefixPunctuation::new(rules.prefixes().clone()))
            .with(SuffixPunctuation::new(rules.suffixes().clone()))
    }

    /// Append a strategy at the lowest priority
    pub fn with(mut self, strategy: impl BoundaryStrategy + 'g) -> Self {
        self.push(strategy);
        self
    }

    /// Append a strategy at the lowest priority
    pub fn push(&mut self, strategy: impl BoundaryStrategy + 'g) {
        self.strategies.push(Box::new(strategy));
    }

    /// Strategy names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// First non-pass decision, or [`SpanDecision::Pass`]
    pub fn decide(&self, span: &str) -> SpanDecision {
        self.strategies
            .iter()
            .map(|strategy| strategy.decide(span))
            .find(|decision| *decision != SpanDecision::Pass)
            .unwrap_or(SpanDecision::Pass)
    }
}
