//! Prefix and suffix splitting around protected tokens
//!
//! [`AffixRules`] holds the two mark sets, [`strategy`] defines the ordered
//! chain of boundary decisions and [`AffixStripper`] runs the peeling loop.

pub mod set;
pub mod strategy;
pub mod stripper;

use std::sync::OnceLock;

pub use set::AffixSet;
pub use strategy::{
    BoundaryStrategy, PrefixPunctuation, SpanDecision, StrategyChain, SuffixPunctuation,
    UrlProtection,
};
pub use stripper::{strip_affixes, AffixStripper, Unit, UnitKind};

use crate::config::AffixConfig;
use crate::error::Result;

/// Prefix and suffix mark sets
#[derive(Debug, Clone)]
pub struct AffixRules {
    prefixes: AffixSet,
    suffixes: AffixSet,
}

impl AffixRules {
    /// Create from explicit mark lists
    pub fn new(
        prefixes: impl IntoIterator<Item = char>,
        suffixes: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            prefixes: AffixSet::new(prefixes),
            suffixes: AffixSet::new(suffixes),
        }
    }

    /// Create from a validated configuration
    pub fn from_config(config: &AffixConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.prefixes.chars.iter().copied(),
            config.suffixes.chars.iter().copied(),
        ))
    }

    /// Process-wide default rules from the embedded configuration
    pub fn shared() -> &'static AffixRules {
        static SHARED: OnceLock<AffixRules> = OnceLock::new();
        SHARED.get_or_init(|| {
            let config = AffixConfig::embedded();
            AffixRules::new(
                config.prefixes.chars.iter().copied(),
                config.suffixes.chars.iter().copied(),
            )
        })
    }

    /// Marks split off the front of a chunk
    pub fn prefixes(&self) -> &AffixSet {
        &self.prefixes
    }

    /// Marks split off the end of a chunk
    pub fn suffixes(&self) -> &AffixSet {
        &self.suffixes
    }

    /// Add marks to either set
    pub fn extend(
        &mut self,
        prefixes: impl IntoIterator<Item = char>,
        suffixes: impl IntoIterator<Item = char>,
    ) {
        self.prefixes.extend(prefixes);
        self.suffixes.extend(suffixes);
    }

    /// Convert back to a configuration value
    pub fn to_config(&self) -> AffixConfig {
        use crate::config::{MarkList, Metadata};

        AffixConfig {
            metadata: Metadata::default(),
            prefixes: MarkList {
                chars: self.prefixes.chars().to_vec(),
            },
            suffixes: MarkList {
                chars: self.suffixes.chars().to_vec(),
            },
        }
    }
}

impl Default for AffixRules {
    fn default() -> Self {
        Self::shared().clone()
    }
}
