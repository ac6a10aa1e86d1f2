//! Grammar rule set for URL recognition
//!
//! The rule set is plain data: scheme alternatives, host and port limits,
//! reserved address ranges and the character classes used by the scanner in
//! [`crate::matcher`]. It is built once and only ever read afterwards.

pub mod charclass;
pub mod reserved;

use std::sync::OnceLock;

pub use charclass::CharClass;
pub use reserved::{Ipv4Range, RESERVED_RANGES};

use charclass::{SUB_DELIMS, UNRESERVED};

/// How the text after a scheme name is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    /// `scheme://authority[path][?query][#fragment]`
    Hierarchical,
    /// `scheme:local@domain[?query]`
    Mailbox,
}

/// A recognized scheme name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    /// Lowercase scheme name without the trailing colon
    pub name: &'static str,
    /// Parsing mode for the remainder
    pub kind: SchemeKind,
}

impl Scheme {
    /// Hierarchical scheme (`name://...`)
    pub const fn hierarchical(name: &'static str) -> Self {
        Self {
            name,
            kind: SchemeKind::Hierarchical,
        }
    }

    /// Mailbox scheme (`name:user@host`)
    pub const fn mailbox(name: &'static str) -> Self {
        Self {
            name,
            kind: SchemeKind::Mailbox,
        }
    }
}

/// Default configuration constants
pub mod defaults {
    /// Prefix that stands in for a scheme on bare hosts
    pub const IMPLICIT_HOST_PREFIX: &str = "www.";

    /// Maximum total host length
    pub const MAX_HOST_LEN: usize = 253;

    /// Maximum length of a single domain label
    pub const MAX_LABEL_LEN: usize = 63;

    /// Minimum length of the top-level label
    pub const MIN_TLD_LEN: usize = 2;

    /// Maximum number of port digits
    pub const MAX_PORT_DIGITS: usize = 5;
}

/// Immutable URL grammar
#[derive(Debug, Clone)]
pub struct GrammarRules {
    pub(crate) schemes: Vec<Scheme>,
    pub(crate) implicit_host_prefix: &'static str,
    pub(crate) reserved_ranges: Vec<Ipv4Range>,
    pub(crate) reject_network_broadcast: bool,
    pub(crate) max_host_len: usize,
    pub(crate) max_label_len: usize,
    pub(crate) min_tld_len: usize,
    pub(crate) max_port_digits: usize,
    /// Characters allowed raw in `userinfo`
    pub(crate) userinfo_chars: CharClass,
    /// ASCII characters allowed raw in path, query and fragment
    pub(crate) path_chars: CharClass,
    /// Characters a URL may not end with
    pub(crate) trailing_punct: CharClass,
    /// Characters allowed in a mailbox local-part segment besides alphanumerics
    pub(crate) local_part_chars: CharClass,
}

impl Default for GrammarRules {
    fn default() -> Self {
        Self {
            schemes: vec![
                Scheme::hierarchical("http"),
                Scheme::hierarchical("https"),
                Scheme::hierarchical("ftp"),
                Scheme::mailbox("mailto"),
            ],
            implicit_host_prefix: defaults::IMPLICIT_HOST_PREFIX,
            reserved_ranges: RESERVED_RANGES.to_vec(),
            reject_network_broadcast: true,
            max_host_len: defaults::MAX_HOST_LEN,
            max_label_len: defaults::MAX_LABEL_LEN,
            min_tld_len: defaults::MIN_TLD_LEN,
            max_port_digits: defaults::MAX_PORT_DIGITS,
            userinfo_chars: UNRESERVED
                .union(SUB_DELIMS)
                .union(CharClass::from_ascii(":")),
            path_chars: UNRESERVED
                .union(SUB_DELIMS)
                .union(CharClass::from_ascii(":@/")),
            trailing_punct: CharClass::from_ascii(")]}.,:;!?'"),
            local_part_chars: CharClass::from_ascii("_+"),
        }
    }
}

impl GrammarRules {
    /// Create the default grammar
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide default grammar, built on first use
    pub fn shared() -> &'static GrammarRules {
        static SHARED: OnceLock<GrammarRules> = OnceLock::new();
        SHARED.get_or_init(|| {
            tracing::debug!("initializing default URL grammar");
            GrammarRules::default()
        })
    }

    /// Recognized schemes in priority order
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Find the scheme whose name prefixes `text` (ASCII case-insensitive)
    /// and is immediately followed by `:`. Returns the scheme and the byte
    /// offset just past the colon.
    pub(crate) fn scheme_for(&self, text: &str) -> Option<(&Scheme, usize)> {
        let bytes = text.as_bytes();
        self.schemes.iter().find_map(|scheme| {
            let len = scheme.name.len();
            let head = bytes.get(..len)?;
            if head.eq_ignore_ascii_case(scheme.name.as_bytes()) && bytes.get(len) == Some(&b':') {
                Some((scheme, len + 1))
            } else {
                None
            }
        })
    }

    /// Whether `text` begins with the implicit host prefix
    pub(crate) fn has_implicit_prefix(&self, text: &str) -> bool {
        let prefix = self.implicit_host_prefix.as_bytes();
        text.as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    /// Whether a dotted-decimal address is excluded as a URL host
    pub fn is_reserved(&self, addr: [u8; 4]) -> bool {
        if self.reject_network_broadcast && (addr[3] == 0 || addr[3] == 255) {
            return true;
        }
        self.reserved_ranges.iter().any(|range| range.contains(addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_lookup() {
        let rules = GrammarRules::default();

        let (scheme, end) = rules.scheme_for("https://example.com").unwrap();
        assert_eq!(scheme.name, "https");
        assert_eq!(end, 6);

        let (scheme, end) = rules.scheme_for("HTTP://example.com").unwrap();
        assert_eq!(scheme.name, "http");
        assert_eq!(end, 5);

        let (scheme, _) = rules.scheme_for("mailto:a@b.co").unwrap();
        assert_eq!(scheme.kind, SchemeKind::Mailbox);
    }

    #[test]
    fn test_scheme_typos_are_unknown() {
        let rules = GrammarRules::default();
        assert!(rules.scheme_for("ftps://foo.bar/").is_none());
        assert!(rules.scheme_for("h://test").is_none());
        assert!(rules.scheme_for("rdar://1234").is_none());
        assert!(rules.scheme_for("NASDAQ:GOOG").is_none());
        assert!(rules.scheme_for("http").is_none());
    }

    #[test]
    fn test_implicit_prefix() {
        let rules = GrammarRules::default();
        assert!(rules.has_implicit_prefix("www.red-stars.com"));
        assert!(rules.has_implicit_prefix("WWW.example.com"));
        assert!(!rules.has_implicit_prefix("ww.example.com"));
        assert!(!rules.has_implicit_prefix("www"));
    }

    #[test]
    fn test_reserved_addresses() {
        let rules = GrammarRules::default();
        assert!(rules.is_reserved([0, 0, 0, 0]));
        assert!(rules.is_reserved([10, 1, 1, 1]));
        assert!(rules.is_reserved([224, 1, 1, 1]));
        assert!(rules.is_reserved([192, 168, 0, 1]));
        assert!(rules.is_reserved([142, 42, 1, 0]));
        assert!(rules.is_reserved([142, 42, 1, 255]));
        assert!(!rules.is_reserved([142, 42, 1, 1]));
        assert!(!rules.is_reserved([223, 255, 255, 254]));
    }

    #[test]
    fn test_shared_is_singleton() {
        let a = GrammarRules::shared() as *const GrammarRules;
        let b = GrammarRules::shared() as *const GrammarRules;
        assert_eq!(a, b);
    }
}
