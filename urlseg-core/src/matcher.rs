//! Anchored URL recognizer
//!
//! A hand-written scanner over the [`GrammarRules`] data. The whole input must
//! be consumed for a match; there is no substring search. Matching is total:
//! every string either matches or it does not.

use crate::grammar::{reserved, GrammarRules, SchemeKind};

/// URL matcher bound to a grammar
#[derive(Debug, Clone, Copy)]
pub struct UrlMatcher<'g> {
    rules: &'g GrammarRules,
}

impl Default for UrlMatcher<'static> {
    fn default() -> Self {
        Self::new(GrammarRules::shared())
    }
}

impl<'g> UrlMatcher<'g> {
    /// Create a matcher over the given grammar
    pub fn new(rules: &'g GrammarRules) -> Self {
        Self { rules }
    }

    /// The grammar this matcher reads
    pub fn rules(&self) -> &'g GrammarRules {
        self.rules
    }

    /// Check whether `text` is, in its entirety, a supported URL or mailbox
    ///
    /// Text that does not start with a scheme or the implicit host prefix,
    /// or that ends in a character no URL can end with, is rejected without
    /// scanning the rest of it.
    pub fn matches(&self, text: &str) -> bool {
        if let Some((scheme, after_colon)) = self.rules.scheme_for(text) {
            let rest = &text[after_colon..];
            if !self.can_end_with(rest) || has_whitespace(rest) {
                return false;
            }
            return match scheme.kind {
                SchemeKind::Hierarchical => rest
                    .strip_prefix("//")
                    .is_some_and(|rest| self.authority_and_tail(rest, true)),
                SchemeKind::Mailbox => self.mailbox(rest),
            };
        }

        if self.rules.has_implicit_prefix(text) {
            return self.can_end_with(text)
                && !has_whitespace(text)
                && self.authority_and_tail(text, false);
        }

        false
    }

    /// Whether the last character of `text` may close a URL. Hosts, ports and
    /// local parts end in ASCII alphanumerics; a path, query or fragment ends
    /// in one of its own characters other than trailing punctuation.
    fn can_end_with(&self, text: &str) -> bool {
        match text.chars().next_back() {
            Some(ch) if ch.is_ascii() => {
                !self.rules.trailing_punct.contains(ch)
                    && (self.rules.path_chars.contains(ch) || ch == '#')
            }
            Some(ch) => !ch.is_whitespace() && !ch.is_control(),
            None => false,
        }
    }

    /// `[userinfo@]host[:port]` followed by an optional path, query and fragment
    fn authority_and_tail(&self, text: &str, allow_userinfo: bool) -> bool {
        let split = text.find(['/', '?', '#']).unwrap_or(text.len());
        let (authority, tail) = text.split_at(split);

        let host_port = match authority.split_once('@') {
            Some((userinfo, host_port)) => {
                if !allow_userinfo || !self.userinfo(userinfo) {
                    return false;
                }
                host_port
            }
            None => authority,
        };

        let host = match host_port.rsplit_once(':') {
            Some((host, port)) => {
                if !self.port(port) {
                    return false;
                }
                host
            }
            None => host_port,
        };

        self.host(host) && self.tail(tail)
    }

    fn userinfo(&self, userinfo: &str) -> bool {
        !userinfo.is_empty()
            && scan_encoded(userinfo, |b| self.rules.userinfo_chars.contains_byte(b))
    }

    fn port(&self, port: &str) -> bool {
        !port.is_empty()
            && port.len() <= self.rules.max_port_digits
            && port.bytes().all(|b| b.is_ascii_digit())
            && port.parse::<u32>().is_ok_and(|p| p <= u32::from(u16::MAX))
    }

    /// Domain name or public dotted-decimal IPv4 address
    pub(crate) fn host(&self, host: &str) -> bool {
        if host.is_empty() || host.len() > self.rules.max_host_len {
            return false;
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.iter().any(|label| label.is_empty()) {
            return false;
        }

        if labels
            .iter()
            .all(|label| label.bytes().all(|b| b.is_ascii_digit()))
        {
            return match reserved::parse_octets(&labels) {
                Some(addr) => !self.rules.is_reserved(addr),
                None => false,
            };
        }

        if labels.len() < 2 || !labels.iter().all(|label| self.label(label)) {
            return false;
        }

        // Checked above: there are at least two labels
        let tld = labels[labels.len() - 1];
        tld.len() >= self.rules.min_tld_len && tld.bytes().all(|b| b.is_ascii_alphabetic())
    }

    fn label(&self, label: &str) -> bool {
        let bytes = label.as_bytes();
        match (bytes.first(), bytes.last()) {
            (Some(first), Some(last)) => {
                bytes.len() <= self.rules.max_label_len
                    && first.is_ascii_alphanumeric()
                    && last.is_ascii_alphanumeric()
                    && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
            }
            _ => false,
        }
    }

    /// Path, query and fragment after the authority
    fn tail(&self, tail: &str) -> bool {
        if tail.is_empty() {
            return true;
        }

        if tail
            .chars()
            .next_back()
            .is_some_and(|ch| self.rules.trailing_punct.contains(ch))
        {
            return false;
        }

        let (before_fragment, fragment) = match tail.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (tail, None),
        };
        let (path, query) = match before_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (before_fragment, None),
        };

        if !path.is_empty() && !path.starts_with('/') {
            return false;
        }
        if !self.resource_part(path, false) {
            return false;
        }
        if let Some(query) = query {
            if !self.resource_part(query, true) {
                return false;
            }
        }
        if let Some(fragment) = fragment {
            if fragment.contains('#') || !self.resource_part(fragment, true) {
                return false;
            }
        }
        true
    }

    /// Scan one resource component; non-ASCII text is accepted when it is
    /// neither whitespace nor a control character.
    fn resource_part(&self, part: &str, allow_question: bool) -> bool {
        let mut chars = part.char_indices();
        while let Some((i, ch)) = chars.next() {
            if ch == '%' {
                if !is_pct_triple(&part.as_bytes()[i..]) {
                    return false;
                }
                chars.next();
                chars.next();
            } else if ch.is_ascii() {
                if !(self.rules.path_chars.contains(ch) || (allow_question && ch == '?')) {
                    return false;
                }
            } else if ch.is_whitespace() || ch.is_control() {
                return false;
            }
        }
        true
    }

    /// `local@domain[?query]`
    fn mailbox(&self, text: &str) -> bool {
        let (address, query) = match text.split_once('?') {
            Some((address, query)) => (address, Some(query)),
            None => (text, None),
        };

        let Some((local, domain)) = address.split_once('@') else {
            return false;
        };

        if !self.local_part(local) || !self.host(domain) {
            return false;
        }

        match query {
            Some(query) => {
                !query.is_empty()
                    && !query
                        .chars()
                        .next_back()
                        .is_some_and(|ch| self.rules.trailing_punct.contains(ch))
                    && self.resource_part(query, true)
            }
            None => true,
        }
    }

    /// Segments of `[A-Za-z0-9_+]` joined by single `.` or `-`
    fn local_part(&self, local: &str) -> bool {
        !local.is_empty()
            && local.split(['.', '-']).all(|segment| {
                !segment.is_empty()
                    && segment.bytes().all(|b| {
                        b.is_ascii_alphanumeric() || self.rules.local_part_chars.contains_byte(b)
                    })
            })
    }
}

/// Scan ASCII text where `%` must introduce a hex pair and every other byte
/// must satisfy `allowed`.
fn scan_encoded(text: &str, allowed: impl Fn(u8) -> bool) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if !is_pct_triple(&bytes[i..]) {
                return false;
            }
            i += 3;
        } else if allowed(bytes[i]) {
            i += 1;
        } else {
            return false;
        }
    }
    true
}

fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

#[inline]
fn is_pct_triple(bytes: &[u8]) -> bool {
    bytes.len() >= 3
        && bytes[0] == b'%'
        && bytes[1].is_ascii_hexdigit()
        && bytes[2].is_ascii_hexdigit()
}

/// Check whether `text` is a supported URL using the default grammar
pub fn matches_url(text: &str) -> bool {
    UrlMatcher::default().matches(text)
}
