//! Reserved and non-routable IPv4 ranges
//!
//! A dotted-decimal host is only accepted when it falls outside every range
//! listed here and is neither a network nor a broadcast address.

/// IPv4 CIDR block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Range {
    base: u32,
    prefix_len: u8,
}

impl Ipv4Range {
    /// Create a range from its base octets and prefix length (0-32)
    pub const fn new(octets: [u8; 4], prefix_len: u8) -> Self {
        let prefix_len = if prefix_len > 32 { 32 } else { prefix_len };
        Self {
            base: u32::from_be_bytes(octets),
            prefix_len,
        }
    }

    #[inline]
    fn mask(&self) -> u32 {
        if self.prefix_len == 0 {
            0
        } else {
            u32::MAX << (32 - self.prefix_len as u32)
        }
    }

    /// Check whether an address lies inside this block
    #[inline]
    pub fn contains(&self, addr: [u8; 4]) -> bool {
        let mask = self.mask();
        u32::from_be_bytes(addr) & mask == self.base & mask
    }
}

/// Ranges rejected as URL hosts
pub const RESERVED_RANGES: &[Ipv4Range] = &[
    // "this" network, including 0.0.0.0
    Ipv4Range::new([0, 0, 0, 0], 8),
    // private networks
    Ipv4Range::new([10, 0, 0, 0], 8),
    Ipv4Range::new([172, 16, 0, 0], 12),
    Ipv4Range::new([192, 168, 0, 0], 16),
    // loopback
    Ipv4Range::new([127, 0, 0, 0], 8),
    // link-local
    Ipv4Range::new([169, 254, 0, 0], 16),
    // multicast and reserved space (224.0.0.0 and above)
    Ipv4Range::new([224, 0, 0, 0], 3),
];

/// Parse a dotted-decimal IPv4 address from already-split labels.
///
/// Returns `None` unless there are exactly four groups of 1-3 digits, each
/// at most 255.
pub fn parse_octets(labels: &[&str]) -> Option<[u8; 4]> {
    if labels.len() != 4 {
        return None;
    }

    let mut octets = [0u8; 4];
    for (slot, label) in octets.iter_mut().zip(labels) {
        if label.is_empty() || label.len() > 3 || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = label.parse::<u8>().ok()?;
    }
    Some(octets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains() {
        let private = Ipv4Range::new([172, 16, 0, 0], 12);
        assert!(private.contains([172, 16, 0, 1]));
        assert!(private.contains([172, 31, 255, 254]));
        assert!(!private.contains([172, 32, 0, 1]));
        assert!(!private.contains([172, 15, 0, 1]));
    }

    #[test]
    fn test_multicast_block_covers_upper_space() {
        let upper = Ipv4Range::new([224, 0, 0, 0], 3);
        assert!(upper.contains([224, 1, 1, 1]));
        assert!(upper.contains([255, 255, 255, 255]));
        assert!(!upper.contains([223, 255, 255, 254]));
    }

    #[test]
    fn test_zero_prefix_matches_everything() {
        let all = Ipv4Range::new([1, 2, 3, 4], 0);
        assert!(all.contains([9, 9, 9, 9]));
    }

    #[test]
    fn test_parse_octets() {
        assert_eq!(parse_octets(&["142", "42", "1", "1"]), Some([142, 42, 1, 1]));
        assert_eq!(parse_octets(&["123", "123", "123"]), None);
        assert_eq!(parse_octets(&["1", "1", "1", "1", "1"]), None);
        assert_eq!(parse_octets(&["256", "1", "1", "1"]), None);
        assert_eq!(parse_octets(&["1000", "1", "1", "1"]), None);
        assert_eq!(parse_octets(&["3628126748"]), None);
    }
}
