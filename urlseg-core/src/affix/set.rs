//! Affix character lookup with O(1) membership
//!
//! ASCII fast path through a fixed table, with a hash set for the rare
//! non-ASCII marks (guillemets, curly quotes).

use std::collections::HashSet;

/// Ordered set of single-character affix marks
#[derive(Debug, Clone)]
pub struct AffixSet {
    /// Marks in configuration order
    chars: Vec<char>,
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII marks
    non_ascii: HashSet<char>,
}

impl AffixSet {
    /// Create from a list of marks; duplicates keep their first position
    pub fn new(marks: impl IntoIterator<Item = char>) -> Self {
        let mut set = Self {
            chars: Vec::new(),
            ascii_table: [false; 128],
            non_ascii: HashSet::new(),
        };
        set.extend(marks);
        set
    }

    /// Add marks to the end of the set
    pub fn extend(&mut self, marks: impl IntoIterator<Item = char>) {
        for ch in marks {
            if self.contains(ch) {
                continue;
            }
            if ch.is_ascii() {
                self.ascii_table[ch as usize] = true;
            } else {
                self.non_ascii.insert(ch);
            }
            self.chars.push(ch);
        }
    }

    /// Check if character is an affix mark - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Marks in configuration order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of marks
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set has no marks
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for AffixSet {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl FromIterator<char> for AffixSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}
