//! ASCII character classes with O(1) lookup
//!
//! Used by the URL scanner for userinfo, path and trailing punctuation checks.

/// Fixed set of ASCII characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass {
    table: [bool; 128],
}

impl CharClass {
    /// Empty class
    pub const fn empty() -> Self {
        Self {
            table: [false; 128],
        }
    }

    /// Build a class from the bytes of an ASCII string
    pub const fn from_ascii(chars: &str) -> Self {
        let bytes = chars.as_bytes();
        let mut table = [false; 128];
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] < 128 {
                table[bytes[i] as usize] = true;
            }
            i += 1;
        }
        Self { table }
    }

    /// Union of two classes
    pub const fn union(self, other: CharClass) -> Self {
        let mut table = self.table;
        let mut i = 0;
        while i < 128 {
            table[i] = table[i] || other.table[i];
            i += 1;
        }
        Self { table }
    }

    /// Check membership. Non-ASCII characters are never members.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        ch.is_ascii() && self.table[ch as usize]
    }

    /// Byte variant of [`CharClass::contains`]
    #[inline]
    pub fn contains_byte(&self, b: u8) -> bool {
        b < 128 && self.table[b as usize]
    }
}

impl Default for CharClass {
    fn default() -> Self {
        Self::empty()
    }
}

/// `A-Z a-z 0-9 - . _ ~`
pub const UNRESERVED: CharClass =
    CharClass::from_ascii("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~");

/// `! $ & ' ( ) * + , ; =`
pub const SUB_DELIMS: CharClass = CharClass::from_ascii("!$&'()*+,;=");
