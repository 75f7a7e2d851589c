//! Delimiter classification for the lexer.
//!
//! Two disjoint character sets drive tokenisation: *skip*-delimiters
//! separate tokens and are discarded, *kept*-delimiters always form
//! their own single-character token, splitting any adjacent text.

/// The delimiter configuration for a lexer or cursor.
///
/// Both sets are ASCII; multi-byte UTF-8 content can never collide
/// with them and passes through tokenisation untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    skip: Vec<u8>,
    kept: Vec<u8>,
}

impl DelimiterSet {
    /// Build a delimiter set from the characters of two strings.
    ///
    /// # Panics
    ///
    /// Panics if the two sets share a character, or if either set
    /// contains a non-ASCII character. Both are construction-time
    /// programmer errors.
    #[must_use]
    pub fn new(skip: &str, kept: &str) -> Self {
        assert!(
            skip.is_ascii() && kept.is_ascii(),
            "delimiters must be ASCII"
        );
        assert!(
            !skip.bytes().any(|c| kept.bytes().any(|k| k == c)),
            "skip and kept delimiter sets must be disjoint"
        );
        Self {
            skip: skip.bytes().collect(),
            kept: kept.bytes().collect(),
        }
    }

    /// True if `c` separates tokens without producing one.
    #[must_use]
    pub fn is_skip(&self, c: u8) -> bool {
        self.skip.contains(&c)
    }

    /// True if `c` is returned as its own single-character token.
    #[must_use]
    pub fn is_kept(&self, c: u8) -> bool {
        self.kept.contains(&c)
    }
}

impl Default for DelimiterSet {
    /// Whitespace skip-delimiters and brace kept-delimiters.
    fn default() -> Self {
        Self {
            skip: b" \t\n\r".to_vec(),
            kept: b"{}".to_vec(),
        }
    }
}
