//! Forward-only token cursor over a complete definition buffer.

use crate::delim::DelimiterSet;
use crate::lexer::Lexer;

/// Error produced by cursor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// A token was requested past the end of the stream.
    #[error("no more tokens in stream")]
    ExhaustedStream,
    /// An asserted token did not match.
    #[error("expected '{expected}', found '{actual}'")]
    UnexpectedToken { expected: String, actual: String },
}

/// Pull-based, single-owner access to a token sequence.
///
/// Holds one token of lookahead so [`has_more_tokens`] is exact even
/// when only whitespace or comments remain in the buffer.
///
/// [`has_more_tokens`]: Self::has_more_tokens
#[derive(Debug)]
pub struct TokenCursor<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<String>,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor with the default delimiter sets (whitespace
    /// skipped, braces kept).
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_delimiters(input, DelimiterSet::default())
    }

    /// Create a cursor with custom delimiter sets.
    #[must_use]
    pub fn with_delimiters(input: &'a str, delims: DelimiterSet) -> Self {
        let mut lexer = Lexer::new(input, delims);
        let lookahead = lexer.extract_next();
        Self { lexer, lookahead }
    }

    /// True iff a subsequent [`next_token`](Self::next_token) call
    /// would yield a token.
    #[must_use]
    pub const fn has_more_tokens(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Consume and return the next token.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::ExhaustedStream`] when no token remains;
    /// every further call keeps failing the same way.
    pub fn next_token(&mut self) -> Result<String, CursorError> {
        self.lookahead.take().map_or(Err(CursorError::ExhaustedStream), |tok| {
            self.lookahead = self.lexer.extract_next();
            Ok(tok)
        })
    }

    /// Consume one token and require it to equal `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnexpectedToken`] on a mismatch, or
    /// [`CursorError::ExhaustedStream`] when no token remains.
    pub fn assert_next_token(&mut self, expected: &str) -> Result<(), CursorError> {
        let actual = self.next_token()?;
        if actual == expected {
            Ok(())
        } else {
            Err(CursorError::UnexpectedToken {
                expected: expected.to_string(),
                actual,
            })
        }
    }
}

impl Iterator for TokenCursor<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token().ok()
    }
}
