//! Character-level state machine for definition text.
//!
//! Splits on configurable skip-delimiters, returns kept-delimiters
//! (braces by default) as standalone one-character tokens, protects
//! double-quoted content from all delimiter handling, and discards
//! both `//` line comments and `/* */` block comments.
//!
//! The machine is re-initialised on every extraction; only the cursor
//! position in the source buffer survives between returned tokens.

use crate::delim::DelimiterSet;

/// Lexer state during a single token extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing found yet.
    Searching,
    /// Accumulating a possible multi-character token.
    TokenInProgress,
    /// Inside quoted text, no delimiter splitting.
    Quoted,
    /// Forward slash seen, possible comment coming.
    SlashSeen,
    /// Inside a `//` comment, runs to end of line.
    LineComment,
    /// Inside a `/* */` comment.
    BlockComment,
    /// Asterisk inside a block comment, possible `*/` coming.
    StarSeen,
}

/// Single-pass tokeniser over a complete input buffer.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    delims: DelimiterSet,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input` with the given delimiter sets.
    #[must_use]
    pub const fn new(input: &'a str, delims: DelimiterSet) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            delims,
        }
    }

    /// True once the source buffer is fully consumed.
    ///
    /// [`extract_next`](Self::extract_next) returning `None` means a
    /// pure whitespace/comment run; callers distinguish that from end
    /// of input with this check.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Extract the next token, advancing the cursor past it.
    ///
    /// Returns `None` when the remaining input holds no token (only
    /// delimiters and comments). A returned token is never empty.
    pub fn extract_next(&mut self) -> Option<String> {
        let mut state = State::Searching;
        let mut tok: Vec<u8> = Vec::new();

        while self.pos < self.input.len() {
            let c = self.input[self.pos];

            match state {
                State::Searching => {
                    if self.delims.is_skip(c) {
                        self.pos += 1;
                        continue;
                    }
                    // A kept delimiter is itself the token to return;
                    // it replaces any pending accumulation (possible
                    // after a slash false alarm).
                    if self.delims.is_kept(c) {
                        self.pos += 1;
                        return Some(char::from(c).to_string());
                    }
                    // Fall through into token accumulation without
                    // consuming the character.
                    state = State::TokenInProgress;
                }

                State::TokenInProgress => {
                    // A delimiter ends the token; leave it unconsumed
                    // so the next extraction sees it.
                    if self.delims.is_skip(c) || self.delims.is_kept(c) {
                        return Some(Self::finish(tok));
                    }
                    match c {
                        // A quote ends a token in progress, or opens a
                        // quoted span if nothing has accumulated.
                        b'"' => {
                            if tok.is_empty() {
                                state = State::Quoted;
                                self.pos += 1;
                            } else {
                                return Some(Self::finish(tok));
                            }
                        }
                        // Possible comment; the slash is not added to
                        // the token until proven harmless.
                        b'/' => {
                            state = State::SlashSeen;
                            self.pos += 1;
                        }
                        _ => {
                            tok.push(c);
                            self.pos += 1;
                        }
                    }
                }

                State::Quoted => {
                    if c == b'"' {
                        self.pos += 1;
                        if tok.is_empty() {
                            // Empty quoted string: no token from this
                            // pair of quotes.
                            state = State::Searching;
                        } else {
                            return Some(Self::finish(tok));
                        }
                    } else {
                        tok.push(c);
                        self.pos += 1;
                    }
                }

                State::SlashSeen => match c {
                    b'*' => {
                        state = State::BlockComment;
                        self.pos += 1;
                    }
                    b'/' => {
                        state = State::LineComment;
                        self.pos += 1;
                    }
                    // False alarm: restore the slash and reprocess the
                    // current character from the searching state.
                    _ => {
                        tok.push(b'/');
                        state = State::Searching;
                    }
                },

                State::BlockComment => {
                    if c == b'*' {
                        state = State::StarSeen;
                    }
                    self.pos += 1;
                }

                State::StarSeen => {
                    state = if c == b'/' {
                        State::Searching
                    } else {
                        State::BlockComment
                    };
                    self.pos += 1;
                }

                State::LineComment => {
                    if c == b'\r' || c == b'\n' {
                        state = State::Searching;
                    }
                    self.pos += 1;
                }
            }
        }

        // Input exhausted; return whatever accumulated. A pending
        // slash in the slash-seen state is dropped here.
        if tok.is_empty() {
            None
        } else {
            Some(Self::finish(tok))
        }
    }

    fn finish(tok: Vec<u8>) -> String {
        String::from_utf8_lossy(&tok).into_owned()
    }
}

/// Tokenise a complete definition string with default delimiters.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let mut lexer = Lexer::new(input, DelimiterSet::default());
    let mut tokens = Vec::new();
    while let Some(tok) = lexer.extract_next() {
        tokens.push(tok);
    }
    tokens
}
