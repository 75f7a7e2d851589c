//! Tokeniser, token cursor, and record parser for idTech-style
//! definition files (materials, particles, entities).
//!
//! Three layers, built on each other:
//!
//! 1. a character state machine ([`lexer`]) that splits on
//!    whitespace, returns braces as standalone tokens, protects
//!    quoted content, and strips `//` and `/* */` comments;
//! 2. a pull-based [`TokenCursor`] with one-token-at-a-time access
//!    and an assertion helper;
//! 3. a schema-driven [`record`] builder that consumes a flat token
//!    stream into a typed record by field-name dispatch, with
//!    warn-and-default handling of malformed payloads.
//!
//! # Quick start
//!
//! ```
//! use deffile_rs::{ParticleStage, parse_stage_str};
//!
//! let input = "{\n\tcount 20\n\tmaterial \"textures/particles/dust\"\n}\n";
//! let (stage, warnings) = parse_stage_str(input).unwrap();
//! assert_eq!(stage.count, 20);
//! assert_eq!(stage.material, "textures/particles/dust");
//! assert!(warnings.is_empty());
//! ```
//!
//! ## Walk a token stream by hand
//!
//! ```
//! use deffile_rs::TokenCursor;
//!
//! let mut cursor = TokenCursor::new("particle fx/smoke { /* body */ }");
//! assert_eq!(cursor.next_token().as_deref(), Ok("particle"));
//! assert_eq!(cursor.next_token().as_deref(), Ok("fx/smoke"));
//! cursor.assert_next_token("{").unwrap();
//! cursor.assert_next_token("}").unwrap();
//! assert!(!cursor.has_more_tokens());
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cursor;
pub mod delim;
pub mod lexer;
pub mod record;
pub mod stage;

pub use cursor::{CursorError, TokenCursor};
pub use delim::DelimiterSet;
pub use lexer::{Lexer, tokenize};
pub use record::{
    FieldKind, FieldSpec, FieldValue, FieldWarning, Record, RecordError, RecordSchema,
    parse_record,
};
pub use stage::ParticleStage;

/// Unified error type covering cursor and record failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A token cursor error.
    #[error("{0}")]
    Cursor(#[from] CursorError),
    /// A record builder error.
    #[error("{0}")]
    Record(#[from] RecordError),
}

/// Parse one brace-delimited particle stage from source text.
///
/// Expects the text to open with a `{` token; returns the stage and
/// any per-field warnings accumulated while parsing it.
pub fn parse_stage_str(input: &str) -> Result<(ParticleStage, Vec<FieldWarning>), Error> {
    let mut cursor = TokenCursor::new(input);
    cursor.assert_next_token("{")?;
    let mut warnings = Vec::new();
    let stage = ParticleStage::parse(&mut cursor, &mut warnings)?;
    Ok((stage, warnings))
}
