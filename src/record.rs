//! Schema-driven record builder.
//!
//! Consumes a flat token stream into a typed record by field-name
//! dispatch: each recognised field name pulls a fixed number of
//! payload tokens and converts them to the declared kind. A malformed
//! payload is reported as a warning and the field keeps its default;
//! only a missing record terminator aborts the record.

use std::collections::BTreeMap;
use std::fmt;

use crate::cursor::TokenCursor;

/// Error produced while building a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The token stream ran out before the record terminator.
    #[error("end of stream before record terminator '}}'")]
    UnterminatedRecord,
}

/// Value kind a field parses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One token, parsed as `i32`.
    Integer,
    /// One token, parsed as `f32`.
    Float,
    /// Three tokens, each parsed as `f32`.
    Vector3,
    /// Four tokens, each parsed as `f32`.
    Vector4,
    /// One token; the literal `"1"` is true, anything else false.
    Flag,
    /// One token, taken verbatim.
    Text,
    /// A float payload optionally preceded by a modifier keyword.
    ///
    /// If the first payload token equals `keyword`, the modifier flag
    /// is recorded and one more token is consumed as the float value;
    /// otherwise the first token is the value itself.
    ModifiedFloat { keyword: &'static str },
}

/// A parsed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i32),
    Float(f32),
    Vector3([f32; 3]),
    Vector4([f32; 4]),
    Flag(bool),
    Text(String),
    ModifiedFloat { modifier: bool, value: f32 },
}

/// One entry of a record's dispatch table.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: FieldValue,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind, default: FieldValue) -> Self {
        Self {
            name,
            kind,
            default,
        }
    }
}

/// Static dispatch table mapping field names to parse actions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    fields: Vec<FieldSpec>,
    terminator: String,
}

impl RecordSchema {
    /// Build a schema terminated by the default `}` token.
    #[must_use]
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            terminator: "}".to_string(),
        }
    }

    /// Replace the record terminator token.
    #[must_use]
    pub fn with_terminator(mut self, terminator: &str) -> Self {
        self.terminator = terminator.to_string();
        self
    }

    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// A record with every field at its default value.
    #[must_use]
    pub fn defaults(&self) -> Record {
        Record {
            values: self
                .fields
                .iter()
                .map(|f| (f.name.to_string(), f.default.clone()))
                .collect(),
        }
    }
}

/// A recoverable per-field parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    /// Name of the field whose payload failed to convert.
    pub field: String,
    /// The offending raw token.
    pub token: String,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad {} value, token is '{}'", self.field, self.token)
    }
}

/// Structured result of interpreting a brace-delimited token run.
///
/// Every schema field is present, default-initialised and overwritten
/// as the field is recognised in the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Raw value of a field, if the schema declares it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    fn set(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i32> {
        match self.get(name) {
            Some(FieldValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(FieldValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn vector3(&self, name: &str) -> Option<[f32; 3]> {
        match self.get(name) {
            Some(FieldValue::Vector3(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn vector4(&self, name: &str) -> Option<[f32; 4]> {
        match self.get(name) {
            Some(FieldValue::Vector4(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(FieldValue::Flag(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FieldValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    /// Modifier flag and value of a [`FieldKind::ModifiedFloat`] field.
    #[must_use]
    pub fn modified_float(&self, name: &str) -> Option<(bool, f32)> {
        match self.get(name) {
            Some(FieldValue::ModifiedFloat { modifier, value }) => Some((*modifier, *value)),
            _ => None,
        }
    }
}

/// Parse one record from the cursor, which must be positioned to read
/// the first field-name token (any opening brace already consumed).
///
/// Unknown field names are skipped silently. Payloads that fail to
/// convert push a [`FieldWarning`] into `warnings`, emit a
/// `tracing::warn!` event, and leave the field at its default.
///
/// # Errors
///
/// Returns [`RecordError::UnterminatedRecord`] when the stream runs
/// out before the schema's terminator token. Callers must discard the
/// partial record.
pub fn parse_record(
    schema: &RecordSchema,
    cursor: &mut TokenCursor<'_>,
    warnings: &mut Vec<FieldWarning>,
) -> Result<Record, RecordError> {
    let mut record = schema.defaults();

    loop {
        let name = next_or_unterminated(cursor)?;
        if name == schema.terminator {
            return Ok(record);
        }

        // Unrecognised field names are forward-compatibility slots,
        // not malformed input.
        let Some(spec) = schema.field(&name) else {
            continue;
        };

        match spec.kind {
            FieldKind::Integer => {
                let raw = next_or_unterminated(cursor)?;
                match raw.parse::<i32>() {
                    Ok(v) => record.set(spec.name, FieldValue::Integer(v)),
                    Err(_) => warn(warnings, spec.name, &raw),
                }
            }
            FieldKind::Float => {
                let raw = next_or_unterminated(cursor)?;
                match raw.parse::<f32>() {
                    Ok(v) => record.set(spec.name, FieldValue::Float(v)),
                    Err(_) => warn(warnings, spec.name, &raw),
                }
            }
            FieldKind::Vector3 => {
                if let Some(v) = parse_components::<3>(cursor, spec.name, warnings)? {
                    record.set(spec.name, FieldValue::Vector3(v));
                }
            }
            FieldKind::Vector4 => {
                if let Some(v) = parse_components::<4>(cursor, spec.name, warnings)? {
                    record.set(spec.name, FieldValue::Vector4(v));
                }
            }
            FieldKind::Flag => {
                let raw = next_or_unterminated(cursor)?;
                record.set(spec.name, FieldValue::Flag(raw == "1"));
            }
            FieldKind::Text => {
                let raw = next_or_unterminated(cursor)?;
                record.set(spec.name, FieldValue::Text(raw));
            }
            FieldKind::ModifiedFloat { keyword } => {
                let mut raw = next_or_unterminated(cursor)?;
                let modifier = raw == keyword;
                if modifier {
                    raw = next_or_unterminated(cursor)?;
                }
                // The modifier flag is recorded even when the payload
                // fails to convert.
                let value = match raw.parse::<f32>() {
                    Ok(v) => v,
                    Err(_) => {
                        warn(warnings, spec.name, &raw);
                        record
                            .modified_float(spec.name)
                            .map_or(0.0, |(_, value)| value)
                    }
                };
                record.set(spec.name, FieldValue::ModifiedFloat { modifier, value });
            }
        }
    }
}

/// Consume exactly `N` payload tokens, then convert them. A bad
/// component warns once and leaves the whole field at its default.
fn parse_components<const N: usize>(
    cursor: &mut TokenCursor<'_>,
    field: &str,
    warnings: &mut Vec<FieldWarning>,
) -> Result<Option<[f32; N]>, RecordError> {
    let mut raw: Vec<String> = Vec::with_capacity(N);
    for _ in 0..N {
        raw.push(next_or_unterminated(cursor)?);
    }

    let mut out = [0.0f32; N];
    for (slot, tok) in out.iter_mut().zip(&raw) {
        match tok.parse::<f32>() {
            Ok(v) => *slot = v,
            Err(_) => {
                warn(warnings, field, tok);
                return Ok(None);
            }
        }
    }
    Ok(Some(out))
}

fn next_or_unterminated(cursor: &mut TokenCursor<'_>) -> Result<String, RecordError> {
    cursor
        .next_token()
        .map_err(|_| RecordError::UnterminatedRecord)
}

fn warn(warnings: &mut Vec<FieldWarning>, field: &str, token: &str) {
    tracing::warn!(field, token, "bad field value, keeping default");
    warnings.push(FieldWarning {
        field: field.to_string(),
        token: token.to_string(),
    });
}
