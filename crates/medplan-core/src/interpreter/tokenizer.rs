//! Line tokenizer for prescription text.
//!
//! Handles:
//! - Line splitting (`\n` and `\r\n`)
//! - Field splitting on the en-dash separator
//! - Repair of en-dashes mangled by a Windows-1252 decode (`â€“`)

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Field separator between name/dose, frequency, instruction and duration.
pub const FIELD_SEPARATOR: char = '–';

/// Minimum fields for a usable line.
pub const MIN_FIELDS: usize = 4;

/// An en-dash that went through a UTF-8 → Windows-1252 → UTF-8 round trip.
const MANGLED_SEPARATOR: &str = "â€“";

/// Why a non-empty line produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than [`MIN_FIELDS`] separator-delimited fields.
    TooFewFields { found: usize },
    /// The name/dose field has no tokens.
    MissingName,
    /// The frequency field is empty.
    MissingFrequency,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found } => {
                write!(f, "expected at least {} fields, found {}", MIN_FIELDS, found)
            }
            SkipReason::MissingName => f.write_str("missing medicine name"),
            SkipReason::MissingFrequency => f.write_str("missing frequency code"),
        }
    }
}

/// A line that was dropped, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    /// Trimmed line text
    pub text: String,
    pub reason: SkipReason,
}

/// Trimmed fields of one candidate record line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    /// 1-based line number in the input
    pub line_number: usize,
    /// Trimmed line text
    pub text: String,
    /// Trimmed fields, at least [`MIN_FIELDS`] of them
    pub fields: Vec<String>,
}

/// Tokenizer output for one non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizedLine {
    Fields(FieldGroup),
    Skipped(SkippedLine),
}

/// Lazily tokenize prescription text, one item per non-empty line.
pub fn tokenize(text: &str) -> impl Iterator<Item = TokenizedLine> + '_ {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| tokenize_line(index + 1, line))
}

/// Tokenize a single line.
pub fn tokenize_line(line_number: usize, line: &str) -> TokenizedLine {
    let repaired = repair_separator(line.trim());
    let fields: Vec<String> = repaired
        .split(FIELD_SEPARATOR)
        .map(|f| f.trim().to_string())
        .collect();

    if fields.len() < MIN_FIELDS {
        return TokenizedLine::Skipped(SkippedLine {
            line_number,
            text: repaired.into_owned(),
            reason: SkipReason::TooFewFields {
                found: fields.len(),
            },
        });
    }

    TokenizedLine::Fields(FieldGroup {
        line_number,
        text: repaired.into_owned(),
        fields,
    })
}

/// Split the first field into (name, dose).
///
/// The first whitespace token is the name; the rest, joined by single
/// spaces, is the dose. A single token yields an empty dose. Returns `None`
/// when the field has no tokens.
pub fn split_name_dose(field: &str) -> Option<(String, String)> {
    let mut tokens = field.split_whitespace();
    let name = tokens.next()?;
    let dose = tokens.collect::<Vec<_>>().join(" ");
    Some((name.to_string(), dose))
}

/// Replace mangled en-dashes with the real separator.
fn repair_separator(line: &str) -> Cow<'_, str> {
    if line.contains(MANGLED_SEPARATOR) {
        Cow::Owned(line.replace(MANGLED_SEPARATOR, "–"))
    } else {
        Cow::Borrowed(line)
    }
}
