//! Cursor-anchored token extraction.
//!
//! The scan is a local, line-scoped heuristic: it grows a span outwards from
//! the cursor over identifier-class characters (ASCII letters, digits and
//! `-`). It makes no attempt to understand the embedded language's grammar.

use lsp_types::{Position, Range};

/// Identifier-like span touching a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    range: Range,
}

impl Token {
    /// Text of the token; empty when nothing identifier-like was found.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Range occupied by the token on the cursor line.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Whether the scan found no identifier characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Returns the identifier-class span touching `position` in `text`.
///
/// The span starts at the first identifier character of the run ending
/// just before the cursor and extends one past the last identifier
/// character of the run starting just after it, so the character under
/// the cursor is always covered. A span without any identifier character
/// yields an empty token whose range still covers `[cursor, cursor + 1)`.
///
/// Characters are UTF-16 code units. A line past the end of the document
/// behaves like an empty line.
#[must_use]
pub fn token_at(text: &str, position: Position) -> Token {
    let units: Vec<u16> = usize::try_from(position.line)
        .ok()
        .and_then(|line| text.split('\n').nth(line))
        .map(|line| line.encode_utf16().collect())
        .unwrap_or_default();
    let cursor = usize::try_from(position.character).unwrap_or(usize::MAX);

    let mut left = cursor;
    while left
        .checked_sub(1)
        .is_some_and(|before| is_identifier_at(&units, before))
    {
        left -= 1;
    }

    let mut right = cursor;
    while right
        .checked_add(1)
        .is_some_and(|after| is_identifier_at(&units, after))
    {
        right += 1;
    }
    right = right.saturating_add(1);

    let span = units
        .get(left.min(units.len())..right.min(units.len()))
        .unwrap_or_default();
    let token_text = if span.iter().copied().any(is_identifier_unit) {
        String::from_utf16_lossy(span)
    } else {
        String::new()
    };

    Token {
        text: token_text,
        range: Range::new(
            Position::new(position.line, to_character(left)),
            Position::new(position.line, to_character(right)),
        ),
    }
}

fn is_identifier_at(units: &[u16], index: usize) -> bool {
    units.get(index).copied().is_some_and(is_identifier_unit)
}

fn is_identifier_unit(unit: u16) -> bool {
    u8::try_from(unit).is_ok_and(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
}

fn to_character(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
