//! Range-scoped value extraction for formatting.

use lsp_types::Range;

use crate::document::{TextDocument, floor_char_boundary};

/// Text handed to a formatter together with the range it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopedValue<'doc> {
    /// Extracted text.
    pub value: &'doc str,
    /// Range of `value` within the document.
    pub range: Range,
}

/// Extracts the text to reformat.
///
/// With a selection, returns the text between the selection's offsets and
/// the selection itself. Offsets that fall inside a code point round down
/// to its start. Without a selection, returns the whole document and a
/// range spanning it, computed through the document's own conversions so
/// the pair always agrees.
#[must_use]
pub fn scoped_value<D>(document: &D, selection: Option<Range>) -> ScopedValue<'_>
where
    D: TextDocument + ?Sized,
{
    let text = document.text();
    match selection {
        Some(range) => {
            let start = floor_char_boundary(text, document.offset_at(range.start));
            let end = floor_char_boundary(text, document.offset_at(range.end));
            let value = text
                .get(start.min(end)..start.max(end))
                .unwrap_or_default();
            ScopedValue { value, range }
        }
        None => ScopedValue {
            value: text,
            range: Range::new(document.position_at(0), document.position_at(text.len())),
        },
    }
}
