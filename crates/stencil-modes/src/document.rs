//! Read-only view over host documents.
//!
//! Offsets are byte offsets into [`TextDocument::text`]; characters within a
//! [`Position`] are counted in UTF-16 code units, matching the LSP default
//! position encoding.

use std::path::PathBuf;

use lsp_types::{Position, Uri};

/// Document owned by the host and read by the modes.
pub trait TextDocument {
    /// Stable identifier of the document.
    fn uri(&self) -> &Uri;

    /// Version counter bumped by the host on every change.
    fn version(&self) -> i32;

    /// Full text of the document.
    fn text(&self) -> &str;

    /// Converts a position into a byte offset, clamping to the document.
    fn offset_at(&self, position: Position) -> usize;

    /// Converts a byte offset into a position, clamping to the document.
    fn position_at(&self, offset: usize) -> Position;

    /// File-system path for `file://` documents.
    fn file_path(&self) -> Option<PathBuf> {
        file_path_from_uri(self.uri())
    }
}

/// Resolves the file-system path behind a `file://` URI.
///
/// Returns `None` for other schemes or URIs that do not map to a path.
#[must_use]
pub fn file_path_from_uri(uri: &Uri) -> Option<PathBuf> {
    let url = url::Url::parse(uri.as_str()).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

/// In-memory document snapshot.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    uri: Uri,
    version: i32,
    text: String,
    line_starts: Vec<usize>,
}

impl SourceDocument {
    /// Builds a snapshot from its URI, version and text.
    #[must_use]
    pub fn new(uri: Uri, version: i32, text: impl Into<String>) -> Self {
        let owned = text.into();
        let line_starts = compute_line_starts(&owned);
        Self {
            uri,
            version,
            text: owned,
            line_starts,
        }
    }

    fn line_bounds(&self, line: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(line)?;
        let next = self
            .line_starts
            .get(line.saturating_add(1))
            .copied()
            .unwrap_or(self.text.len());
        let content = self.text.get(start..next).unwrap_or_default();
        let trimmed = content
            .strip_suffix('\n')
            .map_or(content, |rest| rest.strip_suffix('\r').unwrap_or(rest));
        Some((start, start + trimmed.len()))
    }
}

impl TextDocument for SourceDocument {
    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn text(&self) -> &str {
        self.text.as_str()
    }

    fn offset_at(&self, position: Position) -> usize {
        let bounds = usize::try_from(position.line)
            .ok()
            .and_then(|line| self.line_bounds(line));
        let Some((line_start, line_end)) = bounds else {
            return self.text.len();
        };

        let line = self.text.get(line_start..line_end).unwrap_or_default();
        let mut units = 0_u32;
        for (index, character) in line.char_indices() {
            if units >= position.character {
                return line_start + index;
            }
            units = units.saturating_add(utf16_width(character));
        }
        line_end
    }

    fn position_at(&self, offset: usize) -> Position {
        let clamped = floor_char_boundary(&self.text, offset);

        let line = self
            .line_starts
            .partition_point(|start| *start <= clamped)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let prefix = self.text.get(line_start..clamped).unwrap_or_default();
        let character = u32::try_from(prefix.encode_utf16().count()).unwrap_or(u32::MAX);

        Position::new(u32::try_from(line).unwrap_or(u32::MAX), character)
    }
}

/// Largest char boundary of `text` at or below `offset`.
pub(crate) fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut clamped = offset.min(text.len());
    while !text.is_char_boundary(clamped) {
        clamped = clamped.saturating_sub(1);
    }
    clamped
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        text.match_indices('\n')
            .map(|(index, newline)| index + newline.len()),
    );
    starts
}

fn utf16_width(character: char) -> u32 {
    // A char is one or two UTF-16 code units.
    if character.len_utf16() == 1 { 1 } else { 2 }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::{fixture, rstest};

    use super::*;

    fn uri(raw: &str) -> Uri {
        Uri::from_str(raw).unwrap_or_else(|error| panic!("invalid test URI: {error}"))
    }

    #[fixture]
    fn document() -> SourceDocument {
        SourceDocument::new(uri("file:///workspace/page.vue"), 3, "div\r\n  p héllo\n")
    }

    #[rstest]
    #[case(Position::new(0, 0), 0)]
    #[case(Position::new(0, 3), 3)]
    #[case(Position::new(0, 40), 3)]
    #[case(Position::new(1, 5), 10)]
    #[case(Position::new(1, 6), 12)]
    #[case(Position::new(2, 0), 16)]
    #[case(Position::new(9, 0), 16)]
    fn converts_positions_to_offsets(
        document: SourceDocument,
        #[case] position: Position,
        #[case] expected: usize,
    ) {
        assert_eq!(document.offset_at(position), expected);
    }

    #[rstest]
    #[case(0, Position::new(0, 0))]
    #[case(5, Position::new(1, 0))]
    #[case(12, Position::new(1, 6))]
    #[case(16, Position::new(2, 0))]
    #[case(400, Position::new(2, 0))]
    fn converts_offsets_to_positions(
        document: SourceDocument,
        #[case] offset: usize,
        #[case] expected: Position,
    ) {
        assert_eq!(document.position_at(offset), expected);
    }

    #[rstest]
    fn offsets_inside_a_code_point_round_down(document: SourceDocument) {
        // 'é' occupies bytes 10 and 11.
        assert_eq!(document.position_at(11), Position::new(1, 5));
    }

    #[rstest]
    fn exposes_identity(document: SourceDocument) {
        assert_eq!(document.version(), 3);
        assert_eq!(
            document.file_path(),
            Some(PathBuf::from("/workspace/page.vue"))
        );
    }

    #[rstest]
    fn untitled_documents_have_no_path() {
        let document = SourceDocument::new(uri("untitled:Untitled-1"), 1, "");
        assert_eq!(document.file_path(), None);
    }
}
