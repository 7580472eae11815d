//! Capability contract implemented by every embedded-language mode.

use std::fmt;
use std::sync::Arc;

use lsp_types::{FormattingOptions, Position, Range, TextEdit};
use stencil_config::ModeSettings;

use crate::document::TextDocument;
use crate::formatter::FormatterError;
use crate::tags::HoverOutcome;

/// Hover, formatting and lifecycle hooks for one embedded language.
///
/// The host registry picks a mode for each cursor position and calls into
/// it synchronously. `configure` takes `&mut self`, so settings can only
/// change between calls, never during one.
pub trait LanguageMode: Send {
    /// Identifier of the embedded language handled by this mode.
    fn identify(&self) -> &str;

    /// Replaces the captured settings wholesale.
    fn configure(&mut self, settings: Arc<ModeSettings>);

    /// Describes the text under `position`.
    ///
    /// Lookup failures degrade to [`HoverOutcome::NoInformation`].
    fn hover(&self, document: &dyn TextDocument, position: Position) -> HoverOutcome;

    /// Reformats `range`, or the whole document when `range` is `None`.
    ///
    /// # Errors
    ///
    /// Returns the formatting engine's error unchanged.
    fn format(
        &self,
        document: &dyn TextDocument,
        range: Option<Range>,
        options: &FormattingOptions,
    ) -> Result<Vec<TextEdit>, FormatterError>;

    /// Releases resources held for `document`.
    fn document_closed(&mut self, _document: &dyn TextDocument) {}

    /// Releases resources held by the mode.
    fn dispose(&mut self) {}
}

impl fmt::Debug for dyn LanguageMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "LanguageMode({})", self.identify())
    }
}
