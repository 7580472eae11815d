//! Mode for Pug templates embedded in host documents.

use std::sync::Arc;

use lsp_types::{FormattingOptions, Position, Range, TextEdit};
use stencil_config::ModeSettings;
use tracing::debug;

use crate::document::TextDocument;
use crate::formatter::{FormatRequest, FormatterError, FormattingEngine};
use crate::mode::LanguageMode;
use crate::scope::scoped_value;
use crate::tags::{HoverOutcome, TagHoverResolver, TagProvider};
use crate::token::token_at;

/// Identifier of the Pug language, also used as the formatter parser name.
pub const PUG_LANGUAGE_ID: &str = "pug";

/// Hover and formatting support for Pug.
///
/// Hover looks up the tag under the cursor in the configured tag providers.
/// Formatting extracts the scoped text and hands it to the injected engine.
pub struct PugMode {
    settings: Arc<ModeSettings>,
    tags: TagHoverResolver,
    engine: Arc<dyn FormattingEngine>,
}

impl PugMode {
    /// Builds a mode with default settings.
    #[must_use]
    pub fn new(tags: TagHoverResolver, engine: Arc<dyn FormattingEngine>) -> Self {
        Self {
            settings: Arc::default(),
            tags,
            engine,
        }
    }

    /// Builds a mode whose tag providers are filtered by `settings`.
    ///
    /// Provider enablement is fixed at construction; later `configure`
    /// calls only affect formatting.
    #[must_use]
    pub fn with_settings(
        candidates: Vec<Box<dyn TagProvider>>,
        settings: Arc<ModeSettings>,
        engine: Arc<dyn FormattingEngine>,
    ) -> Self {
        let tags = TagHoverResolver::from_settings(candidates, &settings.tag_providers);
        Self {
            settings,
            tags,
            engine,
        }
    }

    /// Settings currently captured by the mode.
    #[must_use]
    pub fn settings(&self) -> &ModeSettings {
        &self.settings
    }
}

impl LanguageMode for PugMode {
    fn identify(&self) -> &str {
        PUG_LANGUAGE_ID
    }

    fn configure(&mut self, settings: Arc<ModeSettings>) {
        self.settings = settings;
    }

    fn hover(&self, document: &dyn TextDocument, position: Position) -> HoverOutcome {
        let token = token_at(document.text(), position);
        if token.is_empty() {
            return HoverOutcome::NoInformation;
        }
        self.tags.resolve(token.text(), token.range())
    }

    fn format(
        &self,
        document: &dyn TextDocument,
        range: Option<Range>,
        options: &FormattingOptions,
    ) -> Result<Vec<TextEdit>, FormatterError> {
        // Snapshot so the whole call sees one settings object.
        let settings = Arc::clone(&self.settings);
        let choice = settings.format.formatter_for(PUG_LANGUAGE_ID);
        let Some(formatter) = choice.name() else {
            debug!(uri = document.uri().as_str(), "pug formatting disabled");
            return Ok(Vec::new());
        };

        let scoped = scoped_value(document, range);
        let file_path = document.file_path();
        let request = FormatRequest {
            source: scoped.value,
            file_path: file_path.as_deref(),
            range: scoped.range,
            settings: &settings.format,
            formatter,
            parser: PUG_LANGUAGE_ID,
            initial_indent: false,
            options,
        };

        debug!(
            uri = document.uri().as_str(),
            version = document.version(),
            formatter,
            "delegating pug formatting"
        );
        self.engine.format(&request)
    }
}
