//! Seam to the external formatting engine.

use std::error::Error;
use std::path::Path;

use lsp_types::{FormattingOptions, Range, TextEdit};
use stencil_config::FormatSettings;
use thiserror::Error;

/// Everything a formatting engine needs to reformat one scoped value.
#[derive(Debug, Clone, Copy)]
pub struct FormatRequest<'a> {
    /// Text to reformat.
    pub source: &'a str,
    /// File-system path of the document, when it has one.
    pub file_path: Option<&'a Path>,
    /// Range occupied by `source` in the document.
    pub range: Range,
    /// Formatting section of the settings captured when the call started.
    pub settings: &'a FormatSettings,
    /// Name of the formatter selected for the language.
    pub formatter: &'a str,
    /// Parser the formatter should use.
    pub parser: &'a str,
    /// Whether the formatted block starts with one level of indentation.
    pub initial_indent: bool,
    /// Editor options supplied with the request.
    pub options: &'a FormattingOptions,
}

/// External engine turning a [`FormatRequest`] into text edits.
pub trait FormattingEngine: Send + Sync {
    /// Formats the request's source.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatterError`] describing why formatting failed. Modes
    /// hand the error back to their caller untouched.
    fn format(&self, request: &FormatRequest<'_>) -> Result<Vec<TextEdit>, FormatterError>;
}

/// Errors reported by formatting engines.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FormatterError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl FormatterError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-friendly description without the optional source.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
