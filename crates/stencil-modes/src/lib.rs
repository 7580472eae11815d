//! Embedded-language modes for multi-language host documents.
//!
//! A mode owns the hover and formatting behaviour of one sub-language nested
//! inside a larger document. The host keeps documents, chooses which mode
//! handles a cursor and loads configuration; modes only read documents
//! through [`TextDocument`] and receive settings through
//! [`LanguageMode::configure`]. Formatting itself is delegated to an
//! injected [`FormattingEngine`] and tag documentation comes from injected
//! [`TagProvider`]s, so tests and embedders can supply lightweight
//! implementations.

mod document;
mod formatter;
mod mode;
mod pug;
mod scope;
mod tags;
mod token;

#[cfg(test)]
mod tests;

pub use document::{SourceDocument, TextDocument, file_path_from_uri};
pub use formatter::{FormatRequest, FormatterError, FormattingEngine};
pub use mode::LanguageMode;
pub use pug::{PUG_LANGUAGE_ID, PugMode};
pub use scope::{ScopedValue, scoped_value};
pub use tags::{
    HoverOutcome, StaticTagProvider, TagCollector, TagHoverResolver, TagProvider, TagProviderError,
};
pub use token::{Token, token_at};
