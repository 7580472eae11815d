//! Settings consumed by the embedded-language modes.
//!
//! The host owns configuration loading and merging. This crate only models
//! the shape of what the host hands over: formatter selection per embedded
//! language and tag provider enablement. Every settings object is replaced
//! wholesale by its consumer; nothing here merges partial updates.

mod defaults;
mod format;
mod settings;
mod tag_providers;

pub use defaults::{DEFAULT_FORMATTER, DEFAULT_TAB_SIZE, DEFAULT_TAG_PROVIDER, NO_FORMATTER};
pub use format::{FormatSettings, FormatterChoice, IndentOptions};
pub use settings::{ModeSettings, SettingsError};
pub use tag_providers::TagProviderSettings;
