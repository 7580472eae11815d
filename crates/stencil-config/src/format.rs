//! Formatter selection and formatting options.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_FORMATTER, NO_FORMATTER, default_tab_size};

/// Formatter selected for an embedded language.
///
/// Serialised as a bare string: the literal `"none"` disables formatting,
/// any other value names the formatter to run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum FormatterChoice {
    /// Formatting is switched off for the language.
    Disabled,
    /// Formatting is delegated to the named formatter.
    Named(String),
}

impl FormatterChoice {
    /// Returns the choice used when settings carry no entry.
    #[must_use]
    pub fn default_formatter() -> Self {
        Self::Named(DEFAULT_FORMATTER.to_owned())
    }

    /// Returns the formatter name, or `None` when formatting is disabled.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Named(name) => Some(name.as_str()),
        }
    }
}

impl Default for FormatterChoice {
    fn default() -> Self {
        Self::default_formatter()
    }
}

impl From<String> for FormatterChoice {
    fn from(value: String) -> Self {
        if value == NO_FORMATTER {
            Self::Disabled
        } else {
            Self::Named(value)
        }
    }
}

impl From<FormatterChoice> for String {
    fn from(choice: FormatterChoice) -> Self {
        match choice {
            FormatterChoice::Disabled => NO_FORMATTER.to_owned(),
            FormatterChoice::Named(name) => name,
        }
    }
}

impl fmt::Display for FormatterChoice {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => formatter.write_str(NO_FORMATTER),
            Self::Named(name) => formatter.write_str(name),
        }
    }
}

/// Indentation preferences forwarded to formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndentOptions {
    /// Width of one indentation level.
    pub tab_size: u32,
    /// Whether indentation uses tab characters.
    pub use_tabs: bool,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            use_tabs: false,
        }
    }
}

/// Formatting section of the mode settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatSettings {
    /// Formatter chosen per embedded language identifier.
    pub default_formatter: BTreeMap<String, FormatterChoice>,
    /// Opaque options keyed by formatter name.
    pub default_formatter_options: BTreeMap<String, serde_json::Value>,
    /// Whether script blocks start with one level of indentation.
    pub script_initial_indent: bool,
    /// Whether style blocks start with one level of indentation.
    pub style_initial_indent: bool,
    /// Indentation preferences.
    pub options: IndentOptions,
}

impl FormatSettings {
    /// Returns the formatter configured for `language`.
    ///
    /// Languages without an entry fall back to [`DEFAULT_FORMATTER`].
    #[must_use]
    pub fn formatter_for(&self, language: &str) -> FormatterChoice {
        self.default_formatter
            .get(language)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the opaque options registered for `formatter`, when present.
    #[must_use]
    pub fn formatter_options(&self, formatter: &str) -> Option<&serde_json::Value> {
        self.default_formatter_options.get(formatter)
    }

    /// Stores a formatter choice for `language`.
    pub fn set_formatter(&mut self, language: impl Into<String>, choice: FormatterChoice) {
        self.default_formatter.insert(language.into(), choice);
    }
}
