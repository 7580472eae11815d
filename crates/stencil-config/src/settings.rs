//! Top-level settings object handed to embedded-language modes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::FormatSettings;
use crate::tag_providers::TagProviderSettings;

/// Settings captured by a mode through `configure`.
///
/// Consumers replace the whole object on every update; missing sections
/// take their defaults at deserialisation time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModeSettings {
    /// Formatter selection and options.
    pub format: FormatSettings,
    /// Tag documentation provider switches.
    pub tag_providers: TagProviderSettings,
}

impl ModeSettings {
    /// Builds settings from the JSON value supplied by the host.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Malformed`] when the value does not match
    /// the expected shape.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SettingsError> {
        serde_json::from_value(value).map_err(SettingsError::Malformed)
    }
}

/// Errors raised while reading mode settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The supplied value did not deserialise into [`ModeSettings`].
    #[error("malformed mode settings: {0}")]
    Malformed(#[source] serde_json::Error),
}
