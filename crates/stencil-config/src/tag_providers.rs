//! Enablement switches for tag documentation providers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_TAG_PROVIDER;

/// Provider name to enabled flag.
///
/// Names are stored and looked up lower-cased. Providers without an entry
/// are disabled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct TagProviderSettings {
    providers: BTreeMap<String, bool>,
}

impl TagProviderSettings {
    /// Builds settings with every provider disabled.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            providers: BTreeMap::new(),
        }
    }

    /// Enables or disables a provider.
    pub fn set_enabled(&mut self, provider: &str, enabled: bool) {
        self.providers.insert(normalise_key(provider), enabled);
    }

    /// Whether the named provider is enabled.
    #[must_use]
    pub fn is_enabled(&self, provider: &str) -> bool {
        self.providers
            .get(&normalise_key(provider))
            .copied()
            .unwrap_or(false)
    }
}

impl Default for TagProviderSettings {
    fn default() -> Self {
        let mut settings = Self::empty();
        settings.set_enabled(DEFAULT_TAG_PROVIDER, true);
        settings
    }
}

impl From<BTreeMap<String, bool>> for TagProviderSettings {
    fn from(raw: BTreeMap<String, bool>) -> Self {
        let providers = raw
            .into_iter()
            .map(|(name, enabled)| (normalise_key(&name), enabled))
            .collect();
        Self { providers }
    }
}

impl From<TagProviderSettings> for BTreeMap<String, bool> {
    fn from(settings: TagProviderSettings) -> Self {
        settings.providers
    }
}

fn normalise_key(key: &str) -> String {
    key.trim().to_lowercase()
}
