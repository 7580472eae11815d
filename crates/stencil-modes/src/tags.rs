//! Tag documentation providers and hover resolution.

use std::error::Error;
use std::fmt;
use std::ops::ControlFlow;

use lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Range};
use stencil_config::TagProviderSettings;
use thiserror::Error;
use tracing::{debug, warn};

/// Callback receiving `(tag, documentation)` pairs from a provider.
///
/// Returning [`ControlFlow::Break`] asks the provider to stop pushing.
pub type TagCollector<'a> = dyn FnMut(&str, &str) -> ControlFlow<()> + 'a;

/// Source of tag documentation.
pub trait TagProvider: Send + Sync {
    /// Name used to enable or disable the provider in settings.
    fn name(&self) -> &str;

    /// Pushes the provider's tags and their Markdown documentation.
    fn collect_tags(&self, collector: &mut TagCollector<'_>) -> Result<(), TagProviderError>;
}

impl fmt::Debug for dyn TagProvider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "TagProvider({})", self.name())
    }
}

/// Errors reported by tag providers while pushing their data.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TagProviderError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl TagProviderError {
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

/// Provider backed by an in-memory tag list.
#[derive(Debug, Clone, Default)]
pub struct StaticTagProvider {
    name: String,
    tags: Vec<(String, String)>,
}

impl StaticTagProvider {
    /// Builds an empty provider.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }

    /// Adds a tag with its Markdown documentation.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>, documentation: impl Into<String>) -> Self {
        self.tags.push((tag.into(), documentation.into()));
        self
    }
}

impl TagProvider for StaticTagProvider {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn collect_tags(&self, collector: &mut TagCollector<'_>) -> Result<(), TagProviderError> {
        for (tag, documentation) in &self.tags {
            if collector(tag, documentation).is_break() {
                break;
            }
        }
        Ok(())
    }
}

/// Result of a hover lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverOutcome {
    /// Documentation anchored to the hovered range.
    Documented(Hover),
    /// Nothing is known about the hovered text.
    NoInformation,
}

impl HoverOutcome {
    /// Returns the hover when documentation was found.
    #[must_use]
    pub const fn hover(&self) -> Option<&Hover> {
        match self {
            Self::Documented(hover) => Some(hover),
            Self::NoInformation => None,
        }
    }
}

/// Ordered list of tag providers; earlier providers take precedence.
#[derive(Debug, Default)]
pub struct TagHoverResolver {
    providers: Vec<Box<dyn TagProvider>>,
}

impl TagHoverResolver {
    /// Builds a resolver consulting `providers` in order.
    #[must_use]
    pub fn new(providers: Vec<Box<dyn TagProvider>>) -> Self {
        Self { providers }
    }

    /// Keeps the candidates enabled by `settings`, preserving their order.
    #[must_use]
    pub fn from_settings(
        candidates: Vec<Box<dyn TagProvider>>,
        settings: &TagProviderSettings,
    ) -> Self {
        let providers = candidates
            .into_iter()
            .filter(|provider| settings.is_enabled(provider.name()))
            .collect();
        Self { providers }
    }

    /// Names of the consulted providers in priority order.
    pub fn provider_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.providers.iter().map(|provider| provider.name())
    }

    /// Looks up documentation for `tag`, anchoring any hover to `range`.
    ///
    /// Tag names compare case-insensitively. The first provider declaring
    /// the tag wins. A provider that fails is skipped, although a match it
    /// pushed before failing is still used.
    #[must_use]
    pub fn resolve(&self, tag: &str, range: Range) -> HoverOutcome {
        let query = tag.to_lowercase();
        for provider in &self.providers {
            let mut documentation: Option<String> = None;
            let collected = provider.collect_tags(&mut |name, docs| {
                if !name.chars().flat_map(char::to_lowercase).eq(query.chars()) {
                    return ControlFlow::Continue(());
                }
                documentation = Some(docs.to_owned());
                ControlFlow::Break(())
            });

            if let Err(error) = collected {
                warn!(
                    provider = provider.name(),
                    error = %error,
                    "tag provider failed while collecting tags"
                );
            }

            if let Some(value) = documentation {
                debug!(provider = provider.name(), tag = query.as_str(), "tag documented");
                return HoverOutcome::Documented(Hover {
                    contents: HoverContents::Markup(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value,
                    }),
                    range: Some(range),
                });
            }
        }

        debug!(tag = query.as_str(), "no provider documents tag");
        HoverOutcome::NoInformation
    }
}
