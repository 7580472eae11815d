//! Shared fixtures and doubles for mode tests.

mod recording_engine;

use std::str::FromStr;
use std::sync::Arc;

use lsp_types::{FormattingOptions, Uri};
use rstest::fixture;

use crate::document::SourceDocument;
use crate::tags::{StaticTagProvider, TagCollector, TagProvider, TagProviderError};

pub use recording_engine::{RecordedRequest, RecordingEngine};

/// Common URI used by mode tests.
#[fixture]
pub fn sample_uri() -> Uri {
    Uri::from_str("file:///workspace/components/Card.vue").expect("invalid test URI")
}

/// Builds a document for the sample URI.
#[must_use]
pub fn document(text: &str) -> SourceDocument {
    SourceDocument::new(sample_uri(), 1, text)
}

/// Editor options used by formatting requests.
#[must_use]
pub fn formatting_options() -> FormattingOptions {
    FormattingOptions {
        tab_size: 2,
        insert_spaces: true,
        ..FormattingOptions::default()
    }
}

/// Providers mirroring a typical enablement: HTML first, vendor second.
#[must_use]
pub fn candidate_providers() -> Vec<Box<dyn TagProvider>> {
    vec![
        Box::new(
            StaticTagProvider::new("html5")
                .with_tag("div", "html5 div")
                .with_tag("foo-bar", "html5 foo-bar"),
        ),
        Box::new(
            StaticTagProvider::new("vendor")
                .with_tag("div", "vendor div")
                .with_tag("v-card", "vendor card"),
        ),
    ]
}

/// Provider that always fails after pushing nothing.
#[derive(Debug, Default)]
pub struct FailingTagProvider;

impl TagProvider for FailingTagProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn collect_tags(&self, _collector: &mut TagCollector<'_>) -> Result<(), TagProviderError> {
        Err(TagProviderError::new("tag data unavailable"))
    }
}

/// Shares an engine with the mode while keeping a handle for assertions.
#[must_use]
pub fn shared(engine: &RecordingEngine) -> Arc<dyn crate::formatter::FormattingEngine> {
    Arc::new(engine.clone())
}
