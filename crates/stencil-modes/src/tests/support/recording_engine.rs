//! Formatting engine double that records every request it receives.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use lsp_types::{Range, TextEdit};

use crate::formatter::{FormatRequest, FormatterError, FormattingEngine};

/// Owned copy of a [`FormatRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Text handed to the engine.
    pub source: String,
    /// Document path, when the URI had one.
    pub file_path: Option<PathBuf>,
    /// Range of the source.
    pub range: Range,
    /// Selected formatter.
    pub formatter: String,
    /// Parser name.
    pub parser: String,
    /// Initial indentation flag.
    pub initial_indent: bool,
    /// Tab size from the captured settings.
    pub settings_tab_size: u32,
}

#[derive(Default)]
struct EngineState {
    requests: Vec<RecordedRequest>,
    failure: Option<String>,
    edits: Vec<TextEdit>,
}

/// Cloneable engine whose clones share recorded state.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    shared: Arc<Mutex<EngineState>>,
}

impl RecordingEngine {
    /// Engine replying with `edits` to every request.
    #[must_use]
    pub fn replying(edits: Vec<TextEdit>) -> Self {
        let engine = Self::default();
        engine.with_state(|state| state.edits = edits);
        engine
    }

    /// Engine failing every request with `message`.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        let engine = Self::default();
        engine.with_state(|state| state.failure = Some(message.to_owned()));
        engine
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.with_state(|state| state.requests.clone())
    }

    fn with_state<R>(&self, action: impl FnOnce(&mut EngineState) -> R) -> R {
        let mut guard = self.shared.lock().expect("engine state poisoned");
        action(&mut guard)
    }
}

impl FormattingEngine for RecordingEngine {
    fn format(&self, request: &FormatRequest<'_>) -> Result<Vec<TextEdit>, FormatterError> {
        self.with_state(|state| {
            state.requests.push(RecordedRequest {
                source: request.source.to_owned(),
                file_path: request.file_path.map(PathBuf::from),
                range: request.range,
                formatter: request.formatter.to_owned(),
                parser: request.parser.to_owned(),
                initial_indent: request.initial_indent,
                settings_tab_size: request.settings.options.tab_size,
            });
            match &state.failure {
                Some(message) => Err(FormatterError::new(message.clone())),
                None => Ok(state.edits.clone()),
            }
        })
    }
}
