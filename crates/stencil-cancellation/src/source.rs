//! Cancellation state and its polling view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

use crate::analysis::AnalysisToken;

/// Owner of one request's cancellation flag.
///
/// The flag starts cleared and can only ever be set.
#[derive(Debug, Default)]
pub struct CancellationTokenSource {
    requested: Arc<AtomicBool>,
}

impl CancellationTokenSource {
    /// Builds a source whose flag is cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a token observing this source.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            requested: Some(Arc::clone(&self.requested)),
        }
    }

    /// Requests cancellation. Later calls have no further effect.
    pub fn cancel(&self) {
        if !self.requested.swap(true, Ordering::AcqRel) {
            trace!("cancellation requested");
        }
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancellation_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

/// Polling view over a source's flag.
///
/// Clones observe the same flag. A token built with
/// [`CancellationToken::none`] is never cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    requested: Option<Arc<AtomicBool>>,
}

impl CancellationToken {
    /// Token that can never be cancelled.
    #[must_use]
    pub const fn none() -> Self {
        Self { requested: None }
    }

    /// Whether cancellation has been requested. Never fails.
    #[must_use]
    pub fn is_cancellation_requested(&self) -> bool {
        self.requested
            .as_ref()
            .is_some_and(|requested| requested.load(Ordering::Acquire))
    }

    /// Failing view over the same flag, for the analysis engine.
    #[must_use]
    pub fn analysis_token(&self) -> AnalysisToken {
        AnalysisToken::new(self.clone())
    }
}
