//! Failing view consumed by the analysis engine.

use thiserror::Error;

use crate::source::CancellationToken;

/// Signal the analysis engine unwinds on when a request is cancelled.
///
/// Engines with their own error type convert it through `From` so a
/// cancellation check propagates with `?`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("operation was cancelled")]
pub struct OperationCancelled;

/// Cancellation convention expected by the analysis engine.
pub trait AnalysisCancellation {
    /// Whether cancellation has been requested.
    fn is_cancellation_requested(&self) -> bool;

    /// Fails with [`OperationCancelled`] once cancellation was requested.
    ///
    /// # Errors
    ///
    /// Returns [`OperationCancelled`] if and only if
    /// [`AnalysisCancellation::is_cancellation_requested`] reports `true`.
    fn throw_if_cancellation_requested(&self) -> Result<(), OperationCancelled> {
        if self.is_cancellation_requested() {
            return Err(OperationCancelled);
        }
        Ok(())
    }
}

/// Analysis-engine view of a [`CancellationToken`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisToken {
    token: CancellationToken,
}

impl AnalysisToken {
    pub(crate) const fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Polling view sharing this token's flag.
    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl AnalysisCancellation for AnalysisToken {
    fn is_cancellation_requested(&self) -> bool {
        self.token.is_cancellation_requested()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::source::CancellationTokenSource;

    #[derive(Debug, PartialEq, Eq)]
    enum EngineError {
        Cancelled,
    }

    impl From<OperationCancelled> for EngineError {
        fn from(_: OperationCancelled) -> Self {
            Self::Cancelled
        }
    }

    fn check_twice(token: &AnalysisToken) -> Result<u8, EngineError> {
        token.throw_if_cancellation_requested()?;
        token.throw_if_cancellation_requested()?;
        Ok(2)
    }

    #[rstest]
    fn check_passes_until_cancelled() {
        let source = CancellationTokenSource::new();
        let analysis = source.token().analysis_token();

        assert_eq!(analysis.throw_if_cancellation_requested(), Ok(()));
        source.cancel();
        assert_eq!(
            analysis.throw_if_cancellation_requested(),
            Err(OperationCancelled)
        );
    }

    #[rstest]
    fn engines_unwind_through_their_own_error() {
        let source = CancellationTokenSource::new();
        let analysis = source.token().analysis_token();

        assert_eq!(check_twice(&analysis), Ok(2));
        source.cancel();
        assert_eq!(check_twice(&analysis), Err(EngineError::Cancelled));
    }

    #[rstest]
    fn views_share_one_flag() {
        let source = CancellationTokenSource::new();
        let token = source.token();
        let analysis = token.analysis_token();

        source.cancel();

        assert!(analysis.token().is_cancellation_requested());
        assert!(AnalysisCancellation::is_cancellation_requested(&analysis));
        assert!(token.is_cancellation_requested());
    }

    #[rstest]
    fn default_view_never_fails() {
        assert_eq!(
            AnalysisToken::default().throw_if_cancellation_requested(),
            Ok(())
        );
    }

    #[rstest]
    fn signal_reads_as_cancellation() {
        assert_eq!(OperationCancelled.to_string(), "operation was cancelled");
    }
}
