//! Awaitable cancellation check for cooperative yield points.

use crate::source::CancellationToken;

/// Resolves to the token's cancellation state after one scheduler turn.
///
/// Without a token the answer is `false` and no yield happens. With one,
/// other pending tasks get to run once before the flag is read, so the
/// result reflects any cancellation they request.
pub async fn is_cancellation_requested(token: Option<&CancellationToken>) -> bool {
    let Some(token) = token else {
        return false;
    };
    tokio::task::yield_now().await;
    token.is_cancellation_requested()
}
