//! One cancellation flag, several ways to observe it.
//!
//! Request handling polls a boolean ("has cancellation been requested?")
//! while the inline analysis engine expects a check that fails with a typed
//! signal it can unwind on. Both conventions read the same
//! [`CancellationTokenSource`] state: a [`CancellationToken`] is the
//! polling view and its [`AnalysisToken`] is the failing view. The flag is
//! monotonic, so once one view reports cancellation every view does, for
//! the rest of the token's life.
//!
//! [`is_cancellation_requested`] adds an awaitable view for cooperative
//! yield points: it gives other pending work one scheduler turn before
//! reading the flag.

mod analysis;
mod predicate;
mod source;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisCancellation, AnalysisToken, OperationCancelled};
pub use predicate::is_cancellation_requested;
pub use source::{CancellationToken, CancellationTokenSource};
