//! Behavioural tests for cancellation views.
