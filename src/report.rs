//! Failure reporting for non-fatal connection teardown errors

use crate::errors::ConnectionError;

/// Sink for teardown failures the pool swallows.
///
/// Tearing down an expired or drained connection can fail (the peer may
/// have closed the socket first), but such failures must never reach the
/// caller that triggered the scan. The pool hands them here instead,
/// together with a context message carrying the endpoint's diagnostic
/// rendering.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &str, error: &ConnectionError);
}

/// Default reporter: emits a `tracing` warning per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, context: &str, error: &ConnectionError) {
        tracing::warn!(%error, "{context}");
    }
}
