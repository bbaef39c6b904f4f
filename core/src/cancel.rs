//! Cooperative cancellation handle threaded into actions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cloneable cancellation token.
///
/// The engine passes the token through to runnable actions untouched:
/// it never cancels, never times out, and never inspects the token
/// itself. Long-running actions poll [`is_cancelled`] to observe
/// cancellation requested by the caller (a signal handler, a test
/// harness, an external timeout).
///
/// [`is_cancelled`]: CancelToken::is_cancelled
///
/// # Examples
///
/// ```
/// use cmdtree_core::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. All clones observe it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
