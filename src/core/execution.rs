//! Execution context carried alongside a render.
//!
//! The render context itself never blocks or waits. It stores an
//! [`ExecutionContext`] so that hook implementations doing I/O can observe
//! cancellation and deadlines set by whoever drives the render.
//!
//! # Example
//!
//! ```rust,no_run
//! use render_context::core::ExecutionContext;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let ctx = ExecutionContext::background().with_timeout(Duration::from_secs(5));
//! let child = ctx.child();
//!
//! ctx.cancel();
//! child.cancelled().await;
//! assert!(child.is_done());
//! # }
//! ```

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline carrier for one render.
///
/// Cloning shares the cancellation state; [`ExecutionContext::child`]
/// derives a context that is cancelled with its parent but can also be
/// cancelled on its own.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl ExecutionContext {
    /// A context that is never cancelled and has no deadline unless a
    /// caller explicitly cancels it.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Attach a deadline. An existing earlier deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// Attach a deadline `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a child context sharing the parent's deadline.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// True once the context is cancelled or past its deadline.
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }

    /// Wait until the context is cancelled or its deadline passes.
    pub async fn cancelled(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    () = self.token.cancelled() => {}
                    () = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }
}
