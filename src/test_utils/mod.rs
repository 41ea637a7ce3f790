//! Test utilities for render contexts
//!
//! Helpers shared by unit and integration tests: one-time logging setup and
//! fixtures for identities, instances and hooks.
//!
//! # Example
//!
//! ```rust,no_run
//! use render_context::process::RenderContext;
//! use render_context::test_utils::{HookRecorder, fixture_data};
//!
//! let recorder = HookRecorder::new();
//! let data = fixture_data().with_base_hook(recorder.base_hook("audit"));
//! let ctx = RenderContext::new(data);
//! ```

pub mod fixtures;

pub use fixtures::{
    HookRecorder, fixture_data, fixture_identity, rejecting_auxiliary_hook, rejecting_base_hook,
    text_instance,
};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Installs the tracing subscriber only once regardless of how many times it
/// is called. Uses the provided level, or `RUST_LOG` when no level is given;
/// with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=render_context=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
