//! Integration test suite for render contexts
//!
//! These tests drive [`render_context::process::RenderContext`] through its
//! public API only: build a context, mutate it the way a render pipeline
//! would, and check the produced `context` block byte for byte.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **context_file**: section order, omission rules and the extended file
//! - **hooks**: hook ordering, vetoes and state preservation
//! - **identity_config**: identity loading from TOML files

mod context_file;
mod hooks;
mod identity_config;
