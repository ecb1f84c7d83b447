// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability: structured logging and user-facing diagnostics.
//!
//! Two channels exist side by side:
//!
//! * `messages` - operational events (registry built, build started, asset
//!   committed, ...) emitted through `tracing`. Each message is a struct with
//!   a `Display` impl and a [`messages::StructuredLog`] impl so the text and
//!   the structured fields stay in one place.
//! * `diagnostics` - advisory reports about misuse (an entry that is not a
//!   processor, a result of the wrong shape). These go to an injectable
//!   [`DiagnosticSink`] so callers and tests can capture them. The default
//!   sink forwards to `tracing` at `warn` level.
//!
//! # Usage
//!
//! ```rust
//! use post_production::observability::messages::pipeline::BuildStarted;
//! use post_production::observability::messages::StructuredLog;
//!
//! BuildStarted {
//!     group_count: 2,
//!     file_count: 5,
//!     processor_count: 3,
//! }
//! .log();
//! ```

pub mod diagnostics;
pub mod messages;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber writing to standard error.
///
/// `RUST_LOG` wins over `default_level` when set. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
