// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message implements `Display` for the human-readable line and
//! [`StructuredLog`] for the event with its fields attached.
//!
//! * `registry` - processor registration events
//! * `pipeline` - per-build and per-file processing events

use std::fmt::Display;
use tracing::Span;

pub mod pipeline;
pub mod registry;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog: Display {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
