// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor registration.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A processor entry was accepted into the registry.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ProcessorRegistered<'a> {
    pub index: usize,
    pub processor: &'a str,
    pub scoped: bool,
}

impl Display for ProcessorRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let scope = if self.scoped { "path-scoped" } else { "all files" };
        write!(
            f,
            "Registered post-processor #{} '{}' ({})",
            self.index, self.processor, scope
        )
    }
}

impl StructuredLog for ProcessorRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            index = self.index,
            processor = self.processor,
            scoped = self.scoped,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_registered",
            span_name = name,
            index = self.index,
            processor = self.processor,
        )
    }
}

/// Registry construction finished.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use post_production::observability::messages::registry::RegistryBuilt;
///
/// let msg = RegistryBuilt { active: 3, inert: 1 };
/// assert_eq!(msg.to_string(), "Post-processor registry built: 3 active, 1 ignored");
/// ```
pub struct RegistryBuilt {
    pub active: usize,
    pub inert: usize,
}

impl Display for RegistryBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Post-processor registry built: {} active, {} ignored",
            self.active, self.inert
        )
    }
}

impl StructuredLog for RegistryBuilt {
    fn log(&self) {
        tracing::info!(active = self.active, inert = self.inert, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "registry_built",
            span_name = name,
            active = self.active,
            inert = self.inert,
        )
    }
}
