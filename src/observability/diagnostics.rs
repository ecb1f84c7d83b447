// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};
use std::sync::Mutex;

use crate::errors::RegistrationError;

/// Advisory, non-fatal report about misuse of the plugin.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// An entry passed at construction could not be registered. Emitted once,
    /// at registration time.
    InvalidRegistration {
        index: usize,
        error: RegistrationError,
    },

    /// A processor returned something that is neither content nor
    /// `{ path, content }`. Emitted once per offending invocation.
    InvalidTransformResult {
        index: usize,
        processor: String,
        path: String,
        value: String,
    },
}

impl Diagnostic {
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::InvalidRegistration { .. } => "invalid_registration",
            Diagnostic::InvalidTransformResult { .. } => "invalid_transform_result",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InvalidRegistration { index, error } => {
                write!(f, "post-processor #{}: {}", index, error)
            }
            Diagnostic::InvalidTransformResult {
                index,
                processor,
                path,
                value,
            } => write!(
                f,
                "post-processor '{}' (#{}) on '{}': expecting modified content or \
                 {{ path, content }} - got neither: {}",
                processor, index, path, value
            ),
        }
    }
}

/// Receiver for [`Diagnostic`]s.
///
/// Any `Fn(&Diagnostic) + Send + Sync` closure is a sink.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn emit(&self, diagnostic: Diagnostic) {
        self(&diagnostic)
    }
}

/// Default sink: one `warn!` event per diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(kind = diagnostic.kind(), "{}", diagnostic);
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|diagnostics| diagnostics.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .map(|diagnostics| diagnostics.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        if let Ok(mut diagnostics) = self.diagnostics.lock() {
            diagnostics.push(diagnostic);
        }
    }
}
