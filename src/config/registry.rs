// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::entry::{ProcessorEntry, ProcessorSpec};
use crate::errors::RegistrationError;
use crate::observability::messages::registry::{ProcessorRegistered, RegistryBuilt};
use crate::observability::messages::StructuredLog;
use crate::observability::{Diagnostic, DiagnosticSink};

/// One slot of the registry, kept in registration order.
#[derive(Debug, Clone)]
pub enum RegisteredProcessor {
    Active(ProcessorSpec),
    /// The entry at `index` could not be registered. It never applies to
    /// any file; its diagnostic was emitted when the registry was built.
    Inert {
        index: usize,
        error: RegistrationError,
    },
}

/// Ordered, immutable set of processors for one plugin instance.
#[derive(Debug, Clone, Default)]
pub struct ProcessorRegistry {
    processors: Vec<RegisteredProcessor>,
}

impl ProcessorRegistry {
    /// Registers every entry, in order.
    ///
    /// Entries that fail validation become [`RegisteredProcessor::Inert`] and
    /// produce exactly one [`Diagnostic::InvalidRegistration`] on `sink`.
    /// Never fails.
    pub fn new<I>(entries: I, sink: &dyn DiagnosticSink) -> Self
    where
        I: IntoIterator<Item = ProcessorEntry>,
    {
        let processors: Vec<RegisteredProcessor> = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match ProcessorSpec::parse(index, entry) {
                Ok(spec) => {
                    ProcessorRegistered {
                        index,
                        processor: spec.name(),
                        scoped: spec.is_scoped(),
                    }
                    .log();
                    RegisteredProcessor::Active(spec)
                }
                Err(error) => {
                    sink.emit(Diagnostic::InvalidRegistration {
                        index,
                        error: error.clone(),
                    });
                    RegisteredProcessor::Inert { index, error }
                }
            })
            .collect();

        let registry = Self { processors };
        RegistryBuilt {
            active: registry.active_count(),
            inert: registry.inert_count(),
        }
        .log();

        registry
    }

    /// Active specs whose path test accepts `path`, in registration order.
    /// This is the chain for that file.
    pub fn applicable_specs_for(&self, path: &str) -> Vec<&ProcessorSpec> {
        self.active().filter(|spec| spec.applies_to(path)).collect()
    }

    pub fn active(&self) -> impl Iterator<Item = &ProcessorSpec> {
        self.processors.iter().filter_map(|processor| match processor {
            RegisteredProcessor::Active(spec) => Some(spec),
            RegisteredProcessor::Inert { .. } => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredProcessor> {
        self.processors.iter()
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn inert_count(&self) -> usize {
        self.processors.len() - self.active_count()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// True when nothing at all was registered.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}
