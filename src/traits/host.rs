// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The surface this crate consumes from the host build tool.
//!
//! The host owns compilation, asset storage and hook dispatch. All the
//! pipeline needs is a way to enumerate output files, read and replace their
//! content, and a single hook fired once per build when assets are about to
//! be finalized.

use std::sync::Arc;

use crate::engine::CompletionSignal;
use crate::errors::AssetError;

/// Committed content of one output file.
///
/// Cloning is cheap and keeps identity: two clones of the same asset are
/// [`Asset::same_asset`]. A freshly built asset never is, even when the text
/// is identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    source: Arc<str>,
}

impl Asset {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn shared_source(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn same_asset(&self, other: &Asset) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

/// A host-defined grouping of output files (a chunk, an entry point, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGroup {
    pub name: String,
    pub files: Vec<String>,
}

impl OutputGroup {
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// The host's asset store for the current build.
pub trait AssetStore {
    /// Output files of this build, grouped however the host likes. Paths are
    /// relative to the output root.
    fn output_groups(&self) -> Vec<OutputGroup>;

    fn read(&self, path: &str) -> Result<Asset, AssetError>;

    /// Creates or replaces the asset at `path`.
    fn write(&mut self, path: &str, asset: Asset);

    /// Every output path in group order, each path once.
    fn output_paths(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.output_groups()
            .into_iter()
            .flat_map(|group| group.files)
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }
}

/// Handler fired once per build when output assets are ready for optimization.
pub type OptimizeAssetsHandler = Box<dyn FnMut(&mut dyn AssetStore, CompletionSignal) + Send>;

/// Hook registration provided by the host.
pub trait BuildHost {
    fn on_optimize_assets(&mut self, handler: OptimizeAssetsHandler);
}
