// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::engine::{BuildOutcome, CompletionSignal};
use crate::errors::AssetError;
use crate::traits::{Asset, AssetStore, BuildHost, OptimizeAssetsHandler, OutputGroup};

/// Asset store backed by a `HashMap`.
///
/// Files added through [`MemoryAssetStore::add_group`] are build outputs.
/// Files created later through `write` (e.g. forks) exist in the store but
/// belong to no group, as with a real host's chunk file lists.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Asset>,
    groups: Vec<OutputGroup>,
    writes: usize,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group<I, P, C>(&mut self, name: impl Into<String>, files: I)
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<Arc<str>>,
    {
        let mut paths = Vec::new();
        for (path, content) in files {
            let path = path.into();
            self.assets.insert(path.clone(), Asset::new(content));
            paths.push(path);
        }
        self.groups.push(OutputGroup::new(name, paths));
    }

    /// Lists `path` in a group without storing any content for it.
    pub fn add_dangling(&mut self, group: impl Into<String>, path: impl Into<String>) {
        self.groups.push(OutputGroup::new(group, vec![path.into()]));
    }

    pub fn get(&self, path: &str) -> Option<&Asset> {
        self.assets.get(path)
    }

    pub fn source(&self, path: &str) -> Option<&str> {
        self.assets.get(path).map(Asset::source)
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetStore for MemoryAssetStore {
    fn output_groups(&self) -> Vec<OutputGroup> {
        self.groups.clone()
    }

    fn read(&self, path: &str) -> Result<Asset, AssetError> {
        self.assets.get(path).cloned().ok_or_else(|| AssetError::Missing {
            path: path.to_string(),
        })
    }

    fn write(&mut self, path: &str, asset: Asset) {
        self.writes += 1;
        self.assets.insert(path.to_string(), asset);
    }
}

/// Minimal host: keeps registered handlers and fires each once per build.
#[derive(Default)]
pub struct MemoryHost {
    handlers: Vec<OptimizeAssetsHandler>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Runs the optimize-assets phase once over `store`.
    ///
    /// Handlers run in registration order; each one's completion signal is
    /// awaited before the next starts. Returns one outcome per handler that
    /// signalled; a handler that dropped its signal contributes nothing.
    pub async fn build(&mut self, store: &mut dyn AssetStore) -> Vec<BuildOutcome> {
        let mut outcomes = Vec::with_capacity(self.handlers.len());

        for handler in self.handlers.iter_mut() {
            let (signal, done) = CompletionSignal::channel();
            handler(&mut *store, signal);

            match done.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(_) => tracing::warn!("optimize-assets handler finished without signalling"),
            }
        }

        outcomes
    }
}

impl BuildHost for MemoryHost {
    fn on_optimize_assets(&mut self, handler: OptimizeAssetsHandler) {
        self.handlers.push(handler);
    }
}

impl std::fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHost")
            .field("handler_count", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PipelineReport;

    #[test]
    fn test_store_read_write() {
        let mut store = MemoryAssetStore::new();
        store.add_group("main", [("main.js", "var a=1;")]);

        let before = store.read("main.js").unwrap();
        assert_eq!(before.source(), "var a=1;");
        assert!(before.same_asset(store.get("main.js").unwrap()));

        store.write("main.js", Asset::new("var b=2;"));
        store.write("extra.js", Asset::new("x"));

        assert_eq!(store.source("main.js"), Some("var b=2;"));
        assert_eq!(store.source("extra.js"), Some("x"));
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.output_paths(), vec!["main.js"]);
    }

    #[test]
    fn test_dangling_path_is_missing() {
        let mut store = MemoryAssetStore::new();
        store.add_dangling("main", "ghost.js");

        assert_eq!(store.output_paths(), vec!["ghost.js"]);
        assert_eq!(
            store.read("ghost.js"),
            Err(AssetError::Missing {
                path: "ghost.js".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_host_fires_each_handler_once() {
        let mut host = MemoryHost::new();
        host.on_optimize_assets(Box::new(|_store: &mut dyn AssetStore, done: CompletionSignal| {
            done.complete(Ok(PipelineReport::default()));
        }));
        host.on_optimize_assets(Box::new(|_store: &mut dyn AssetStore, done: CompletionSignal| {
            drop(done)
        }));

        let mut store = MemoryAssetStore::new();
        let outcomes = host.build(&mut store).await;

        assert_eq!(host.handler_count(), 2);
        assert_eq!(outcomes, vec![Ok(PipelineReport::default())]);
    }
}
