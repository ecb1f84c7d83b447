// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::{PluginConfig, ProcessorEntry, ProcessorRegistry};
use crate::engine::{AssetPipeline, CompletionSignal};
use crate::observability::{DiagnosticSink, TracingSink};
use crate::traits::{AssetStore, BuildHost};

/// Build-tool plugin that post-processes output assets.
///
/// Processors are registered once, at construction, and never change for
/// the life of the plugin. [`PostProcessingPlugin::apply`] hooks the
/// pipeline into a host's optimize-assets phase.
///
/// # Example
/// ```
/// use post_production::backends::memory::{MemoryAssetStore, MemoryHost};
/// use post_production::engine::{CumulativeMap, TransformResult};
/// use post_production::{PostProcessingPlugin, ProcessorEntry};
///
/// let plugin = PostProcessingPlugin::new(vec![ProcessorEntry::function(
///     "upper",
///     |original: &str, _: &CumulativeMap, _: &str| TransformResult::content(original.to_uppercase()),
/// )]);
///
/// let mut host = MemoryHost::new();
/// plugin.apply(&mut host);
///
/// let mut store = MemoryAssetStore::new();
/// store.add_group("main", [("a.js", "var a=1;")]);
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let outcomes = runtime.block_on(host.build(&mut store));
/// assert_eq!(outcomes.len(), 1);
/// assert_eq!(store.source("a.js"), Some("VAR A=1;"));
/// ```
pub struct PostProcessingPlugin {
    pipeline: Arc<AssetPipeline>,
    applied: AtomicBool,
}

impl PostProcessingPlugin {
    /// Registers `entries`, reporting unusable ones through `tracing`.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ProcessorEntry>,
    {
        Self::with_sink(entries, Arc::new(TracingSink))
    }

    /// Registers `entries`, sending every diagnostic (registration time and
    /// build time) to `sink`.
    pub fn with_sink<I>(entries: I, sink: Arc<dyn DiagnosticSink>) -> Self
    where
        I: IntoIterator<Item = ProcessorEntry>,
    {
        let registry = ProcessorRegistry::new(entries, sink.as_ref());
        Self {
            pipeline: Arc::new(AssetPipeline::new(Arc::new(registry), sink)),
            applied: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &PluginConfig) -> Self {
        Self::new(config.entries())
    }

    pub fn from_config_with_sink(config: &PluginConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_sink(config.entries(), sink)
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        self.pipeline.registry()
    }

    pub fn pipeline(&self) -> &AssetPipeline {
        &self.pipeline
    }

    /// Registers the optimize-assets handler with `host`.
    ///
    /// Only the first call on a plugin instance registers anything; later
    /// calls return `false`.
    pub fn apply(&self, host: &mut dyn BuildHost) -> bool {
        if self.applied.swap(true, Ordering::SeqCst) {
            tracing::debug!("post-processing plugin already applied, skipping");
            return false;
        }

        let pipeline = Arc::clone(&self.pipeline);
        host.on_optimize_assets(Box::new(
            move |store: &mut dyn AssetStore, done: CompletionSignal| pipeline.run(store, done),
        ));
        true
    }
}

impl std::fmt::Debug for PostProcessingPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostProcessingPlugin")
            .field("pipeline", &self.pipeline)
            .field("applied", &self.applied.load(Ordering::SeqCst))
            .finish()
    }
}
