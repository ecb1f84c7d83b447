// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ProcessorRegistry, ProcessorSpec};
use crate::engine::{CompletionSignal, CumulativeMap, TransformResult};
use crate::errors::AssetError;
use crate::observability::messages::pipeline::{
    AssetCommitted, AssetReadFailed, BuildCompleted, BuildStarted, ChainStarted,
    OutputGroupDiscovered,
};
use crate::observability::messages::StructuredLog;
use crate::observability::{Diagnostic, DiagnosticSink};
use crate::traits::{Asset, AssetStore};

/// Counters for one optimize-assets pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Output paths reported by the host.
    pub files_seen: usize,
    /// Paths with at least one applicable processor.
    pub files_processed: usize,
    /// Results written to the asset store, forks included.
    pub commits: usize,
    /// Commits that landed on a path other than the invoked file.
    pub forks: usize,
    /// Results that had none of the accepted shapes.
    pub invalid_results: usize,
}

/// Runs the registered processors over a build's output assets.
///
/// Strictly sequential: files in host order, processors in registration
/// order. Each file gets its own [`CumulativeMap`], shared by every processor
/// of its chain and dropped when the chain ends.
pub struct AssetPipeline {
    registry: Arc<ProcessorRegistry>,
    sink: Arc<dyn DiagnosticSink>,
}

impl AssetPipeline {
    pub fn new(registry: Arc<ProcessorRegistry>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { registry, sink }
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Host hook entry point: processes the build and fires `done` exactly
    /// once, after all processing, with the report or the host's read error.
    pub fn run(&self, store: &mut dyn AssetStore, done: CompletionSignal) {
        let outcome = self.process_build(store);
        done.complete(outcome);
    }

    /// Processes every output file of the build.
    ///
    /// Malformed processor results are reported and skipped. The only error
    /// is the host failing to read an asset it listed, which stops the pass.
    pub fn process_build(&self, store: &mut dyn AssetStore) -> Result<PipelineReport, AssetError> {
        let start_time = Instant::now();
        let groups = store.output_groups();
        let paths = store.output_paths();

        let start_msg = BuildStarted {
            group_count: groups.len(),
            file_count: paths.len(),
            processor_count: self.registry.active_count(),
        };
        let span = start_msg.span("process_build");
        let _guard = span.enter();
        start_msg.log();

        for group in &groups {
            OutputGroupDiscovered {
                name: &group.name,
                files: &group.files,
            }
            .log();
        }

        let mut report = PipelineReport {
            files_seen: paths.len(),
            ..Default::default()
        };

        for path in &paths {
            if let Err(error) = self.process_file(store, path, &mut report) {
                AssetReadFailed { error: &error }.log();
                return Err(error);
            }
        }

        BuildCompleted {
            report: &report,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(report)
    }

    /// Runs the chain for one originally discovered file.
    ///
    /// Files without applicable processors are not read and not written, so
    /// the host's asset stays the very same object. Applicability is decided
    /// once, for `path`; a fork target is not re-tested against the registry.
    pub fn process_file(
        &self,
        store: &mut dyn AssetStore,
        path: &str,
        report: &mut PipelineReport,
    ) -> Result<(), AssetError> {
        let chain = self.registry.applicable_specs_for(path);
        if chain.is_empty() {
            return Ok(());
        }

        let original = store.read(path)?.shared_source();
        ChainStarted {
            path,
            chain_length: chain.len(),
            original_size: original.len(),
        }
        .log();

        report.files_processed += 1;
        let mut cumulative = CumulativeMap::seeded(path, Arc::clone(&original));

        for spec in chain {
            let result = spec.processor().process(&original, &cumulative, path);
            self.apply_result(store, spec, path, result, &mut cumulative, report);
        }

        Ok(())
    }

    fn apply_result(
        &self,
        store: &mut dyn AssetStore,
        spec: &ProcessorSpec,
        path: &str,
        result: TransformResult,
        cumulative: &mut CumulativeMap,
        report: &mut PipelineReport,
    ) {
        let (target, content) = match result.into_commit(path) {
            Ok(commit) => commit,
            Err(value) => {
                report.invalid_results += 1;
                self.sink.emit(Diagnostic::InvalidTransformResult {
                    index: spec.index(),
                    processor: spec.name().to_string(),
                    path: path.to_string(),
                    value,
                });
                return;
            }
        };

        let content: Arc<str> = Arc::from(content);
        AssetCommitted {
            processor: spec.name(),
            source_path: path,
            target_path: &target,
            size: content.len(),
        }
        .log();

        store.write(&target, Asset::new(Arc::clone(&content)));
        cumulative.record(&target, content);

        report.commits += 1;
        if target != path {
            report.forks += 1;
        }
    }
}

impl std::fmt::Debug for AssetPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetPipeline")
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::memory::MemoryAssetStore;
    use crate::config::{ProcessorEntry, SpecEntry};
    use crate::observability::CollectingSink;
    use std::sync::Mutex;

    fn pipeline(entries: Vec<ProcessorEntry>) -> (AssetPipeline, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let registry = ProcessorRegistry::new(entries, sink.as_ref());
        (AssetPipeline::new(Arc::new(registry), sink.clone()), sink)
    }

    #[test]
    fn test_chain_sees_pristine_original_and_cumulative_state() {
        let observed: Arc<Mutex<Vec<(String, Option<String>)>>> = Arc::new(Mutex::new(Vec::new()));
        let first_observed = observed.clone();
        let second_observed = observed.clone();

        let (pipeline, sink) = pipeline(vec![
            ProcessorEntry::function("p1", move |original: &str, cumulative: &CumulativeMap, path: &str| {
                first_observed
                    .lock()
                    .unwrap()
                    .push((original.to_string(), cumulative.get(path).map(str::to_string)));
                TransformResult::content("one")
            }),
            ProcessorEntry::function("p2", move |original: &str, cumulative: &CumulativeMap, path: &str| {
                second_observed
                    .lock()
                    .unwrap()
                    .push((original.to_string(), cumulative.get(path).map(str::to_string)));
                TransformResult::content("two")
            }),
        ]);

        let mut store = MemoryAssetStore::new();
        store.add_group("main", [("f.js", "orig")]);
        let report = pipeline.process_build(&mut store).unwrap();

        assert_eq!(
            *observed.lock().unwrap(),
            vec![
                ("orig".to_string(), Some("orig".to_string())),
                ("orig".to_string(), Some("one".to_string())),
            ]
        );
        assert_eq!(store.source("f.js"), Some("two"));
        assert_eq!(report.commits, 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_file_without_processors_keeps_identity() {
        let (pipeline, _) = pipeline(vec![SpecEntry::new()
            .with_test(|path: &str| path.ends_with(".js"))
            .with_transform("upper", |original: &str, _: &CumulativeMap, _: &str| {
                TransformResult::content(original.to_uppercase())
            })
            .into()]);

        let mut store = MemoryAssetStore::new();
        store.add_group("main", [("main.js", "a"), ("main.css", "b")]);
        let css_before = store.get("main.css").cloned().unwrap();

        let report = pipeline.process_build(&mut store).unwrap();

        assert!(css_before.same_asset(store.get("main.css").unwrap()));
        assert_eq!(store.source("main.js"), Some("A"));
        assert_eq!(store.write_count(), 1);
        assert_eq!(report.files_seen, 2);
        assert_eq!(report.files_processed, 1);
    }

    #[test]
    fn test_identical_content_is_still_rewritten_when_processed() {
        let (pipeline, _) = pipeline(vec![ProcessorEntry::function(
            "same",
            |original: &str, _: &CumulativeMap, _: &str| TransformResult::content(original),
        )]);

        let mut store = MemoryAssetStore::new();
        store.add_group("main", [("main.js", "a")]);
        let before = store.get("main.js").cloned().unwrap();

        pipeline.process_build(&mut store).unwrap();

        assert!(!before.same_asset(store.get("main.js").unwrap()));
        assert_eq!(store.source("main.js"), Some("a"));
    }

    #[test]
    fn test_fork_commits_new_path_and_leaves_source() {
        let (pipeline, _) = pipeline(vec![ProcessorEntry::function(
            "fork",
            |_: &str, _: &CumulativeMap, _: &str| TransformResult::renamed("other.js", "X"),
        )]);

        let mut store = MemoryAssetStore::new();
        store.add_group("main", [("main.js", "M")]);
        let main_before = store.get("main.js").cloned().unwrap();

        let report = pipeline.process_build(&mut store).unwrap();

        assert_eq!(store.source("other.js"), Some("X"));
        assert!(main_before.same_asset(store.get("main.js").unwrap()));
        assert_eq!(report.forks, 1);
        assert_eq!(report.commits, 1);
    }

    #[test]
    fn test_renamed_without_path_targets_invoked_file() {
        let (pipeline, _) = pipeline(vec![ProcessorEntry::function(
            "object_same_file",
            |_: &str, _: &CumulativeMap, _: &str| TransformResult::Renamed {
                path: None,
                content: "same".to_string(),
            },
        )]);

        let mut store = MemoryAssetStore::new();
        store.add_group("main", [("main.js", "M")]);
        let report = pipeline.process_build(&mut store).unwrap();

        assert_eq!(store.source("main.js"), Some("same"));
        assert_eq!(report.forks, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalid_result_is_reported_and_chain_continues() {
        let (pipeline, sink) = pipeline(vec![
            ProcessorEntry::function("broken", |_: &str, _: &CumulativeMap, _: &str| {
                None::<String>.into()
            }),
            ProcessorEntry::function("works", |original: &str, _: &CumulativeMap, _: &str| {
                TransformResult::content(format!("{}!", original))
            }),
        ]);

        let mut store = MemoryAssetStore::new();
        store.add_group("main", [("a.js", "a"), ("b.js", "b")]);
        let report = pipeline.process_build(&mut store).unwrap();

        assert_eq!(store.source("a.js"), Some("a!"));
        assert_eq!(store.source("b.js"), Some("b!"));
        assert_eq!(report.invalid_results, 2);
        assert_eq!(report.commits, 2);

        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0],
            Diagnostic::InvalidTransformResult {
                index: 0,
                processor: "broken".to_string(),
                path: "a.js".to_string(),
                value: "undefined".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_asset_is_a_host_error() {
        let (pipeline, _) = pipeline(vec![ProcessorEntry::function(
            "upper",
            |original: &str, _: &CumulativeMap, _: &str| TransformResult::content(original.to_uppercase()),
        )]);

        let mut store = MemoryAssetStore::new();
        store.add_dangling("main", "ghost.js");

        assert_eq!(
            pipeline.process_build(&mut store),
            Err(AssetError::Missing {
                path: "ghost.js".to_string()
            })
        );
    }

    struct LockedStore;

    impl AssetStore for LockedStore {
        fn output_groups(&self) -> Vec<crate::traits::OutputGroup> {
            vec![crate::traits::OutputGroup::new(
                "main",
                vec!["a.js".to_string(), "b.js".to_string()],
            )]
        }

        fn read(&self, path: &str) -> Result<Asset, AssetError> {
            Err(AssetError::Unreadable {
                path: path.to_string(),
                reason: "locked".to_string(),
            })
        }

        fn write(&mut self, _path: &str, _asset: Asset) {
            panic!("nothing may be written after a failed read");
        }
    }

    #[test]
    fn test_unreadable_asset_stops_the_pass() {
        let (pipeline, sink) = pipeline(vec![ProcessorEntry::function(
            "upper",
            |original: &str, _: &CumulativeMap, _: &str| TransformResult::content(original.to_uppercase()),
        )]);

        let (done, receiver) = CompletionSignal::channel();
        pipeline.run(&mut LockedStore, done);

        let outcome = receiver.blocking_recv().unwrap();
        assert_eq!(
            outcome,
            Err(AssetError::Unreadable {
                path: "a.js".to_string(),
                reason: "locked".to_string(),
            })
        );
        assert_eq!(outcome.unwrap_err().path(), "a.js");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_asset_without_processors_is_never_read() {
        let (pipeline, _) = pipeline(vec![]);

        let mut store = MemoryAssetStore::new();
        store.add_dangling("main", "ghost.js");

        let report = pipeline.process_build(&mut store).unwrap();
        assert_eq!(report.files_seen, 1);
        assert_eq!(report.files_processed, 0);
    }
}
