// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the asset processing pipeline.
//!
//! This module contains message types for logging events related to:
//! * Build lifecycle (start, completion, host read failure)
//! * Output group discovery
//! * Per-file chains and commits

use crate::engine::PipelineReport;
use crate::errors::AssetError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Optimize-assets phase started for one build.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BuildStarted {
    pub group_count: usize,
    pub file_count: usize,
    pub processor_count: usize,
}

impl Display for BuildStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Post-processing {} output file(s) in {} group(s) with {} processor(s)",
            self.file_count, self.group_count, self.processor_count
        )
    }
}

impl StructuredLog for BuildStarted {
    fn log(&self) {
        tracing::info!(
            group_count = self.group_count,
            file_count = self.file_count,
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "post_processing_build",
            span_name = name,
            group_count = self.group_count,
            file_count = self.file_count,
            processor_count = self.processor_count,
        )
    }
}

/// An output group reported by the host.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct OutputGroupDiscovered<'a> {
    pub name: &'a str,
    pub files: &'a [String],
}

impl Display for OutputGroupDiscovered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Output group '{}': {} file(s): {}",
            self.name,
            self.files.len(),
            self.files.join(", ")
        )
    }
}

impl StructuredLog for OutputGroupDiscovered<'_> {
    fn log(&self) {
        tracing::debug!(group = self.name, file_count = self.files.len(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "output_group",
            span_name = name,
            group = self.name,
            file_count = self.files.len(),
        )
    }
}

/// A file has at least one applicable processor and its chain is starting.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ChainStarted<'a> {
    pub path: &'a str,
    pub chain_length: usize,
    pub original_size: usize,
}

impl Display for ChainStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running {} post-processor(s) on '{}' ({} bytes)",
            self.chain_length, self.path, self.original_size
        )
    }
}

impl StructuredLog for ChainStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            path = self.path,
            chain_length = self.chain_length,
            original_size = self.original_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_chain",
            span_name = name,
            path = self.path,
            chain_length = self.chain_length,
        )
    }
}

/// A processor's result was committed to the asset store.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct AssetCommitted<'a> {
    pub processor: &'a str,
    pub source_path: &'a str,
    pub target_path: &'a str,
    pub size: usize,
}

impl Display for AssetCommitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.source_path == self.target_path {
            write!(
                f,
                "Processor '{}' rewrote '{}' ({} bytes)",
                self.processor, self.target_path, self.size
            )
        } else {
            write!(
                f,
                "Processor '{}' forked '{}' into '{}' ({} bytes)",
                self.processor, self.source_path, self.target_path, self.size
            )
        }
    }
}

impl StructuredLog for AssetCommitted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            source_path = self.source_path,
            target_path = self.target_path,
            size = self.size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "asset_committed",
            span_name = name,
            processor = self.processor,
            target_path = self.target_path,
        )
    }
}

/// The host could not provide an asset it listed as output.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct AssetReadFailed<'a> {
    pub error: &'a AssetError,
}

impl Display for AssetReadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Post-processing aborted: {}", self.error)
    }
}

impl StructuredLog for AssetReadFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.error.path(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("asset_read_failed", span_name = name, path = self.error.path())
    }
}

/// Optimize-assets phase finished.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use post_production::engine::PipelineReport;
/// use post_production::observability::messages::pipeline::BuildCompleted;
/// use std::time::Duration;
///
/// let report = PipelineReport { files_seen: 4, files_processed: 2, commits: 3, ..Default::default() };
/// let msg = BuildCompleted { report: &report, duration: Duration::from_millis(5) };
/// assert!(msg.to_string().starts_with("Post-processing done: 2 of 4 file(s) processed, 3 commit(s)"));
/// ```
pub struct BuildCompleted<'a> {
    pub report: &'a PipelineReport,
    pub duration: Duration,
}

impl Display for BuildCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Post-processing done: {} of {} file(s) processed, {} commit(s), {} fork(s), {} invalid result(s) in {:?}",
            self.report.files_processed,
            self.report.files_seen,
            self.report.commits,
            self.report.forks,
            self.report.invalid_results,
            self.duration
        )
    }
}

impl StructuredLog for BuildCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            files_seen = self.report.files_seen,
            files_processed = self.report.files_processed,
            commits = self.report.commits,
            forks = self.report.forks,
            invalid_results = self.report.invalid_results,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "post_processing_completed",
            span_name = name,
            files_processed = self.report.files_processed,
            duration = ?self.duration,
        )
    }
}
