// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // built-in processors + in-memory host
pub mod config;        // entries, registry, config loading
pub mod engine;        // asset processing pipeline
pub mod errors;        // error handling
pub mod observability;
pub mod plugin;
pub mod traits;        // host + processor abstractions

pub use config::{ProcessorEntry, ProcessorRegistry, SpecEntry};
pub use engine::{AssetPipeline, CumulativeMap, TransformResult};
pub use plugin::PostProcessingPlugin;
pub use traits::{AssetStore, BuildHost, PostProcessor};
