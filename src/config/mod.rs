// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod entry;
mod loader;
mod registry;

pub mod consts;

pub use entry::{PathTest, ProcessorEntry, ProcessorSpec, SpecEntry};
pub use loader::{load_config, parse_config, PluginConfig};
pub use registry::{ProcessorRegistry, RegisteredProcessor};
