// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod host;
pub mod processor;

pub use host::{Asset, AssetStore, BuildHost, OptimizeAssetsHandler, OutputGroup};
pub use processor::{FnProcessor, PostProcessor};
