// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::config::consts::PATH_PLACEHOLDER;
use crate::engine::{CumulativeMap, TransformResult};
use crate::traits::PostProcessor;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ForkOutputConfig {
    /// Target path. `{path}` expands to the path of the file being processed.
    #[serde(default)]
    pub path: Option<String>,
}

/// Copies the latest content of a file to a second output path, leaving the
/// original file as it is.
pub struct ForkOutputProcessor {
    target: String,
}

impl ForkOutputProcessor {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target_for(&self, path: &str) -> String {
        self.target.replace(PATH_PLACEHOLDER, path)
    }
}

impl PostProcessor for ForkOutputProcessor {
    fn process(&self, original: &str, cumulative: &CumulativeMap, path: &str) -> TransformResult {
        let current = cumulative.latest_or(path, original);
        TransformResult::renamed(self.target_for(path), current)
    }

    fn name(&self) -> &str {
        "fork_output"
    }
}
