// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures of the host's asset-read primitive.
///
/// These are the only errors the pipeline does not recover from. They are
/// handed back to the host through the build's completion signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error("asset '{path}' does not exist in this build")]
    Missing { path: String },

    #[error("asset '{path}' could not be read: {reason}")]
    Unreadable { path: String, reason: String },
}

impl AssetError {
    pub fn path(&self) -> &str {
        match self {
            AssetError::Missing { path } | AssetError::Unreadable { path, .. } => path,
        }
    }
}
