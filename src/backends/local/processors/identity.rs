// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::{CumulativeMap, TransformResult};
use crate::traits::PostProcessor;

/// Returns the original content unchanged.
///
/// Default transform for `{ test }` entries that name no transform. Note that
/// it commits the *original* content, so placed after other processors in a
/// chain it undoes their work on the same file.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityProcessor;

impl IdentityProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PostProcessor for IdentityProcessor {
    fn process(&self, original: &str, _cumulative: &CumulativeMap, _path: &str) -> TransformResult {
        TransformResult::content(original)
    }

    fn name(&self) -> &str {
        "identity"
    }
}
