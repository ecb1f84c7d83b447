// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::{CumulativeMap, TransformResult};

/// A unit of post-build content rewriting.
///
/// `original` is always the content the file had before its chain started,
/// no matter how many processors ran before this one. A processor that wants
/// to build on earlier output reads `cumulative.get(path)` instead.
pub trait PostProcessor: Send + Sync {
    fn process(&self, original: &str, cumulative: &CumulativeMap, path: &str) -> TransformResult;

    fn name(&self) -> &str;
}

/// Adapts a bare closure into a [`PostProcessor`].
pub struct FnProcessor<F> {
    name: String,
    f: F,
}

impl<F> FnProcessor<F>
where
    F: Fn(&str, &CumulativeMap, &str) -> TransformResult + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> PostProcessor for FnProcessor<F>
where
    F: Fn(&str, &CumulativeMap, &str) -> TransformResult + Send + Sync,
{
    fn process(&self, original: &str, cumulative: &CumulativeMap, path: &str) -> TransformResult {
        (self.f)(original, cumulative, path)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnProcessor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProcessor").field("name", &self.name).finish()
    }
}
