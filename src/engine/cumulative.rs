// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

/// Latest committed content per path, scoped to one file's processor chain.
///
/// Seeded with the original content of the file that started the chain and
/// updated after every commit, including commits to forked paths. Processors
/// only get a shared reference; the pipeline owns all writes. Dropped when
/// the chain ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeMap {
    entries: HashMap<String, Arc<str>>,
}

impl CumulativeMap {
    pub fn seeded(path: &str, original: Arc<str>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(path.to_string(), original);
        Self { entries }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(|content| content.as_ref())
    }

    /// Latest content for `path`, or `fallback` when the chain never touched it.
    pub fn latest_or<'a>(&'a self, path: &str, fallback: &'a str) -> &'a str {
        self.get(path).unwrap_or(fallback)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record(&mut self, path: &str, content: Arc<str>) {
        self.entries.insert(path.to_string(), content);
    }
}
