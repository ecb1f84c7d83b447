// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::engine::{CumulativeMap, TransformResult};
use crate::traits::PostProcessor;

/// Configuration for the Prefix/Suffix Adder processor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixSuffixConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// Prefix/Suffix Adder processor - wraps the latest content of a file,
/// e.g. to add a license banner.
pub struct PrefixSuffixAdderProcessor {
    config: PrefixSuffixConfig,
}

impl PrefixSuffixAdderProcessor {
    pub fn new(config: PrefixSuffixConfig) -> Self {
        Self { config }
    }

    pub fn with_prefix(prefix: String) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: Some(prefix),
            suffix: None,
        })
    }

    pub fn with_suffix(suffix: String) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: None,
            suffix: Some(suffix),
        })
    }
}

impl PostProcessor for PrefixSuffixAdderProcessor {
    fn process(&self, original: &str, cumulative: &CumulativeMap, path: &str) -> TransformResult {
        let current = cumulative.latest_or(path, original);
        let prefix = self.config.prefix.as_deref().unwrap_or_default();
        let suffix = self.config.suffix.as_deref().unwrap_or_default();

        let mut result = String::with_capacity(prefix.len() + current.len() + suffix.len());
        result.push_str(prefix);
        result.push_str(current);
        result.push_str(suffix);

        TransformResult::Content(result)
    }

    fn name(&self) -> &str {
        "prefix_suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_prefix_and_suffix() {
        let cumulative = CumulativeMap::seeded("a.js", Arc::from("VAR A=1;"));

        let banner = PrefixSuffixAdderProcessor::with_prefix("/*BANNER*/".to_string());
        assert_eq!(
            banner.process("var a=1;", &cumulative, "a.js"),
            TransformResult::content("/*BANNER*/VAR A=1;")
        );

        let footer = PrefixSuffixAdderProcessor::with_suffix("\n//# end".to_string());
        assert_eq!(
            footer.process("var a=1;", &cumulative, "a.js"),
            TransformResult::content("VAR A=1;\n//# end")
        );
    }
}
