// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::engine::{CumulativeMap, TransformResult};
use crate::traits::PostProcessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    Upper,
    Lower,
}

/// Change Text Case processor - converts the latest content of a file
pub struct ChangeTextCaseProcessor {
    case: TextCase,
}

impl ChangeTextCaseProcessor {
    pub fn new(case: TextCase) -> Self {
        Self { case }
    }

    pub fn upper() -> Self {
        Self::new(TextCase::Upper)
    }

    pub fn lower() -> Self {
        Self::new(TextCase::Lower)
    }
}

impl PostProcessor for ChangeTextCaseProcessor {
    fn process(&self, original: &str, cumulative: &CumulativeMap, path: &str) -> TransformResult {
        let current = cumulative.latest_or(path, original);

        let result = match self.case {
            TextCase::Upper => current.to_uppercase(),
            TextCase::Lower => current.to_lowercase(),
        };

        TransformResult::Content(result)
    }

    fn name(&self) -> &str {
        match self.case {
            TextCase::Upper => "change_case_upper",
            TextCase::Lower => "change_case_lower",
        }
    }
}
