// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::sync::Arc;

use super::processors::*;
use crate::errors::RegistrationError;
use crate::traits::PostProcessor;

/// Factory for the built-in (in-process) post-processors
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance by name
    ///
    /// - "identity" -> IdentityProcessor
    /// - "change_case_upper" -> ChangeTextCaseProcessor (uppercase)
    /// - "change_case_lower" -> ChangeTextCaseProcessor (lowercase)
    /// - "prefix_suffix" -> PrefixSuffixAdderProcessor (`prefix`, `suffix` options)
    /// - "fork_output" -> ForkOutputProcessor (requires a `path` option)
    ///
    /// `options` is the entry's `options` value, or null when absent.
    pub fn create_processor(
        name: &str,
        options: &Value,
    ) -> Result<Arc<dyn PostProcessor>, RegistrationError> {
        match name {
            "identity" => Ok(Arc::new(IdentityProcessor::new())),

            "change_case_upper" => Ok(Arc::new(ChangeTextCaseProcessor::upper())),
            "change_case_lower" => Ok(Arc::new(ChangeTextCaseProcessor::lower())),

            "prefix_suffix" => {
                let config: PrefixSuffixConfig = parse_options(name, options)?;
                Ok(Arc::new(PrefixSuffixAdderProcessor::new(config)))
            }

            "fork_output" => {
                let config: ForkOutputConfig = parse_options(name, options)?;
                match config.path.filter(|path| !path.is_empty()) {
                    Some(path) => Ok(Arc::new(ForkOutputProcessor::new(path))),
                    None => Err(RegistrationError::InvalidOptions {
                        name: name.to_string(),
                        reason: "missing target `path`".to_string(),
                    }),
                }
            }

            _ => Err(RegistrationError::UnknownProcessor {
                name: name.to_string(),
                available: Self::list_available_implementations().join(", "),
            }),
        }
    }

    /// List all available built-in processor names
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "identity",
            "change_case_upper",
            "change_case_lower",
            "prefix_suffix",
            "fork_output",
        ]
    }

    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

fn parse_options<T>(name: &str, options: &Value) -> Result<T, RegistrationError>
where
    T: DeserializeOwned + Default,
{
    if options.is_null() {
        return Ok(T::default());
    }

    serde_yaml::from_value(options.clone()).map_err(|e| RegistrationError::InvalidOptions {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
