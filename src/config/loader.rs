// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_LOG_LEVEL;
use crate::config::entry::ProcessorEntry;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Plugin configuration, typically loaded from a YAML file.
///
/// `processors` is kept as raw YAML so that entries which are not
/// processors survive parsing and are reported by the registry instead of
/// failing the whole file.
///
/// # Example
/// ```yaml
/// log_level: debug
/// processors:
///   - change_case_upper
///   - test: '\.js$'
///     transform: prefix_suffix
///     options:
///       prefix: "/*BANNER*/"
///   - test: '\.js$'
///     transform: fork_output
///     options:
///       path: "{path}.orig"
/// ```
#[derive(Debug, Deserialize)]
pub struct PluginConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub processors: Vec<serde_yaml::Value>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            processors: Vec::new(),
        }
    }
}

impl PluginConfig {
    /// Processor entries in file order, ready for registration.
    pub fn entries(&self) -> Vec<ProcessorEntry> {
        self.processors
            .iter()
            .cloned()
            .map(ProcessorEntry::Value)
            .collect()
    }
}

pub fn parse_config(yaml: &str) -> Result<PluginConfig, ConfigError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PluginConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}
