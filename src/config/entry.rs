// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! User-supplied processor entries and their validated form.

use regex::Regex;
use serde_yaml::Value;
use std::fmt;
use std::sync::Arc;

use crate::backends::local::{IdentityProcessor, LocalProcessorFactory};
use crate::config::consts::{OPTIONS_FIELD, TEST_FIELD, TRANSFORM_FIELD};
use crate::engine::{CumulativeMap, TransformResult};
use crate::errors::RegistrationError;
use crate::traits::{FnProcessor, PostProcessor};

/// Decides whether a processor applies to a file path.
#[derive(Clone)]
pub enum PathTest {
    Always,
    Pattern(Regex),
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl PathTest {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathTest::Always => true,
            PathTest::Pattern(regex) => regex.is_match(path),
            PathTest::Predicate(predicate) => predicate(path),
        }
    }

    pub fn is_scoped(&self) -> bool {
        !matches!(self, PathTest::Always)
    }
}

impl fmt::Debug for PathTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathTest::Always => write!(f, "Always"),
            PathTest::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            PathTest::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

/// A `{ test, transform }` entry; either half may be left out.
#[derive(Clone, Default)]
pub struct SpecEntry {
    pub applies_to: Option<PathTest>,
    pub transform: Option<Arc<dyn PostProcessor>>,
}

impl SpecEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.applies_to = Some(PathTest::Predicate(Arc::new(predicate)));
        self
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.applies_to = Some(PathTest::Pattern(pattern));
        self
    }

    pub fn with_transform<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &CumulativeMap, &str) -> TransformResult + Send + Sync + 'static,
    {
        self.with_processor(FnProcessor::new(name, f))
    }

    pub fn with_processor(mut self, processor: impl PostProcessor + 'static) -> Self {
        self.transform = Some(Arc::new(processor));
        self
    }
}

/// One item of the list handed to the plugin at construction.
#[derive(Clone)]
pub enum ProcessorEntry {
    /// A bare transform, applicable to every file.
    Function(Arc<dyn PostProcessor>),
    /// A transform with an optional path test.
    Spec(SpecEntry),
    /// Data-driven entry, e.g. one item of a config file's `processors` list.
    /// A string names a built-in processor, a mapping is read as
    /// `{ test, transform, options }`. Anything else cannot be registered.
    Value(Value),
}

impl ProcessorEntry {
    pub fn function<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &CumulativeMap, &str) -> TransformResult + Send + Sync + 'static,
    {
        ProcessorEntry::Function(Arc::new(FnProcessor::new(name, f)))
    }

    pub fn processor(processor: impl PostProcessor + 'static) -> Self {
        ProcessorEntry::Function(Arc::new(processor))
    }
}

impl From<SpecEntry> for ProcessorEntry {
    fn from(spec: SpecEntry) -> Self {
        ProcessorEntry::Spec(spec)
    }
}

impl From<Value> for ProcessorEntry {
    fn from(value: Value) -> Self {
        ProcessorEntry::Value(value)
    }
}

impl fmt::Debug for ProcessorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorEntry::Function(processor) => {
                f.debug_tuple("Function").field(&processor.name()).finish()
            }
            ProcessorEntry::Spec(spec) => f
                .debug_struct("Spec")
                .field("applies_to", &spec.applies_to)
                .field("transform", &spec.transform.as_ref().map(|p| p.name().to_string()))
                .finish(),
            ProcessorEntry::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// A registered processor: path test plus transform, in registration order.
#[derive(Clone)]
pub struct ProcessorSpec {
    index: usize,
    applies_to: PathTest,
    processor: Arc<dyn PostProcessor>,
}

impl ProcessorSpec {
    /// Validates one entry. `index` is the entry's position in the list the
    /// plugin was constructed with.
    pub fn parse(index: usize, entry: ProcessorEntry) -> Result<Self, RegistrationError> {
        let (applies_to, processor) = match entry {
            ProcessorEntry::Function(processor) => (PathTest::Always, processor),
            ProcessorEntry::Spec(spec) => (
                spec.applies_to.unwrap_or(PathTest::Always),
                spec.transform
                    .unwrap_or_else(|| Arc::new(IdentityProcessor::new())),
            ),
            ProcessorEntry::Value(value) => parse_value(value)?,
        };

        Ok(Self {
            index,
            applies_to,
            processor,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        self.processor.name()
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.applies_to.matches(path)
    }

    pub fn is_scoped(&self) -> bool {
        self.applies_to.is_scoped()
    }

    pub fn processor(&self) -> &Arc<dyn PostProcessor> {
        &self.processor
    }
}

impl fmt::Debug for ProcessorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorSpec")
            .field("index", &self.index)
            .field("name", &self.processor.name())
            .field("applies_to", &self.applies_to)
            .finish()
    }
}

fn parse_value(value: Value) -> Result<(PathTest, Arc<dyn PostProcessor>), RegistrationError> {
    match value {
        Value::String(name) => {
            let processor = LocalProcessorFactory::create_processor(&name, &Value::Null)?;
            Ok((PathTest::Always, processor))
        }
        Value::Mapping(fields) => {
            let applies_to = match fields.get(TEST_FIELD) {
                None | Some(Value::Null) => PathTest::Always,
                Some(Value::String(pattern)) => {
                    let regex = Regex::new(pattern).map_err(|e| {
                        RegistrationError::InvalidPredicate {
                            pattern: pattern.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                    PathTest::Pattern(regex)
                }
                Some(other) => {
                    return Err(RegistrationError::InvalidPredicate {
                        pattern: describe_value(other),
                        reason: "expected a regular expression string".to_string(),
                    })
                }
            };

            let options = fields.get(OPTIONS_FIELD).cloned().unwrap_or(Value::Null);
            let processor: Arc<dyn PostProcessor> = match fields.get(TRANSFORM_FIELD) {
                None | Some(Value::Null) => Arc::new(IdentityProcessor::new()),
                Some(Value::String(name)) => LocalProcessorFactory::create_processor(name, &options)?,
                Some(_) => {
                    return Err(RegistrationError::NotAProcessor {
                        value: describe_value(&Value::Mapping(fields.clone())),
                    })
                }
            };

            Ok((applies_to, processor))
        }
        other => Err(RegistrationError::NotAProcessor {
            value: describe_value(&other),
        }),
    }
}

/// Single-line rendering of a config value for diagnostics.
pub(crate) fn describe_value(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(rendered) => {
            let rendered = rendered.trim_end();
            if rendered.contains('\n') {
                serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
            } else {
                rendered.to_string()
            }
        }
        Err(_) => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).expect("test yaml should parse")
    }

    fn seeded(path: &str, content: &str) -> CumulativeMap {
        CumulativeMap::seeded(path, Arc::from(content))
    }

    #[test]
    fn test_bare_function_applies_everywhere() {
        let entry = ProcessorEntry::function("upper", |original: &str, _: &CumulativeMap, _: &str| {
            TransformResult::content(original.to_uppercase())
        });

        let spec = ProcessorSpec::parse(0, entry).unwrap();
        assert!(spec.applies_to("a.js"));
        assert!(spec.applies_to("styles/site.css"));
        assert!(!spec.is_scoped());
        assert_eq!(spec.name(), "upper");
        assert_eq!(
            spec.processor().process("abc", &seeded("a.js", "abc"), "a.js"),
            TransformResult::content("ABC")
        );
    }

    #[test]
    fn test_partial_spec_defaults_to_identity() {
        let entry: ProcessorEntry = SpecEntry::new()
            .with_test(|path: &str| path.ends_with(".css"))
            .into();

        let spec = ProcessorSpec::parse(2, entry).unwrap();
        assert_eq!(spec.index(), 2);
        assert!(spec.applies_to("site.css"));
        assert!(!spec.applies_to("site.js"));
        assert_eq!(spec.name(), "identity");
        assert_eq!(
            spec.processor().process("body{}", &seeded("site.css", "changed"), "site.css"),
            TransformResult::content("body{}")
        );
    }

    #[test]
    fn test_empty_spec_applies_everywhere() {
        let spec = ProcessorSpec::parse(0, SpecEntry::new().into()).unwrap();
        assert!(spec.applies_to("anything.txt"));
        assert_eq!(spec.name(), "identity");
    }

    #[test]
    fn test_value_entries() {
        struct TestCase {
            name: &'static str,
            value: Value,
            expected_processor: Option<&'static str>,
            matching_path: &'static str,
            non_matching_path: Option<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "built-in by name",
                value: Value::String("change_case_upper".to_string()),
                expected_processor: Some("change_case_upper"),
                matching_path: "a.js",
                non_matching_path: None,
            },
            TestCase {
                name: "mapping with test and transform",
                value: yaml("{ test: '\\.js$', transform: prefix_suffix, options: { prefix: '/*B*/' } }"),
                expected_processor: Some("prefix_suffix"),
                matching_path: "main.js",
                non_matching_path: Some("main.css"),
            },
            TestCase {
                name: "mapping with only test",
                value: yaml("{ test: '^docs/' }"),
                expected_processor: Some("identity"),
                matching_path: "docs/index.html",
                non_matching_path: Some("index.html"),
            },
        ];

        for test_case in test_cases {
            let spec = ProcessorSpec::parse(0, ProcessorEntry::Value(test_case.value))
                .unwrap_or_else(|e| panic!("Test case '{}' failed to parse: {}", test_case.name, e));

            assert_eq!(Some(spec.name()), test_case.expected_processor, "Test case '{}'", test_case.name);
            assert!(spec.applies_to(test_case.matching_path), "Test case '{}'", test_case.name);
            if let Some(path) = test_case.non_matching_path {
                assert!(!spec.applies_to(path), "Test case '{}'", test_case.name);
            }
        }
    }

    #[test]
    fn test_garbage_values_are_rejected() {
        struct TestCase {
            name: &'static str,
            value: Value,
            expected: RegistrationError,
        }

        let test_cases = vec![
            TestCase {
                name: "number",
                value: Value::Number(42.into()),
                expected: RegistrationError::NotAProcessor {
                    value: "42".to_string(),
                },
            },
            TestCase {
                name: "null",
                value: Value::Null,
                expected: RegistrationError::NotAProcessor {
                    value: "null".to_string(),
                },
            },
            TestCase {
                name: "boolean",
                value: Value::Bool(true),
                expected: RegistrationError::NotAProcessor {
                    value: "true".to_string(),
                },
            },
            TestCase {
                name: "sequence",
                value: yaml("[a, b]"),
                expected: RegistrationError::NotAProcessor {
                    value: r#"["a","b"]"#.to_string(),
                },
            },
        ];

        for test_case in test_cases {
            let result = ProcessorSpec::parse(0, ProcessorEntry::Value(test_case.value));
            assert_eq!(
                result.err(),
                Some(test_case.expected),
                "Test case '{}' failed",
                test_case.name
            );
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let result = ProcessorSpec::parse(0, ProcessorEntry::Value(Value::String("oops".to_string())));
        match result {
            Err(RegistrationError::UnknownProcessor { name, .. }) => assert_eq!(name, "oops"),
            other => panic!("expected UnknownProcessor, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let result = ProcessorSpec::parse(0, ProcessorEntry::Value(yaml("{ test: '(' }")));
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidPredicate { ref pattern, .. }) if pattern == "("
        ));

        let result = ProcessorSpec::parse(0, ProcessorEntry::Value(yaml("{ test: 7 }")));
        assert!(matches!(result, Err(RegistrationError::InvalidPredicate { .. })));
    }

    #[test]
    fn test_non_string_transform_is_rejected() {
        let result = ProcessorSpec::parse(0, ProcessorEntry::Value(yaml("{ transform: 3 }")));
        assert!(matches!(result, Err(RegistrationError::NotAProcessor { .. })));
    }
}
