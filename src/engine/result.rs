// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The value a processor hands back for one file.

use serde_json::Value;

/// Outcome of one `process` call.
///
/// Exactly one of three shapes:
/// * `Content` - new full content for the file the processor was invoked for
/// * `Renamed` - new content for `path`, or for the invoked file when `path` is `None`
/// * `Invalid` - anything else; nothing is committed and a diagnostic is emitted
#[derive(Debug, Clone, PartialEq)]
pub enum TransformResult {
    Content(String),
    Renamed {
        path: Option<String>,
        content: String,
    },
    Invalid(String),
}

impl TransformResult {
    pub fn content(content: impl Into<String>) -> Self {
        TransformResult::Content(content.into())
    }

    pub fn renamed(path: impl Into<String>, content: impl Into<String>) -> Self {
        TransformResult::Renamed {
            path: Some(path.into()),
            content: content.into(),
        }
    }

    /// Marks a result that has none of the accepted shapes. `value` is what
    /// ends up in the diagnostic.
    pub fn invalid(value: impl Into<String>) -> Self {
        TransformResult::Invalid(value.into())
    }

    /// Classifies a dynamically produced value by its shape.
    ///
    /// A string is `Content`. An object whose `content` is a string is
    /// `Renamed`, taking its target from `path` (or the older `filepath`
    /// key). Everything else, including objects without string content,
    /// is `Invalid`.
    ///
    /// ```
    /// use post_production::engine::TransformResult;
    /// use serde_json::json;
    ///
    /// assert_eq!(TransformResult::from_value(json!("x")), TransformResult::content("x"));
    /// assert_eq!(
    ///     TransformResult::from_value(json!({ "filepath": "b.js", "content": "y" })),
    ///     TransformResult::renamed("b.js", "y"),
    /// );
    /// assert!(TransformResult::from_value(json!(42)).is_invalid());
    /// ```
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(content) => TransformResult::Content(content),
            Value::Object(mut fields) => match fields.remove("content") {
                Some(Value::String(content)) => {
                    let path = ["path", "filepath"]
                        .iter()
                        .find_map(|key| match fields.get(*key) {
                            Some(Value::String(path)) => Some(path.clone()),
                            _ => None,
                        });
                    TransformResult::Renamed { path, content }
                }
                content => {
                    if let Some(content) = content {
                        fields.insert("content".to_string(), content);
                    }
                    TransformResult::Invalid(Value::Object(fields).to_string())
                }
            },
            other => TransformResult::Invalid(other.to_string()),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, TransformResult::Invalid(_))
    }

    /// Splits a result produced for `current` into `(target path, content)`.
    ///
    /// An absent or empty `path` means `current`. `Invalid` yields its value
    /// description as the error.
    pub fn into_commit(self, current: &str) -> Result<(String, String), String> {
        match self {
            TransformResult::Content(content) => Ok((current.to_string(), content)),
            TransformResult::Renamed { path, content } => {
                let target = path
                    .filter(|path| !path.is_empty())
                    .unwrap_or_else(|| current.to_string());
                Ok((target, content))
            }
            TransformResult::Invalid(value) => Err(value),
        }
    }
}

impl From<String> for TransformResult {
    fn from(content: String) -> Self {
        TransformResult::Content(content)
    }
}

impl From<&str> for TransformResult {
    fn from(content: &str) -> Self {
        TransformResult::Content(content.to_string())
    }
}

/// `None` plays the part of a processor that returned nothing at all.
impl<T: Into<TransformResult>> From<Option<T>> for TransformResult {
    fn from(result: Option<T>) -> Self {
        match result {
            Some(result) => result.into(),
            None => TransformResult::Invalid("undefined".to_string()),
        }
    }
}
