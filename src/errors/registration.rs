// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while turning user-supplied entries into processor specs.
//!
//! None of these abort plugin construction. An entry that fails to register
//! is kept in the registry as an inert placeholder and reported once through
//! the diagnostic sink.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// The entry is neither a transform nor a `{ test, transform }` mapping.
    #[error(
        "post-processor must be a function or an object (i.e. {{ test, transform }}), so ignoring: {value}"
    )]
    NotAProcessor { value: String },

    /// A string entry or `transform` field names no built-in processor.
    #[error("unknown built-in processor '{name}' (available: {available})")]
    UnknownProcessor { name: String, available: String },

    /// The `test` field could not be turned into a path predicate.
    #[error("invalid `test` pattern '{pattern}': {reason}")]
    InvalidPredicate { pattern: String, reason: String },

    /// A built-in processor rejected its `options`.
    #[error("invalid options for processor '{name}': {reason}")]
    InvalidOptions { name: String, reason: String },
}
