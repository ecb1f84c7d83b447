// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The asset processing pipeline.
//!
//! Per build, for each output file the host reports:
//!
//! ```text
//! applicable chain empty? ── yes ──> untouched
//!          │ no
//!          v
//! read original ─> seed CumulativeMap ─> P1 ─> commit ─> P2 ─> commit ─> ...
//! ```
//!
//! Every processor receives the pristine original as its first argument and
//! the cumulative map holding the latest commit per path. After the last file
//! the host's completion signal fires once.

mod completion;
mod cumulative;
mod pipeline;
mod result;


pub use completion::{BuildOutcome, CompletionSignal};
pub use cumulative::CumulativeMap;
pub use pipeline::{AssetPipeline, PipelineReport};
pub use result::TransformResult;
