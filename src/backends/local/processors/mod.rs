// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod change_text_case;
pub mod fork_output;
pub mod identity;
pub mod prefix_suffix_adder;

pub use change_text_case::*;
pub use fork_output::*;
pub use identity::*;
pub use prefix_suffix_adder::*;
