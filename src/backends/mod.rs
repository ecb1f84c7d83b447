// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete implementations behind the crate's traits.
//!
//! ## Local Backend
//! Built-in post-processors addressable by name from configuration files:
//! case conversion, banners/footers, forking a file to a second output path.
//!
//! ## Memory Backend
//! An in-process [`BuildHost`](crate::traits::BuildHost) and
//! [`AssetStore`](crate::traits::AssetStore). Used by the test suite and the
//! demo; also handy for running the pipeline outside a real build tool.
//!
//! # Examples
//!
//! ```rust
//! use post_production::backends::local::LocalProcessorFactory;
//!
//! let processor = LocalProcessorFactory::create_processor("change_case_upper", &serde_yaml::Value::Null)?;
//! assert_eq!(processor.name(), "change_case_upper");
//! # Ok::<(), post_production::errors::RegistrationError>(())
//! ```

pub mod local;
pub mod memory;
