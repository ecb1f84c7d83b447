// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod asset;
mod config;
mod registration;

pub use asset::AssetError;
pub use config::ConfigError;
pub use registration::RegistrationError;
