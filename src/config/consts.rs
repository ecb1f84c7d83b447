/// Log level used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Mapping key holding a path pattern in config entries.
pub const TEST_FIELD: &str = "test";
/// Mapping key naming the built-in transform in config entries.
pub const TRANSFORM_FIELD: &str = "transform";
/// Mapping key holding built-in processor options in config entries.
pub const OPTIONS_FIELD: &str = "options";
/// Replaced by the invoked file's path in `fork_output` targets.
pub const PATH_PLACEHOLDER: &str = "{path}";
