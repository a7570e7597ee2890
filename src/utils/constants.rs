//! Shared constants and invariants

/// Key looked up in token files unless a reader overrides it.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

pub const DEFAULT_CONFIG_PATH: &str = "token-reader.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// Supported reader kinds
pub const READER_RAW: &str = "raw";
pub const READER_FILE: &str = "file";
pub const READER_ENV: &str = "env";
