use serde::Deserialize;
use std::collections::HashMap;

use crate::config::settings::SettingsConfig;
use crate::utils::constants::ACCESS_TOKEN_KEY;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub readers: HashMap<String, ReaderConfig>,
}

/// ================================
/// Readers
/// ================================
/// Where a reader takes its token from. The variant is picked by field name;
/// each variant rejects fields of the others, so mixed definitions fail.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReaderConfig {
    Literal(LiteralReaderConfig),
    FromEnv(EnvReaderConfig),
    FromFile(FileReaderConfig),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LiteralReaderConfig {
    pub value: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnvReaderConfig {
    pub from_env: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileReaderConfig {
    pub path: String,
    #[serde(default = "default_token_key")]
    pub key: String, // key of the `key=value` line holding the token
}

fn default_token_key() -> String {
    ACCESS_TOKEN_KEY.to_string()
}
