//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Checks logging settings and every reader definition

use regex::Regex;
use tracing::{error, info};

use crate::config::readers::{EnvReaderConfig, FileReaderConfig, ReaderConfig, ServiceConfig};
use crate::config::settings::SettingsConfig;
use crate::utils::constants::LOG_LEVELS;

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);

    if cfg.readers.is_empty() {
        errors.push("config: 'readers' is empty; at least one reader required".to_string());
    }

    let mut names: Vec<&String> = cfg.readers.keys().collect();
    names.sort();
    for name in names {
        validate_reader(name, &cfg.readers[name], &mut errors);
    }

    if errors.is_empty() {
        info!(readers = cfg.readers.len(), "config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config validation: {}", e);
        }
        Err(errors)
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if let Some(logging) = &settings.logging {
        let level = logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of {}",
                logging.level,
                LOG_LEVELS.join(", ")
            ));
        }
    }
}

fn validate_reader(name: &str, reader: &ReaderConfig, errors: &mut Vec<String>) {
    if name.trim().is_empty() {
        errors.push("readers: reader name must not be empty".to_string());
    }

    match reader {
        ReaderConfig::Literal(_) => {}
        ReaderConfig::FromEnv(EnvReaderConfig { from_env }) => {
            if !is_env_var_name(from_env) {
                errors.push(format!(
                    "reader['{}'].from_env '{}' is not a valid environment variable name",
                    name, from_env
                ));
            }
        }
        ReaderConfig::FromFile(FileReaderConfig { path, key }) => {
            if path.trim().is_empty() {
                errors.push(format!("reader['{}'].path must not be empty", name));
            }
            if key.is_empty() {
                errors.push(format!("reader['{}'].key must not be empty", name));
            } else if key.contains('=') {
                errors.push(format!("reader['{}'].key '{}' must not contain '='", name, key));
            }
        }
    }
}

fn is_env_var_name(name: &str) -> bool {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}
