//! Sources module
//!
//! Defines the `TokenReader` capability, its variants, and a factory that
//! builds them from config.

use anyhow::{anyhow, bail, Result};

use crate::config::readers::{
    EnvReaderConfig, FileReaderConfig, LiteralReaderConfig, ReaderConfig, ServiceConfig,
};
use crate::error::TokenError;

pub mod env;
pub mod file;
pub mod raw;

pub use env::EnvTokenReader;
pub use file::FileTokenReader;
pub use raw::RawTokenReader;

/// Something that produces an access token on demand.
///
/// Implementations hold only immutable configuration, so repeated calls
/// against an unchanged backing source return the same result.
pub trait TokenReader {
    fn read_token(&self) -> Result<String, TokenError>;
}

#[derive(Debug, Clone)]
pub enum TokenReaderKind {
    Raw(RawTokenReader),
    File(FileTokenReader),
    Env(EnvTokenReader),
}

impl TokenReaderKind {
    pub fn kind(&self) -> &'static str {
        use crate::utils::constants::*;
        match self {
            TokenReaderKind::Raw(_) => READER_RAW,
            TokenReaderKind::File(_) => READER_FILE,
            TokenReaderKind::Env(_) => READER_ENV,
        }
    }
}

impl TokenReader for TokenReaderKind {
    fn read_token(&self) -> Result<String, TokenError> {
        match self {
            TokenReaderKind::Raw(r) => r.read_token(),
            TokenReaderKind::File(r) => r.read_token(),
            TokenReaderKind::Env(r) => r.read_token(),
        }
    }
}

pub fn build_reader(cfg: &ReaderConfig) -> TokenReaderKind {
    match cfg {
        ReaderConfig::Literal(LiteralReaderConfig { value }) => TokenReaderKind::Raw(RawTokenReader::new(value.to_owned())),
        ReaderConfig::FromEnv(EnvReaderConfig { from_env }) => TokenReaderKind::Env(EnvTokenReader::new(from_env.to_owned())),
        ReaderConfig::FromFile(FileReaderConfig { path, key }) => {
            TokenReaderKind::File(FileTokenReader::new(path).with_key(key.to_owned()))
        }
    }
}

/// Pick a reader from the config by name.
///
/// Without a name the config must declare exactly one reader.
pub fn select_reader(service_config: &ServiceConfig, name: Option<&str>) -> Result<TokenReaderKind> {
    match name {
        Some(name) => service_config
            .readers
            .get(name)
            .map(build_reader)
            .ok_or_else(|| anyhow!("reader '{}' is not defined in config", name)),
        None => {
            let mut readers = service_config.readers.values();
            match (readers.next(), readers.next()) {
                (Some(cfg), None) => Ok(build_reader(cfg)),
                (None, _) => bail!("config defines no readers"),
                (Some(_), Some(_)) => {
                    let mut names: Vec<&str> = service_config.readers.keys().map(String::as_str).collect();
                    names.sort_unstable();
                    bail!("config defines several readers ({}); pick one with --reader", names.join(", "))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::proc_loader::parse_config;

    const CONFIG: &str = r#"
readers:
  literal:
    value: "abc"
  registry:
    path: /var/run/secrets/registry.token
    key: refresh_token
  ci:
    from_env: CI_TOKEN
"#;

    #[test]
    fn build_reader_maps_every_config_variant() {
        let cfg = parse_config(CONFIG).unwrap();

        assert_eq!(build_reader(&cfg.readers["literal"]).kind(), "raw");
        assert_eq!(build_reader(&cfg.readers["ci"]).kind(), "env");

        match build_reader(&cfg.readers["registry"]) {
            TokenReaderKind::File(reader) => {
                assert_eq!(reader.path().to_str(), Some("/var/run/secrets/registry.token"));
                assert_eq!(reader.key(), "refresh_token");
            }
            other => panic!("expected file reader, got {:?}", other),
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn readers_are_send_and_sync() {
        assert_send_sync::<RawTokenReader>();
        assert_send_sync::<FileTokenReader>();
        assert_send_sync::<EnvTokenReader>();
        assert_send_sync::<TokenReaderKind>();
    }

    #[test]
    fn reader_is_shared_across_threads() {
        let reader = std::sync::Arc::new(TokenReaderKind::Raw(RawTokenReader::new("shared")));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = reader.clone();
                std::thread::spawn(move || reader.read_token().unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "shared");
        }
    }

    #[test]
    fn select_reader_by_name() {
        let cfg = parse_config(CONFIG).unwrap();
        let reader = select_reader(&cfg, Some("literal")).unwrap();
        assert_eq!(reader.read_token().unwrap(), "abc");

        let err = select_reader(&cfg, Some("missing")).unwrap_err();
        assert!(err.to_string().contains("'missing'"));
    }

    #[test]
    fn select_reader_without_name_needs_single_reader() {
        let cfg = parse_config(CONFIG).unwrap();
        let err = select_reader(&cfg, None).unwrap_err();
        assert!(err.to_string().contains("ci, literal, registry"));

        let single = parse_config("readers:\n  only:\n    value: one\n").unwrap();
        let reader = select_reader(&single, None).unwrap();
        assert_eq!(reader.read_token().unwrap(), "one");
    }
}
