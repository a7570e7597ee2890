//! # Token Reader Library
//!
//! Reads an access token from a literal value, from a file of `key=value`
//! lines, or from an environment variable, behind one `TokenReader` trait.
//!
//! Modules:
//! - `sources` — `TokenReader` and its raw, file and env variants
//! - `parser` — line-oriented `access_token=<value>` extraction
//! - `config` — YAML configuration, loading and validation
//! - `error` — `TokenError` taxonomy

pub mod config;
pub mod error;
pub mod helpers;
pub mod parser;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::config::readers::*;
pub use crate::error::TokenError;
pub use crate::parser::parser::{parse_token, parse_token_with_key};
pub use crate::sources::{EnvTokenReader, FileTokenReader, RawTokenReader, TokenReader, TokenReaderKind};
