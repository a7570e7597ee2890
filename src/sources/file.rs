use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::TokenError;
use crate::helpers::mask::mask_token;
use crate::parser::parser::parse_token_with_key;
use crate::sources::TokenReader;
use crate::utils::constants::ACCESS_TOKEN_KEY;

/// Token stored in a file of `key=value` lines.
///
/// The file is opened and closed on every read; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokenReader {
    path: PathBuf,
    key: String,
}

impl FileTokenReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: ACCESS_TOKEN_KEY.to_owned(),
        }
    }

    /// Look for `key` instead of `access_token`.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TokenReader for FileTokenReader {
    fn read_token(&self) -> Result<String, TokenError> {
        let file = File::open(&self.path).map_err(|source| {
            error!(path = %self.path.display(), error = %source, "token file open failed");
            TokenError::Open {
                path: self.path.clone(),
                source,
            }
        })?;

        // the parser owns the handle and drops it before returning
        parse_token_with_key(Some(file), &self.key)
            .inspect(|token| {
                debug!(path = %self.path.display(), token = %mask_token(token), "token read from file")
            })
            .inspect_err(|e| error!(path = %self.path.display(), error = %e, "token file parse failed"))
    }
}
