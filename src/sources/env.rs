use std::env;

use tracing::{debug, warn};

use crate::error::TokenError;
use crate::helpers::mask::mask_token;
use crate::sources::TokenReader;

/// Token taken from an environment variable at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvTokenReader {
    pub name: String,
}

impl EnvTokenReader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TokenReader for EnvTokenReader {
    fn read_token(&self) -> Result<String, TokenError> {
        env::var(&self.name)
            .inspect(|token| debug!(name = %self.name, token = %mask_token(token), "token read from env"))
            .map_err(|e| {
                warn!(name = %self.name, error = %e, "token env var unavailable");
                TokenError::EnvVarMissing { name: self.name.clone() }
            })
    }
}
