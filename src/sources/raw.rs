use crate::error::TokenError;
use crate::sources::TokenReader;

/// Token held in memory, returned as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTokenReader {
    pub token: String,
}

impl RawTokenReader {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl TokenReader for RawTokenReader {
    fn read_token(&self) -> Result<String, TokenError> {
        Ok(self.token.clone())
    }
}
