use std::io::{self, BufRead, BufReader, Read};

use tracing::{debug, warn};

use crate::error::TokenError;
use crate::helpers::mask::mask_token;
use crate::utils::constants::ACCESS_TOKEN_KEY;

/// A `key=value` line split on its first `=`.
///
/// Kept as raw bytes: lines that are not valid UTF-8 can still be compared
/// and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub key: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> ParsedLine<'a> {
    /// Returns `None` for lines without `=`.
    pub fn parse(line: &'a [u8]) -> Option<Self> {
        let pos = line.iter().position(|b| *b == b'=')?;
        Some(Self {
            key: &line[..pos],
            value: &line[pos + 1..],
        })
    }
}

/// Scan `reader` for the first `access_token=<value>` line and return `<value>`.
pub fn parse_token<R: Read>(reader: Option<R>) -> Result<String, TokenError> {
    parse_token_with_key(reader, ACCESS_TOKEN_KEY)
}

/// Same as [`parse_token`] with a caller supplied key.
///
/// Lines are split on `\n` (a trailing `\r` is dropped). The first line whose
/// key equals `key` wins, and its value may be empty. Lines without `=` never
/// match. Only the matched value has to be UTF-8.
pub fn parse_token_with_key<R: Read>(reader: Option<R>, key: &str) -> Result<String, TokenError> {
    let mut reader = BufReader::new(reader.ok_or(TokenError::InvalidInput)?);
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(TokenError::Read)? == 0 {
            break;
        }
        line_no += 1;

        match ParsedLine::parse(trim_line_ending(&buf)) {
            Some(parsed) if parsed.key == key.as_bytes() => {
                let value = std::str::from_utf8(parsed.value)
                    .map_err(|e| TokenError::Read(io::Error::new(io::ErrorKind::InvalidData, e)))?;
                debug!(key, line = line_no, token = %mask_token(value), "token found");
                return Ok(value.to_owned());
            }
            _ => continue,
        }
    }

    warn!(key, "token key not found in stream");
    Err(TokenError::TokenNotFound { key: key.to_owned() })
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
