pub mod common;
mod file_token_reader;
