use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use token_reader::sources::{select_reader, FileTokenReader, RawTokenReader, TokenReader, TokenReaderKind};
use token_reader::utils::config_loader;
use token_reader::utils::constants::DEFAULT_CONFIG_PATH;
use token_reader::utils::logging;
use token_reader::utils::logging::LogLevel;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    /// Reader name from the config; optional when the config has one reader
    #[arg(short, long)]
    reader: Option<String>,
    /// Read a token file directly, ignoring the config
    #[arg(long, conflicts_with_all = ["raw", "reader"])]
    file: Option<PathBuf>,
    /// Key to look for with --file
    #[arg(long, requires = "file")]
    key: Option<String>,
    /// Use a literal token, ignoring the config
    #[arg(long, conflicts_with_all = ["file", "reader"])]
    raw: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Resolve reader (flags first, then YAML config)
    // -------------------------------

    let reader = match (args.file, args.raw) {
        (Some(path), _) => {
            logging::run(None, args.log_level)?;
            let mut reader = FileTokenReader::new(path);
            if let Some(key) = args.key {
                reader = reader.with_key(key);
            }
            TokenReaderKind::File(reader)
        }
        (None, Some(raw)) => {
            logging::run(None, args.log_level)?;
            TokenReaderKind::Raw(RawTokenReader::new(raw))
        }
        (None, None) => {
            let service_config = config_loader::run(&args.config).await?;
            logging::run(Some(&service_config.settings), args.log_level)?;
            select_reader(&service_config, args.reader.as_deref())?
        }
    };

    // -------------------------------
    // 2. Read and print token
    // -------------------------------

    info!(kind = reader.kind(), "reading token");
    let token = reader.read_token().context("failed to read token")?;
    println!("{token}");

    Ok(())
}
