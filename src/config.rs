use crate::cli::Cli;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Parser;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub text: Option<String>,
    pub interactive: bool,
    pub endpoint: String,
    pub domain: String,
    pub extra: String,
    pub multi: bool,
    pub tokens: String,
    pub format: OutputFormat,
    pub ping: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        Ok(Config {
            text: cli.text,
            interactive: cli.interactive,
            endpoint: cli.endpoint,
            domain: cli.domain,
            extra: cli.extra,
            multi: cli.multi,
            tokens: cli.tokens,
            format: cli.format,
            ping: cli.ping,
        })
    }
}
