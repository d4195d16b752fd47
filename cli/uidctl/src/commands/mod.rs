//! CLI commands.

mod decode;
mod encode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use uidnorm_codec::{NormalizerConfig, UidNormalizer};

use crate::error::CliError;
use crate::output::OutputFormat;

/// uidctl - Encode and validate UUIDs and ULIDs.
#[derive(Debug, Parser)]
#[command(name = "uidctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, global = true, default_value = "text")]
    output: String,

    /// Write logs to stderr as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render an identifier in another format.
    Encode(encode::EncodeCommand),

    /// Validate text as an identifier type.
    Decode(decode::DecodeCommand),
}

impl Cli {
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format: OutputFormat = self.output.parse()?;

        // Default output format comes from UIDNORM_NORMALIZATION_FORMAT.
        let config = NormalizerConfig::from_env().map_err(CliError::from)?;
        tracing::debug!(default_format = %config.uid_normalization_format, "configuration loaded");

        let ctx = CommandContext {
            normalizer: UidNormalizer::with_config(config),
            format,
        };

        match self.command {
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub normalizer: UidNormalizer,
    pub format: OutputFormat,
}
