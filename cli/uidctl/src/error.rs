//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use uidnorm_codec::uidnorm_id::UidKind;
use uidnorm_codec::{CodecError, NormalizationFormat};

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a UUID or ULID: {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Validation failed with {count} violation(s)")]
    Violations { count: usize },

    #[error("Unknown output format '{0}'. Use 'text' or 'json'.")]
    UnknownOutput(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let Some(cli_err) = err.downcast_ref::<CliError>() else {
        return;
    };

    match cli_err {
        CliError::Codec(CodecError::InvalidFormat { .. }) => {
            let formats: Vec<_> = NormalizationFormat::ALL
                .iter()
                .map(NormalizationFormat::as_str)
                .collect();
            eprintln!(
                "\n{}",
                format!("Hint: valid formats are {}.", formats.join(", ")).yellow()
            );
        }
        CliError::Codec(CodecError::UnsupportedType { .. }) => {
            let types: Vec<_> = UidKind::ALL.iter().map(UidKind::type_name).collect();
            eprintln!(
                "\n{}",
                format!("Hint: valid types are {}.", types.join(", ")).yellow()
            );
        }
        CliError::InvalidInput { .. } => {
            eprintln!(
                "\n{}",
                "Hint: pass the canonical form, e.g. 9b7541de-6f87-11ea-ab3c-9da9a81562fc or 01E4BYF64YZ97MDV6RH0HAMN6X."
                    .yellow()
            );
        }
        _ => {}
    }
}
