//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// JSON format.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::UnknownOutput(other.to_string())),
        }
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a labeled line.
pub fn print_field(label: &str, value: &str) {
    println!("{:<10} {}", label.dimmed(), value);
}

/// Print a validation failure line.
pub fn print_violation(path: &str, message: &str, cause: Option<&str>) {
    let path = if path.is_empty() { "(root)" } else { path };
    match cause {
        Some(cause) => println!("{} {} ({})", path.red().bold(), message, cause.dimmed()),
        None => println!("{} {}", path.red().bold(), message),
    }
}
