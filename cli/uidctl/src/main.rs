//! uidctl - encode and validate UUIDs and ULIDs from the shell.

use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_json());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
