//! DECKPRESS CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to
//! engine detection or batch conversion, and exit with appropriate status.
//! For programmatic use, prefer the library API (`deckpress::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
