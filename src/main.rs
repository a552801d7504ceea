//! pzenv CLI entry point.

use clap::Parser;

use pzenv::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = pzenv::cli::commands::materialize::execute(&cli) {
        pzenv::cli::handle_error(&err, cli.json);
    }
}
