use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    coatings::{self, CoatingsArgs},
    match_rx::{self, MatchArgs},
    validate::{self, ValidateArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "optyx-cli", about = "Prescription matching CLI for optyx catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match a prescription against a catalog and print the results.
    Match(MatchArgs),
    /// List per-eye and averaged coating options for a prescription.
    Coatings(CoatingsArgs),
    /// Validate a catalog file and print its provenance.
    Validate(ValidateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Match(args) => match_rx::run(&args),
        Command::Coatings(args) => coatings::run(&args),
        Command::Validate(args) => validate::run(&args),
    }
}
