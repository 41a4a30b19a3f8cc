//! GAPCOR - GISAID gap correction toolkit
//!
//! Gapcor applies a single user-specified correction to a genomic sequence in
//! a FASTA file and renders a colorized HTML diff report. Edits are given in
//! 1-based (IGV) coordinates as one of three kinds: insertion, deletion, or
//! replacement. Deletions verify that the removed span matches the supplied
//! nucleotides before anything is written.
//!
//! # Usage
//!
//! ```bash
//! # Insert two nucleotides after position 240
//! gapcor correct input.fasta -p 241 -c insertion -n GG -m /data/run42
//!
//! # Delete a span, verifying it matches
//! gapcor correct input.fasta -p 241 -c deletion -n GG -m /data/run42
//!
//! # Replace a span, refusing to run past the sequence end
//! gapcor correct input.fasta -p 241 -c replacement -n GG --strict
//! ```
//!
//! Outputs land in `<main-path>/edited_sequences/<name>_edited.{fasta,html}`,
//! where `<name>` is the sample token parsed from the record header.

extern crate gapcor_lib;
pub mod commands;
use anyhow::Result;
use env_logger::Env;
use gapcor_lib::utils;
use log::*;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case", author, about)]
/// Commands for correcting FASTA sequences with gapcor
struct Args {
    #[structopt(subcommand)]
    subcommand: Subcommand,
}

#[derive(StructOpt)]
enum Subcommand {
    /// Apply one positional correction and render the HTML diff report
    Correct(commands::CorrectArgs),
}

impl Subcommand {
    fn run(self) -> Result<()> {
        match self {
            Subcommand::Correct(args) => commands::run_correct(args)?,
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = Args::from_args().subcommand.run() {
        if utils::is_broken_pipe(&err) {
            std::process::exit(0);
        }
        error!("{}", err);
        std::process::exit(1);
    }
    Ok(())
}
