use gapcor_lib::edit::{EditKind, ReplacementMode, SequenceEdit};
use std::path::PathBuf;
use structopt::StructOpt;

/// CLI arguments for the `correct` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "correct")]
pub struct CorrectArgs {
    /// Input FASTA file. Expected to hold a single record; with several
    /// records the edit is applied to each at the same coordinates and the
    /// report reflects only the last one.
    pub input: PathBuf,

    /// 1-based position of the change (IGV coordinates).
    #[structopt(long, short = "p")]
    pub position: usize,

    /// Change type: insertion, deletion, or replacement.
    #[structopt(long = "change-type", short = "c")]
    pub change_type: EditKind,

    /// Nucleotides to insert, expect removed, or substitute.
    #[structopt(long, short = "n")]
    pub nucleotides: String,

    /// Base output directory; files land in `<main-path>/edited_sequences`.
    #[structopt(long = "main-path", short = "m", default_value = ".")]
    pub main_path: PathBuf,

    /// Require a replacement to stay within the sequence instead of the
    /// default blind overwrite that truncates at the end.
    #[structopt(long)]
    pub strict: bool,
}

/// Normalised configuration derived from [`CorrectArgs`].
#[derive(Debug, Clone)]
pub struct CorrectConfig {
    pub input: PathBuf,
    pub edit: SequenceEdit,
    pub main_path: PathBuf,
}

impl From<CorrectArgs> for CorrectConfig {
    fn from(args: CorrectArgs) -> CorrectConfig {
        let mode = if args.strict {
            ReplacementMode::Strict
        } else {
            ReplacementMode::Lenient
        };
        CorrectConfig {
            input: args.input,
            edit: SequenceEdit::new(args.position, args.change_type, args.nucleotides.into_bytes())
                .with_mode(mode),
            main_path: args.main_path,
        }
    }
}
