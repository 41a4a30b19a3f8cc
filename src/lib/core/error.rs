//! Error types for the gapcor library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GapcorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FASTA file is empty or not in the correct format: {0}")]
    EmptyInput(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid change type: {0}. Must be 'insertion', 'deletion', or 'replacement'")]
    InvalidEditKind(String),

    #[error("The sequence at position {position} does not match the provided nucleotides for deletion: expected '{expected}', found '{found}'")]
    DeletionMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Header does not match expected format: {0}")]
    HeaderFormat(String),

    #[error("Position {position} is out of range for a sequence of length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    #[error("Strict replacement at position {position} with {payload_len} nucleotides overruns a sequence of length {length}")]
    ReplacementOutOfBounds {
        position: usize,
        payload_len: usize,
        length: usize,
    },
}

pub type Result<T> = std::result::Result<T, GapcorError>;
