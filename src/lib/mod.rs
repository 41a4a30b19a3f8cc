//! GAPCOR: GISAID gap correction toolkit
//!
//! Gapcor applies a single user-specified correction (insertion, deletion, or
//! replacement of nucleotides at a 1-based position) to a genomic sequence
//! stored in a FASTA file, then renders a colorized HTML diff report with
//! column-aligned position rulers.
//!
//! # Modules
//!
//! The main modules are:
//! - [`edit`]: the pure sequence editor (coordinate translation, edit kinds,
//!   deletion match-check)
//! - [`report`]: the pure HTML report renderer (rulers, escaping, highlight)
//! - [`fasta`]: record parse/serialize boundary over `bio::io::fasta`
//! - [`naming`]: output-name derivation from record headers
//! - [`core`]: error taxonomy and shared helpers
//! - [`utils`]: utility re-exports used throughout the binary

pub mod core;
pub mod edit;
pub mod fasta;
pub mod naming;
pub mod report;
pub mod utils;

pub use crate::core::error::{GapcorError, Result};
pub use crate::edit::{EditKind, EditResult, ReplacementMode, SequenceEdit};
