//! FASTA record parse/serialize boundary
//!
//! Thin wrappers over `bio::io::fasta` plus the record-level edit loop. The
//! editor and renderer never touch records directly; they see plain byte
//! sequences and get wired up here.

use crate::core::error::{GapcorError, Result};
use crate::edit::{EditResult, SequenceEdit};
use bio::io::fasta;
use std::io;

/// Parse every record from a FASTA source. An input with no parseable record
/// is rejected as [`GapcorError::EmptyInput`].
pub fn read_records<R: io::Read>(reader: R, source: &str) -> Result<Vec<fasta::Record>> {
    let records = fasta::Reader::new(reader)
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| GapcorError::Parse(format!("{}: {}", source, e)))?;
    if records.is_empty() {
        return Err(GapcorError::EmptyInput(source.to_string()));
    }
    Ok(records)
}

/// Serialize records to a FASTA sink.
pub fn write_records<W: io::Write>(writer: W, records: &[fasta::Record]) -> Result<()> {
    let mut writer = fasta::Writer::new(writer);
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Full header line of a record (id plus description), without the `>`.
pub fn record_header(record: &fasta::Record) -> String {
    match record.desc() {
        Some(desc) => format!("{} {}", record.id(), desc),
        None => record.id().to_string(),
    }
}

/// Apply `edit` to every record's sequence, returning the edited records
/// together with the `(original, edited)` pair of the **last** record.
///
/// Inputs are expected to hold a single record; with several records every
/// sequence is edited at the same coordinates, but only the last pair feeds
/// the diff report. That last-wins behavior matches the historical tool and
/// is deliberately preserved.
pub fn apply_to_records(
    records: &[fasta::Record],
    edit: &SequenceEdit,
) -> Result<(Vec<fasta::Record>, EditResult)> {
    let mut edited_records = Vec::with_capacity(records.len());
    let mut last_pair = None;

    for record in records {
        let original = record.seq().to_vec();
        let edited = edit.apply(&original)?;
        edited_records.push(fasta::Record::with_attrs(
            record.id(),
            record.desc(),
            &edited,
        ));
        last_pair = Some(EditResult { original, edited });
    }

    // read_records guarantees at least one record.
    let result = last_pair.ok_or_else(|| GapcorError::EmptyInput("no records to edit".into()))?;
    Ok((edited_records, result))
}
