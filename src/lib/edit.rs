//! Positional sequence edits
//!
//! This module provides the core definitions and functionality for applying a
//! single user-specified correction to a nucleotide sequence: the closed set
//! of edit kinds, the 1-based to 0-based coordinate translation, and the pure
//! edit application itself. No I/O happens here; every edit produces a fresh
//! sequence value.

use crate::core::error::{GapcorError, Result};
use std::fmt;
use std::str::FromStr;

/// The three recognized correction kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insertion,
    Deletion,
    Replacement,
}

impl FromStr for EditKind {
    type Err = GapcorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "insertion" => Ok(EditKind::Insertion),
            "deletion" => Ok(EditKind::Deletion),
            "replacement" => Ok(EditKind::Replacement),
            _ => Err(GapcorError::InvalidEditKind(s.to_string())),
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditKind::Insertion => write!(f, "insertion"),
            EditKind::Deletion => write!(f, "deletion"),
            EditKind::Replacement => write!(f, "replacement"),
        }
    }
}

/// Precondition policy for [`EditKind::Replacement`].
///
/// The default reproduces the historical behavior: the region starting at the
/// edit offset is overwritten blindly, and a payload running past the end of
/// the sequence simply truncates there. [`ReplacementMode::Strict`] instead
/// requires the overwritten region to exist in full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplacementMode {
    #[default]
    Lenient,
    Strict,
}

/// The before/after pair produced by one edit invocation. Both sides are
/// retained for diff rendering and live only as long as the invocation.
#[derive(Clone, Debug)]
pub struct EditResult {
    pub original: Vec<u8>,
    pub edited: Vec<u8>,
}

/// A single correction to apply at a 1-based position.
#[derive(Clone, Debug)]
pub struct SequenceEdit {
    /// 1-based position as supplied by the caller (IGV convention).
    pub position: usize,
    pub kind: EditKind,
    /// Nucleotides to insert, expect removed, or substitute.
    pub payload: Vec<u8>,
    pub mode: ReplacementMode,
}

impl SequenceEdit {
    pub fn new(position: usize, kind: EditKind, payload: Vec<u8>) -> Self {
        Self {
            position,
            kind,
            payload,
            mode: ReplacementMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ReplacementMode) -> Self {
        self.mode = mode;
        self
    }

    /// Translate the 1-based position into a 0-based offset into `seq`,
    /// enforcing `1 <= position <= len + 1` (insertion at the end is legal).
    fn offset(&self, seq: &[u8]) -> Result<usize> {
        if self.position == 0 || self.position > seq.len() + 1 {
            return Err(GapcorError::PositionOutOfRange {
                position: self.position,
                length: seq.len(),
            });
        }
        Ok(self.position - 1)
    }

    /// Apply the edit to `seq`, returning the corrected sequence.
    ///
    /// Deletion verifies that the span at the offset equals the payload
    /// character for character before removing it. Replacement performs no
    /// such check under [`ReplacementMode::Lenient`].
    pub fn apply(&self, seq: &[u8]) -> Result<Vec<u8>> {
        let offset = self.offset(seq)?;

        match self.kind {
            EditKind::Insertion => {
                let mut edited = Vec::with_capacity(seq.len() + self.payload.len());
                edited.extend_from_slice(&seq[..offset]);
                edited.extend_from_slice(&self.payload);
                edited.extend_from_slice(&seq[offset..]);
                Ok(edited)
            }
            EditKind::Deletion => {
                let end = offset + self.payload.len();
                let found = &seq[offset..end.min(seq.len())];
                if end > seq.len() || found != self.payload.as_slice() {
                    return Err(GapcorError::DeletionMismatch {
                        position: self.position,
                        expected: String::from_utf8_lossy(&self.payload).into_owned(),
                        found: String::from_utf8_lossy(found).into_owned(),
                    });
                }
                let mut edited = Vec::with_capacity(seq.len() - self.payload.len());
                edited.extend_from_slice(&seq[..offset]);
                edited.extend_from_slice(&seq[end..]);
                Ok(edited)
            }
            EditKind::Replacement => {
                let end = offset + self.payload.len();
                if self.mode == ReplacementMode::Strict && end > seq.len() {
                    return Err(GapcorError::ReplacementOutOfBounds {
                        position: self.position,
                        payload_len: self.payload.len(),
                        length: seq.len(),
                    });
                }
                let mut edited = Vec::with_capacity(seq.len().max(end));
                edited.extend_from_slice(&seq[..offset]);
                edited.extend_from_slice(&self.payload);
                edited.extend_from_slice(&seq[end.min(seq.len())..]);
                Ok(edited)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_grows_sequence_and_is_removable() {
        let edit = SequenceEdit::new(3, EditKind::Insertion, b"GG".to_vec());
        let edited = edit.apply(b"ACGTACGT").unwrap();
        assert_eq!(edited, b"ACGGGTACGT");
        assert_eq!(edited.len(), 8 + 2);

        // Removing the inserted span reproduces the original.
        let mut restored = edited.clone();
        restored.drain(2..4);
        assert_eq!(restored, b"ACGTACGT");
    }

    #[test]
    fn insertion_at_end_appends() {
        let edit = SequenceEdit::new(9, EditKind::Insertion, b"TT".to_vec());
        assert_eq!(edit.apply(b"ACGTACGT").unwrap(), b"ACGTACGTTT");
    }

    #[test]
    fn deletion_removes_matching_span() {
        let edit = SequenceEdit::new(3, EditKind::Deletion, b"GT".to_vec());
        let edited = edit.apply(b"ACGTACGT").unwrap();
        assert_eq!(edited, b"ACACGT");
        assert_eq!(edited.len(), 8 - 2);
    }

    #[test]
    fn deletion_rejects_mismatched_span() {
        let edit = SequenceEdit::new(3, EditKind::Deletion, b"TT".to_vec());
        let err = edit.apply(b"ACGTACGT").unwrap_err();
        match err {
            GapcorError::DeletionMismatch {
                position,
                expected,
                found,
            } => {
                assert_eq!(position, 3);
                assert_eq!(expected, "TT");
                assert_eq!(found, "GT");
            }
            other => panic!("expected DeletionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn deletion_past_end_is_a_mismatch() {
        let edit = SequenceEdit::new(8, EditKind::Deletion, b"TT".to_vec());
        assert!(matches!(
            edit.apply(b"ACGTACGT").unwrap_err(),
            GapcorError::DeletionMismatch { .. }
        ));
    }

    #[test]
    fn replacement_overwrites_without_checking() {
        let edit = SequenceEdit::new(3, EditKind::Replacement, b"TT".to_vec());
        let edited = edit.apply(b"ACGTACGT").unwrap();
        assert_eq!(edited, b"ACTTACGT");
        assert_eq!(edited.len(), 8);
    }

    #[test]
    fn lenient_replacement_truncates_at_end() {
        let edit = SequenceEdit::new(7, EditKind::Replacement, b"AAAA".to_vec());
        assert_eq!(edit.apply(b"ACGTACGT").unwrap(), b"ACGTACAAAA");
    }

    #[test]
    fn strict_replacement_rejects_overrun() {
        let edit = SequenceEdit::new(7, EditKind::Replacement, b"AAAA".to_vec())
            .with_mode(ReplacementMode::Strict);
        assert!(matches!(
            edit.apply(b"ACGTACGT").unwrap_err(),
            GapcorError::ReplacementOutOfBounds {
                position: 7,
                payload_len: 4,
                length: 8,
            }
        ));
    }

    #[test]
    fn strict_replacement_within_bounds_matches_lenient() {
        let lenient = SequenceEdit::new(3, EditKind::Replacement, b"TT".to_vec());
        let strict = lenient.clone().with_mode(ReplacementMode::Strict);
        assert_eq!(
            lenient.apply(b"ACGTACGT").unwrap(),
            strict.apply(b"ACGTACGT").unwrap()
        );
    }

    #[test]
    fn position_zero_and_past_end_are_rejected() {
        for position in [0, 10] {
            let edit = SequenceEdit::new(position, EditKind::Insertion, b"A".to_vec());
            assert!(matches!(
                edit.apply(b"ACGTACGT").unwrap_err(),
                GapcorError::PositionOutOfRange { length: 8, .. }
            ));
        }
    }

    #[test]
    fn unknown_kind_fails_to_parse() {
        assert!(matches!(
            "inversion".parse::<EditKind>().unwrap_err(),
            GapcorError::InvalidEditKind(_)
        ));
        assert_eq!("Deletion".parse::<EditKind>().unwrap(), EditKind::Deletion);
    }
}
