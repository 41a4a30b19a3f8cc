//! HTML diff report rendering
//!
//! Produces a self-contained HTML document with four monospaced rows: a
//! spaced decimal ruler, a compact repeating-digit ruler, the original
//! sequence, and the edited sequence with the changed span highlighted. All
//! functions here are pure string transformations; writing the document to
//! disk is the caller's concern.

use crate::edit::{EditKind, SequenceEdit};

/// Repeating-digit ruler: position `i` is labeled `i % 10`, no separator.
/// The result is exactly `length` characters long.
pub fn digit_ruler(length: usize) -> String {
    (1..=length)
        .map(|i| char::from_digit((i % 10) as u32, 10).unwrap_or('0'))
        .collect()
}

/// Spaced ruler: `"1"` padded to ten columns, then every multiple of ten up
/// to `length` left-justified in a ten-character field. The loop stops at the
/// last multiple of ten, so trailing positions stay unlabeled.
pub fn spaced_ruler(length: usize) -> String {
    let mut fields = vec![format!("1{}", " ".repeat(9))];
    let mut mark = 10;
    while mark <= length {
        fields.push(format!("{:<10}", mark));
        mark += 10;
    }
    fields.concat()
}

/// Escape one sequence character for HTML. Each character is escaped
/// independently so multi-character entities are never split across
/// highlight boundaries.
fn escape_char(c: u8) -> String {
    match c {
        b'&' => "&amp;".to_string(),
        b'<' => "&lt;".to_string(),
        b'>' => "&gt;".to_string(),
        b'"' => "&quot;".to_string(),
        b'\'' => "&#x27;".to_string(),
        other => (other as char).to_string(),
    }
}

fn background_color(kind: EditKind) -> &'static str {
    match kind {
        EditKind::Insertion => "green",
        EditKind::Deletion => "red",
        EditKind::Replacement => "#800080",
    }
}

/// Render a sequence row with no highlighting.
pub fn render_sequence(seq: &[u8]) -> String {
    let fragments: Vec<String> = seq.iter().map(|&c| escape_char(c)).collect();
    fragments.concat()
}

/// Render the edited-sequence row, wrapping characters inside the changed
/// span in an inline-styled `<span>`.
///
/// A character at 0-based index `i` is inside the span when
/// `i + 1 >= position` and `i + 1 < position + len(payload)`, i.e. 1-based
/// positions `position ..= position + len(payload) - 1`. The window is applied
/// uniformly for every edit kind, so for a deletion near the end of the
/// sequence it may fall past the shortened sequence and cover no remaining
/// characters at all.
pub fn render_edited_sequence(seq: &[u8], edit: &SequenceEdit) -> String {
    let style_bg = background_color(edit.kind);
    let fragments: Vec<String> = seq
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let inside = i + 1 >= edit.position && i + 1 < edit.position + edit.payload.len();
            if inside {
                format!(
                    "<span style='color: black; font-size: larger; background-color: {};'>{}</span>",
                    style_bg,
                    escape_char(c)
                )
            } else {
                escape_char(c)
            }
        })
        .collect();
    fragments.concat()
}

/// Assemble the full report document. Rulers are sized to the original
/// sequence, matching the historical layout.
pub fn render_report(original: &[u8], edited: &[u8], edit: &SequenceEdit) -> String {
    let rows = vec![
        "<html><head><title>FASTA Sequence Edit Report</title></head><body>".to_string(),
        "<h1>FASTA Sequence Edit Report</h1>".to_string(),
        "<table border='1'><tr><th>Type</th><th>Sequence</th></tr>".to_string(),
        format!(
            "<tr><td>Numbering (spaced)</td><td><pre>{}</pre></td></tr>",
            spaced_ruler(original.len())
        ),
        format!(
            "<tr><td>Numbering</td><td><pre>{}</pre></td></tr>",
            digit_ruler(original.len())
        ),
        format!(
            "<tr><td>Original Sequence</td><td><pre>{}</pre></td></tr>",
            render_sequence(original)
        ),
        format!(
            "<tr><td>Edited Sequence</td><td><pre>{}</pre></td></tr>",
            render_edited_sequence(edited, edit)
        ),
        "</table></body></html>".to_string(),
    ];
    rows.concat()
}
