mod args;

use anyhow::{Context, Result};
use gapcor_lib::utils;
use gapcor_lib::{fasta, naming, report};
use log::info;
use std::fs::{self, File};
use std::io::BufReader;

pub use args::{CorrectArgs, CorrectConfig};

/// Execute the `correct` command end-to-end.
///
/// All fallible work (parsing, name derivation, editing, rendering) happens
/// before the first write, so a failure never leaves partial output behind.
pub fn run_correct(args: CorrectArgs) -> Result<()> {
    let config: CorrectConfig = args.into();

    info!("Running gapcor correct on {:?}", config.input);
    let source = config.input.display().to_string();
    let file = File::open(&config.input).with_context(|| format!("Failed to open {}", source))?;
    let records = fasta::read_records(BufReader::new(file), &source)?;

    let base_name = naming::derived_base_name(&fasta::record_header(&records[0]))?;
    let (edited_records, result) = fasta::apply_to_records(&records, &config.edit)?;
    let html = report::render_report(&result.original, &result.edited, &config.edit);

    let output_folder = config.main_path.join("edited_sequences");
    utils::ensure_dir(&output_folder)?;
    let fasta_path = output_folder.join(format!("{}.fasta", base_name));
    let html_path = output_folder.join(format!("{}.html", base_name));

    fasta::write_records(File::create(&fasta_path)?, &edited_records)?;
    fs::write(&html_path, html)?;

    info!("Edited FASTA -> {:?}", fasta_path);
    info!("Report -> {:?}", html_path);
    println!("FASTA file edited and {} generated.", base_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapcor_lib::edit::EditKind;
    use std::io::Write;

    const HEADER: &str = ">hCoV-19/region/1234-567_sample/2024 passage";

    fn write_input(dir: &tempfile::TempDir, header: &str, seq: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.fasta");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "{}", header).unwrap();
        writeln!(file, "{}", seq).unwrap();
        path
    }

    fn correct_args(input: std::path::PathBuf, main_path: std::path::PathBuf) -> CorrectArgs {
        CorrectArgs {
            input,
            position: 3,
            change_type: EditKind::Deletion,
            nucleotides: "GT".to_string(),
            main_path,
            strict: false,
        }
    }

    #[test]
    fn writes_fasta_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, HEADER, "ACGTACGT");

        run_correct(correct_args(input, dir.path().to_path_buf())).unwrap();

        let out = dir.path().join("edited_sequences");
        let fasta_out = fs::read_to_string(out.join("1234-567_edited.fasta")).unwrap();
        assert!(fasta_out.starts_with(">hCoV-19/region/1234-567_sample/2024 passage"));
        assert!(fasta_out.contains("ACACGT"));

        let html_out = fs::read_to_string(out.join("1234-567_edited.html")).unwrap();
        assert!(html_out.contains("<td>Original Sequence</td><td><pre>ACGTACGT</pre></td>"));
        assert!(html_out.contains("background-color: red;"));
    }

    #[test]
    fn header_without_token_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, ">plain_header", "ACGTACGT");

        assert!(run_correct(correct_args(input, dir.path().to_path_buf())).is_err());
        assert!(!dir.path().join("edited_sequences").exists());
    }

    #[test]
    fn deletion_mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, HEADER, "ACTTACGT");

        assert!(run_correct(correct_args(input, dir.path().to_path_buf())).is_err());
        assert!(!dir.path().join("edited_sequences").exists());
    }
}
