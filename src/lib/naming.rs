//! Output-name derivation from record headers
//!
//! GISAID-style headers carry a `/NNNN-NNN_` sample token; the derived base
//! name feeds both output files. The rest of the pipeline treats the name as
//! an opaque string.

use crate::core::error::{GapcorError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADER_TOKEN: Regex = Regex::new(r"/(\d{4}-\d{3})_").unwrap();
}

/// Derive the output base name from a record header, e.g.
/// `hCoV-19/region/1234-567_sample/2024` yields `1234-567_edited`.
pub fn derived_base_name(header: &str) -> Result<String> {
    HEADER_TOKEN
        .captures(header)
        .map(|caps| format!("{}_edited", &caps[1]))
        .ok_or_else(|| GapcorError::HeaderFormat(header.to_string()))
}
