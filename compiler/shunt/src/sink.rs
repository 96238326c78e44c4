//! Per-expression output files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::json;
use shunt_ast::{format_number, render_tree};
use shunt_eval::Evaluation;

use crate::config::OutputMode;
use crate::pipeline::ShuntError;

/// Output file for line `line_index` of `input`: the input path with its
/// final extension removed and `_<line_index>` appended.
///
/// `dir/exprs.txt` line 2 becomes `dir/exprs_2`; only the file name is
/// inspected, so dots in directory names are left alone.
pub fn output_path(input: &Path, line_index: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_{line_index}"))
}

/// Serialize one outcome.
pub fn render_outcome(outcome: &Result<Evaluation, ShuntError>, mode: OutputMode) -> String {
    match (mode, outcome) {
        (OutputMode::Text, Ok(evaluation)) => format!(
            "{}\n{}",
            format_number(evaluation.value),
            render_tree(&evaluation.tree)
        ),
        (OutputMode::Text, Err(e)) => e.to_string(),
        (OutputMode::Json, Ok(evaluation)) => format!(
            "{:#}",
            json!({ "value": evaluation.value, "tree": &evaluation.tree })
        ),
        (OutputMode::Json, Err(e)) => format!("{:#}", json!({ "error": e.to_string() })),
    }
}

/// Write one outcome to `target`, replacing any existing file.
pub fn write_outcome(
    target: &Path,
    outcome: &Result<Evaluation, ShuntError>,
    mode: OutputMode,
) -> io::Result<()> {
    fs::write(target, render_outcome(outcome, mode))
}
