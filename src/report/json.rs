//! JSON output for the final summary.
//!
//! Serializes the run totals for scripting and piping.

use std::borrow::Cow;
use std::path::Path;

use serde::Serialize;

use crate::clean::CleanMode;
use crate::error::Result;
use crate::scan::ScanSummary;

#[derive(Serialize)]
struct JsonSummary<'a> {
    root: Cow<'a, str>,
    mode: CleanMode,
    #[serde(flatten)]
    summary: &'a ScanSummary,
}

pub fn render(root: &Path, mode: CleanMode, summary: &ScanSummary) -> Result<String> {
    // lossy so a run that already deleted files never fails on its report
    let doc = JsonSummary { root: root.to_string_lossy(), mode, summary };
    Ok(serde_json::to_string_pretty(&doc)?)
}
