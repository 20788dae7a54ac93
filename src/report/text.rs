//! Human readable log lines for the start and end of a run.

use std::path::Path;

use crate::clean::CleanMode;
use crate::scan::ScanSummary;
use crate::util::format_mebibytes;

pub const DRY_RUN_BANNER: &str =
    "Running in dry mode, no files will actually be deleted. Run with '-d' to do so.";

pub fn start_line(root: &Path) -> String {
    format!("Going to check {root:?} and subdirectories for unnecessary JPEGs...")
}

pub fn summary_line(mode: CleanMode, summary: &ScanSummary) -> String {
    let freed = format_mebibytes(summary.bytes_freed);

    match mode {
        CleanMode::Execute => format!(
            "Successfully deleted {} files and freed {freed} Mebibytes.",
            summary.files_deleted
        ),
        CleanMode::DryRun => format!(
            "Would have deleted {} files and freed {freed} Mebibytes, but was running in dry mode. To actually delete files run with '-d'.",
            summary.files_deleted
        ),
    }
}
