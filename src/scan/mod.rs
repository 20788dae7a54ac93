pub mod classify;

use std::collections::HashSet;
use std::fs;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::clean::Deleter;
use crate::error::{PruneError, Result};
use classify::{lowered_no_ext, FileKind};

/// Totals for one directory and everything below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files_deleted: u64,
    pub bytes_freed: u64,
}

impl AddAssign for ScanSummary {
    fn add_assign(&mut self, other: ScanSummary) {
        self.files_deleted += other.files_deleted;
        self.bytes_freed += other.bytes_freed;
    }
}

struct JpegCandidate {
    path: PathBuf,
    key: String,
}

/// Checks `dir` and all of its subdirectories, handing every JPEG that has a
/// RAW twin in the same directory to `deleter`.
///
/// Subdirectories are scanned as soon as they are listed. Matching for the
/// current directory only starts once all of its entries have been seen.
/// The first error anywhere in the tree aborts the scan.
pub fn scan_dir(dir: &Path, deleter: &dyn Deleter) -> Result<ScanSummary> {
    debug!(dir = %dir.display(), "checking directory");

    let mut summary = ScanSummary::default();
    let mut raw_names: HashSet<String> = HashSet::new();
    let mut jpegs: Vec<JpegCandidate> = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| PruneError::ReadDir {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();

        // a directory still counts as a RAW twin, but is never a deletion candidate
        if entry.file_type().is_dir() {
            summary += scan_dir(entry.path(), deleter)?;
            if FileKind::classify(&name) == FileKind::Raw {
                raw_names.insert(lowered_no_ext(&name));
            }
            continue;
        }

        match FileKind::classify(&name) {
            FileKind::Raw => {
                raw_names.insert(lowered_no_ext(&name));
            }
            FileKind::Jpeg => jpegs.push(JpegCandidate {
                key: lowered_no_ext(&name),
                path: entry.into_path(),
            }),
            FileKind::Other => {}
        }
    }

    for jpeg in jpegs {
        if !raw_names.contains(&jpeg.key) {
            continue;
        }

        let metadata = fs::metadata(&jpeg.path).map_err(|source| PruneError::Stat {
            path: jpeg.path.clone(),
            source,
        })?;

        deleter.delete(&jpeg.path).map_err(|source| PruneError::Delete {
            path: jpeg.path.clone(),
            source,
        })?;

        debug!(path = %jpeg.path.display(), bytes = metadata.len(), "jpeg has a raw twin");

        summary.files_deleted += 1;
        summary.bytes_freed += metadata.len();
    }

    Ok(summary)
}
