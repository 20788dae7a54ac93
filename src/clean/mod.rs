//! Deletion strategies.
//!
//! The scanner decides what goes, a [`Deleter`] decides what "going" means:
//! - Dry run mode (default): logs the path that would be deleted
//! - Execute mode: removes the file from disk
//!
//! Only single files are ever removed, never directories.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::scan::{self, ScanSummary};

pub trait Deleter {
    fn delete(&self, path: &Path) -> io::Result<()>;
}

/// Reports the path and leaves the file alone.
pub struct DryRun;

impl Deleter for DryRun {
    fn delete(&self, path: &Path) -> io::Result<()> {
        info!("{}", path.display());
        Ok(())
    }
}

pub struct Remover;

impl Deleter for Remover {
    fn delete(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanMode {
    DryRun,
    Execute,
}

impl CleanMode {
    pub fn is_dry_run(self) -> bool {
        matches!(self, CleanMode::DryRun)
    }

    pub fn deleter(self) -> Box<dyn Deleter> {
        match self {
            CleanMode::DryRun => Box::new(DryRun),
            CleanMode::Execute => Box::new(Remover),
        }
    }
}

pub fn run(root: &Path, mode: CleanMode) -> Result<ScanSummary> {
    let deleter = mode.deleter();
    scan::scan_dir(root, deleter.as_ref())
}
