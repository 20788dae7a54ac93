use std::fs;
use std::path::{Path, PathBuf};

use crate::clean::CleanMode;
use crate::cli::Cli;
use crate::error::{PruneError, Result};

pub struct Config {
    pub root: PathBuf,
    pub mode: CleanMode,
    pub json_output: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mode = if cli.is_dry_run() {
            CleanMode::DryRun
        } else {
            CleanMode::Execute
        };

        Ok(Config {
            root: resolve_root(&cli.path)?,
            mode,
            json_output: cli.json,
        })
    }
}

// the scanner expects an absolute directory, relative input is joined onto the cwd
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|source| PruneError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = fs::metadata(&absolute).map_err(|source| PruneError::InvalidPath {
        path: absolute.clone(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(PruneError::NotADirectory { path: absolute });
    }

    Ok(absolute)
}
