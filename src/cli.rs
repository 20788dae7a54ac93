use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rawprune")]
#[command(about = "Deletes JPEGs that have a RAW twin in the same directory")]
#[command(version)]
pub struct Cli {
    /// Actually delete pictures. Without this flag nothing is removed
    #[arg(short = 'd', long = "delete", default_value_t = false)]
    pub delete: bool,

    /// Also print the summary as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show every directory as it is checked
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Directory to check, subdirectories included
    pub path: PathBuf,
}

impl Cli {
    /// returns true if this is a dry run (show what would be deleted)
    pub fn is_dry_run(&self) -> bool {
        !self.delete
    }
}
