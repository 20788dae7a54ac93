pub mod json;
pub mod text;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::scan::ScanSummary;

pub fn print_start(config: &Config) {
    if config.mode.is_dry_run() {
        info!("{}", text::DRY_RUN_BANNER);
    }
    info!("{}", text::start_line(&config.root));
}

pub fn print(summary: &ScanSummary, config: &Config) -> Result<()> {
    info!("{}", text::summary_line(config.mode, summary));

    if config.json_output {
        println!("{}", json::render(&config.root, config.mode, summary)?);
    }

    Ok(())
}
