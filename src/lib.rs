pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scan;
pub mod util;

pub use error::{PruneError, Result};
