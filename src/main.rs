use clap::Parser;
use rawprune::clean;
use rawprune::cli::Cli;
use rawprune::config::Config;
use rawprune::logging;
use rawprune::report;
use rawprune::Result;
use tracing::error;

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    report::print_start(&config);
    let summary = clean::run(&config.root, config.mode)?;
    report::print(&summary, &config)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        if e.is_argument_error() {
            error!("{e}");
        } else {
            error!("Failed checking directory: {e}");
        }
        std::process::exit(1);
    }
}
