use anyhow::Result;
use clap::Parser;
use dispatch_bench::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if let Err(error) = cli::run(args) {
        let report = cli::failure_report(&error);
        eprintln!("{}", report.message);
        std::process::exit(report.exit_code);
    }

    Ok(())
}
