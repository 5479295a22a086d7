//! fast-window command-line interface
//!
//! Replays a CSV series through online window statistics and writes one
//! output column per statistic.

use std::process::ExitCode;

use fast_window_cli::args::Args;
use log::LevelFilter;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> ExitCode {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match fast_window_cli::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
