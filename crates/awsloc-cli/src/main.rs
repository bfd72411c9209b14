//! awsloc — Command-line interface for AWS Location Service place indexes
//!
//! Each invocation runs one subcommand, makes at most one service call and
//! exits. Logs go to stderr so `--json` output on stdout stays parseable.
//!
//! Usage examples
//! --------------
//!
//! - Create and inspect an index
//!   $ awsloc create --index places --description "demo" --tags env=dev,team=geo
//!   $ awsloc describe --index places
//!
//! - List every index as JSON
//!   $ awsloc list --json
//!
//! - Reverse geocode a coordinate
//!   $ awsloc position --index places --lat 40.7 --lon -73.9
//!
//! - Autocomplete and geocode free text
//!   $ awsloc suggestion --index places --text "eiffel tow" --country FRA
//!   $ awsloc text --index places --text "Louvre" --x1 2.2 --y1 48.8 --x2 2.4 --y2 48.9
//!
//! `RUST_LOG` overrides `--loglevel` when set.
use awsloc_cli::args::{CliArgs, LogLevel};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.loglevel);

    match awsloc_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
