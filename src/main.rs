//! claudesh CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: classify args, run the prompt script
//! through the tool, and exit 0 on success or 1 on any failure.

use std::ffi::OsString;
use std::process::ExitCode;

use claudesh::Config;

mod cli;

fn main() -> ExitCode {
    cli::init_logging();

    let config = Config::default();
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    match cli::run(&config, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_silent() {
                eprintln!("claudesh: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
