use std::ffi::OsString;
use std::io;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use claudesh::{Config, load_prompt, run_tool};

use super::args::Invocation;
use super::errors::AppError;

/// Diagnostics go to stderr, stdout belongs to the tool. Off unless `RUST_LOG`
/// asks for them, so a normal run adds nothing to the tool's own output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    // Ignore a second init, e.g. when embedded in a process that already set one up
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run(config: &Config, args: Vec<OsString>) -> Result<(), AppError> {
    let invocation = Invocation::classify(args)?;
    debug!("Classified arguments: {:?}", invocation);

    match invocation {
        Invocation::Version => {
            println!("{}", config.version);
        }
        Invocation::Script { path, flags } => {
            let prompt = load_prompt(&path)?;
            info!("Running {:?} through {}", path, config.tool);
            run_tool(config, &flags, &prompt)?;
        }
    }

    Ok(())
}
