//! Launching the external tool: `-p` plus the pass-through flags, prompt on
//! stdin, stdout/stderr inherited so the tool talks to the user directly.
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::script::PromptText;

/// Flag telling the tool to answer a single prompt read from stdin
pub const PROMPT_FLAG: &str = "-p";

/// Argument list for the tool: `-p` followed by `flags` in their original order.
pub fn tool_args(flags: &[OsString]) -> Vec<OsString> {
    let mut args = Vec::with_capacity(flags.len() + 1);
    args.push(OsString::from(PROMPT_FLAG));
    args.extend(flags.iter().cloned());
    args
}

/// Run the configured tool once and block until it exits.
///
/// Succeeds only when the tool exits with status 0. There is no retry.
pub fn run_tool(config: &Config, flags: &[OsString], prompt: &PromptText) -> Result<()> {
    let args = tool_args(flags);
    debug!("Spawning {} with args {:?}", config.tool, args);

    let mut child = Command::new(&config.tool)
        .args(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Launch {
            tool: config.tool.clone(),
            source,
        })?;

    // Dropping the handle closes the pipe so the tool sees end of input.
    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(prompt.as_bytes()) {
            Ok(()) => {}
            // Tool stopped reading early; its exit status decides.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("{} closed stdin before reading the whole prompt", config.tool);
            }
            Err(source) => {
                drop(stdin);
                // Reap the child; the write error is what gets reported.
                let _ = child.wait();
                return Err(Error::PromptDelivery {
                    tool: config.tool.clone(),
                    source,
                });
            }
        }
    }

    let status = child.wait().map_err(|source| Error::Launch {
        tool: config.tool.clone(),
        source,
    })?;
    info!("{} finished: {}", config.tool, status);

    if status.success() {
        Ok(())
    } else {
        Err(Error::ToolExit {
            tool: config.tool.clone(),
            status,
        })
    }
}
