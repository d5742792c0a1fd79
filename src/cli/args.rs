//! Positional classification of the raw argument vector.
//!
//! The last token is always the script and everything before it is forwarded
//! to the tool untouched. Tokens are never interpreted as flags of our own,
//! so `--`, `-h` or a token that looks like a path pass through as-is. The
//! only exception is a leading `--version`/`-v`.
use std::ffi::OsString;
use std::path::PathBuf;

use super::errors::AppError;

const VERSION_FLAGS: [&str; 2] = ["--version", "-v"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the version and exit
    Version,
    /// Run a prompt script
    Script {
        /// Path to the prompt script (last token)
        path: PathBuf,
        /// Tokens forwarded to the tool, in order
        flags: Vec<OsString>,
    },
}

impl Invocation {
    /// Classify `args`, which must not include the program name. Tokens are
    /// kept as raw OS strings so non-UTF-8 paths and flags survive intact.
    pub fn classify(mut args: Vec<OsString>) -> Result<Self, AppError> {
        let Some(first) = args.first() else {
            return Err(AppError::MissingScript);
        };
        if first.to_str().is_some_and(|token| VERSION_FLAGS.contains(&token)) {
            return Ok(Invocation::Version);
        }

        let path = args.pop().map(PathBuf::from).ok_or(AppError::MissingScript)?;
        Ok(Invocation::Script { path, flags: args })
    }
}
