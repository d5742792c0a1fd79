//! Crate-level error type and `Result` alias for the invocation pipeline.
//! Covers reading the prompt script, launching the external tool, feeding it
//! the prompt, and a non-zero exit from the tool itself.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send prompt to {tool}: {source}")]
    PromptDelivery {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed ({status})")]
    ToolExit { tool: String, status: ExitStatus },
}

impl Error {
    /// Whether the message is worth printing. A failing tool has already
    /// streamed its own diagnostics to our stderr.
    pub fn is_silent(&self) -> bool {
        matches!(self, Error::ToolExit { .. })
    }
}
