use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing script argument (usage: claudesh [flags] <script>)")]
    MissingScript,

    #[error(transparent)]
    Pipeline(#[from] claudesh::Error),
}

impl AppError {
    /// Whether the error has already been reported by the tool itself
    pub fn is_silent(&self) -> bool {
        match self {
            AppError::MissingScript => false,
            AppError::Pipeline(e) => e.is_silent(),
        }
    }
}
