//! Prompt script loading: read the file and drop a leading interpreter
//! directive (`#!...`) so only the prompt body reaches the tool.
//!
//! The directive is not inspected beyond its `#!` prefix. Whatever follows it,
//! such as default flags, is treated as documentation for the calling shell
//! and never merged into the invocation. The body is handled as raw bytes and
//! reaches the tool without any re-encoding.
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

const SHEBANG: &[u8] = b"#!";

/// Prompt body of a script, ready to be written to the tool's stdin
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptText(Vec<u8>);

impl PromptText {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&[u8]> for PromptText {
    fn from(content: &[u8]) -> Self {
        PromptText(strip_shebang(content).to_vec())
    }
}

impl From<&str> for PromptText {
    fn from(content: &str) -> Self {
        PromptText::from(content.as_bytes())
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Remove the first line of `content` if it starts with `#!`.
///
/// Every other line, blank ones and trailing newlines included, is kept
/// exactly as written. Content without a directive is returned untouched.
pub fn strip_shebang(content: &[u8]) -> &[u8] {
    if !content.starts_with(SHEBANG) {
        return content;
    }
    match content.iter().position(|&b| b == b'\n') {
        Some(end) => &content[end + 1..],
        None => &[],
    }
}

/// Read the script at `path` and return its prompt body.
///
/// The file is fully read and closed before this returns.
pub fn load_prompt(path: &Path) -> Result<PromptText> {
    let content = fs::read(path).map_err(|source| Error::Script {
        path: path.to_path_buf(),
        source,
    })?;

    let prompt = PromptText::from(content.as_slice());
    debug!(
        "Loaded script {:?}: {} bytes, {} bytes of prompt",
        path,
        content.len(),
        prompt.len()
    );
    Ok(prompt)
}
