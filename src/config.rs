/// Name of the external tool, looked up on `PATH`.
pub const DEFAULT_TOOL: &str = "claude";

/// Version reported by `--version`. Release builds may stamp it through the
/// `CLAUDESH_VERSION` variable at compile time.
pub const VERSION: &str = match option_env!("CLAUDESH_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Settings fixed for the lifetime of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Executable the prompt is delivered to
    pub tool: String,
    /// Build version identifier
    pub version: &'static str,
}

impl Config {
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            version: VERSION,
        }
    }
}
