#![doc = r#"
claudesh: run prompt files as executable scripts.

A prompt script is a plain text file whose body is sent to the `claude` CLI.
Give it a shebang and the executable bit and it runs like any other script:

```text
#!/usr/bin/env claudesh
Summarize the files in the current directory.
```

`./summary.prompt --model opus` then runs `claude -p --model opus` with the
body (minus the shebang line) on stdin, and the tool's output, errors and exit
status reach the caller unchanged.

Pipeline
--------
1. [`load_prompt`] reads the script and drops the `#!` line ([`strip_shebang`]).
2. [`run_tool`] launches the tool with `-p` + pass-through flags ([`tool_args`]),
   writes the prompt to its stdin and waits for it.

```rust,no_run
use std::ffi::OsString;
use std::path::Path;
use claudesh::{load_prompt, run_tool, Config};

fn main() -> claudesh::Result<()> {
    let config = Config::default();
    let prompt = load_prompt(Path::new("summary.prompt"))?;
    run_tool(&config, &[OsString::from("--model"), OsString::from("opus")], &prompt)
}
```

Error handling
--------------
All functions return `claudesh::Result<T>`. A non-zero exit from the tool is
[`Error::ToolExit`]; the tool has already written its own diagnostics, so
[`Error::is_silent`] tells callers not to print anything more.
"#]

pub mod config;
pub mod error;
pub mod invoke;
pub mod script;

pub use config::{Config, DEFAULT_TOOL, VERSION};
pub use error::{Error, Result};
pub use invoke::{PROMPT_FLAG, run_tool, tool_args};
pub use script::{PromptText, load_prompt, strip_shebang};
