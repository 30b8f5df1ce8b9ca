use thiserror::Error;

use crate::options::app::App;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// The desktop target's `--binary` is absent or is not an existing file.
    #[error("--binary path does not exist for {app}: {}", display_binary(.binary))]
    MissingBinary { app: App, binary: Option<String> },

    #[error("Unknown app: {0}")]
    UnknownApp(String),
}

fn display_binary(binary: &Option<String>) -> &str {
    binary.as_deref().unwrap_or("<not provided>")
}
