use std::process;

use crate::options::error::OptionsError;

/// Exit status for usage errors, matching argument parsers.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Sink for usage errors found while verifying options.
///
/// Process-owning implementations terminate inside [`Diagnostics::usage_error`].
/// Implementations that return leave the caller to propagate the error.
pub trait Diagnostics {
    fn usage_error(&mut self, error: &OptionsError);
}

/// Prints `"{program}: error: {error}"` to stderr and exits with [`USAGE_EXIT_CODE`].
#[derive(Debug, Clone)]
pub struct ExitDiagnostics {
    program: String,
}

impl ExitDiagnostics {
    pub fn new(program: impl Into<String>) -> Self {
        ExitDiagnostics {
            program: program.into(),
        }
    }
}

impl Diagnostics for ExitDiagnostics {
    fn usage_error(&mut self, error: &OptionsError) {
        eprintln!("{}: error: {}", self.program, error);
        process::exit(USAGE_EXIT_CODE);
    }
}

/// Collects usage errors instead of exiting.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    messages: Vec<String>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn usage_error(&mut self, error: &OptionsError) {
        self.messages.push(error.to_string());
    }
}
