//! I/O abstraction for the REPL.
//!
//! The core interacts only through the `IoHost` trait, so the same loop runs
//! against a terminal or against the in-memory [`TestHost`].

pub mod test_host;
pub mod types;

pub use test_host::TestHost;
pub use types::*;

/// Error type for I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io(e.to_string())
    }
}

/// Host interface for REPL I/O operations.
pub trait IoHost {
    /// Wait for input to become available.
    ///
    /// This may block (for terminal hosts) or return immediately (for
    /// in-memory hosts). After this returns, `read_input()` or
    /// `read_signal()` yields whatever arrived.
    fn wait_for_input(&mut self) -> Result<(), IoError>;

    /// Read the next input line, if available.
    fn read_input(&mut self) -> Result<Option<InputLine>, IoError>;

    /// Read any pending signal (Ctrl+C, Ctrl+D).
    fn read_signal(&mut self) -> Result<Option<Signal>, IoError>;

    /// Write output to the user.
    fn write_output(&mut self, output: Output) -> Result<(), IoError>;

    /// Update the prompt rendered before the next input.
    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}
