//! I/O types for the REPL.
//!
//! These types define the interface between the REPL core and its host environment.

use serde::{Deserialize, Serialize};

/// A line of input from the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLine {
    pub line: String,
}

/// A signal from the host (Ctrl+C, Ctrl+D, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "lowercase")]
pub enum Signal {
    /// User pressed Ctrl+C (interrupt).
    Interrupt,
    /// User pressed Ctrl+D (end of file).
    Eof,
}

/// Output to be written by the REPL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub text: String,
    #[serde(default)]
    pub style: OutputStyle,
}

impl Output {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Normal,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Info,
        }
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Banner,
        }
    }

    /// Generated code, printed without decoration so it can be copied.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Code,
        }
    }
}

/// Style hint for output rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Normal output (already contains ANSI codes if applicable).
    #[default]
    Normal,
    /// Error message (host may add red prefix).
    Error,
    /// Informational message (host may style in cyan).
    Info,
    /// Banner/startup message.
    Banner,
    /// Generated declaration text.
    Code,
}

/// Prompt configuration sent from core to host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptConfig {
    /// Sections currently shown.
    pub visible_sections: usize,
    /// Sections on the form.
    pub total_sections: usize,
    /// Whether any code has been generated this session.
    pub has_code: bool,
}

/// Reason the REPL exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// User typed 'exit' or 'quit'.
    UserExit,
    /// User pressed Ctrl+D.
    Eof,
}
