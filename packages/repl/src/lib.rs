//! # metagen-repl
//!
//! An interactive generator for Next.js `metadata` exports.
//!
//! The REPL edits one form session: a metadata tree seeded with Next's usual
//! fields, grouped into sections that can be hidden. `generate` renders the
//! tree as `export const metadata = {...}`.
//!
//! ## Features
//!
//! - Write any field by dotted path; text is coerced the way its input would
//! - Tab completion for commands, field paths and section names
//! - Syntax highlighting for input
//! - Vi mode support (detected from EDITOR, .inputrc, or METAGEN_EDIT_MODE)
//! - Command history
//!
//! ## Usage
//!
//! ```bash
//! # Run the REPL
//! metagen
//!
//! # Inside the REPL:
//! > set title.default My App
//! > set robots.index off
//! > hide twitter
//! > generate
//!
//! # Or without the REPL:
//! metagen --typed --set title.default="My App" --print
//! ```

pub mod commands;
pub mod completer;
pub mod config;
pub mod core;
pub mod highlighter;
pub mod host;
pub mod io;

pub use config::{CliError, Config, EditMode};
pub use crate::core::ReplCore;

/// Run the binary: apply `--set` writes, then either print the code or
/// start the interactive loop.
pub fn run(config: &Config) -> Result<(), CliError> {
    let mut session = config.build_session()?;

    if config.print {
        println!("{}", session.generate());
        return Ok(());
    }

    let mut host = host::TerminalHost::new(config.edit_mode())?;
    let reason = ReplCore::with_session(session).run(&mut host)?;
    log::debug!("REPL exited: {:?}", reason);
    Ok(())
}
