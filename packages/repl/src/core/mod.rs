//! Platform-independent REPL core.
//!
//! The loop talks to the user only through the `IoHost` trait, so the same
//! core runs in a terminal or against a scripted in-memory host.

use metagen_form::{FormSession, Section};

use crate::commands::{self, CommandResult};
use crate::io::{ExitReason, IoError, IoHost, Output, PromptConfig, Signal};

/// The platform-independent REPL core.
pub struct ReplCore {
    session: FormSession,
}

impl ReplCore {
    /// A core over a fresh form session.
    pub fn new() -> Self {
        Self::with_session(FormSession::new())
    }

    pub fn with_session(session: FormSession) -> Self {
        Self { session }
    }

    /// Run the REPL loop, reading/writing through the provided I/O host.
    ///
    /// Returns the reason for exiting (user exit or EOF).
    pub fn run(&mut self, io: &mut impl IoHost) -> Result<ExitReason, IoError> {
        io.write_output(Output::banner(BANNER))?;

        loop {
            self.update_prompt(io)?;
            io.wait_for_input()?;

            if let Some(signal) = io.read_signal()? {
                match signal {
                    Signal::Eof => {
                        io.write_output(Output::info("Goodbye!"))?;
                        io.flush()?;
                        return Ok(ExitReason::Eof);
                    }
                    Signal::Interrupt => {
                        io.write_output(Output::info("^C (use 'exit' to quit)"))?;
                        continue;
                    }
                }
            }

            let input = match io.read_input()? {
                Some(input) => input,
                None => continue,
            };

            match commands::execute(&input.line, &mut self.session) {
                CommandResult::Ok { display: None } => {}
                CommandResult::Ok {
                    display: Some(output),
                } => {
                    io.write_output(Output::normal(output))?;
                }
                CommandResult::Code(code) => {
                    io.write_output(Output::code(code))?;
                }
                CommandResult::Info(msg) => {
                    io.write_output(Output::info(msg))?;
                }
                CommandResult::Error(msg) => {
                    log::debug!("command '{}' failed: {}", input.line.trim(), msg);
                    io.write_output(Output::error(msg))?;
                }
                CommandResult::Help => {
                    io.write_output(Output::normal(commands::format_help()))?;
                }
                CommandResult::Exit => {
                    io.write_output(Output::info("Goodbye!"))?;
                    io.flush()?;
                    return Ok(ExitReason::UserExit);
                }
            }

            io.flush()?;
        }
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    fn update_prompt(&self, io: &mut impl IoHost) -> Result<(), IoError> {
        io.write_prompt(PromptConfig {
            visible_sections: self.session.visibility().visible().count(),
            total_sections: Section::ALL.len(),
            has_code: !self.session.generated_code().is_empty(),
        })
    }
}

impl Default for ReplCore {
    fn default() -> Self {
        Self::new()
    }
}

const BANNER: &str = r#"
                 _
  _ __ ___   ___| |_ __ _  __ _  ___ _ __
 | '_ ` _ \ / _ \ __/ _` |/ _` |/ _ \ '_ \
 | | | | | |  __/ || (_| | (_| |  __/ | | |
 |_| |_| |_|\___|\__\__,_|\__, |\___|_| |_|
                          |___/

Next.js metadata generator. Type 'help' for commands, 'exit' to quit.
"#;
