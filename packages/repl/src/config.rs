//! Command-line configuration.

use clap::{ArgAction, Parser};
use log::LevelFilter;

use metagen_codegen::{Declaration, Serializer, NEXT_METADATA_TYPE};
use metagen_core_store::{FieldPath, PathError};
use metagen_form::FormSession;

use crate::io::IoError;

/// Errors that end the `metagen` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("--set expects PATH=VALUE, got '{0}'")]
    Assignment(String),

    #[error("invalid path in --set: {0}")]
    Path(#[from] PathError),

    #[error(transparent)]
    Store(#[from] metagen_core_store::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Line editing mode for the terminal host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Vi,
    Emacs,
}

/// metagen - generate Next.js `metadata` exports interactively
#[derive(Parser, Debug, Clone)]
#[command(name = "metagen")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Force vi editing mode
    #[arg(long, conflicts_with = "emacs")]
    pub vi: bool,

    /// Force emacs editing mode
    #[arg(long)]
    pub emacs: bool,

    /// Name of the exported binding
    #[arg(long, default_value = "metadata", value_name = "IDENT")]
    pub name: String,

    /// Annotate the binding with Next's `Metadata` type
    #[arg(long)]
    pub typed: bool,

    /// Spaces per indentation level (0 prints one line, capped at 10)
    #[arg(long, default_value_t = 2, value_name = "N")]
    pub indent: usize,

    /// Write a value before starting, as `set` would (repeatable)
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub assignments: Vec<String>,

    /// Print the generated code and exit instead of starting the REPL
    #[arg(long)]
    pub print: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Edit mode forced on the command line, if any.
    pub fn edit_mode(&self) -> Option<EditMode> {
        if self.vi {
            Some(EditMode::Vi)
        } else if self.emacs {
            Some(EditMode::Emacs)
        } else {
            None
        }
    }

    pub fn declaration(&self) -> Declaration {
        let declaration = Declaration::default()
            .with_name(self.name.as_str())
            .with_indent(self.indent);
        if self.typed {
            declaration.typed(NEXT_METADATA_TYPE)
        } else {
            declaration
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the logger. `RUST_LOG` directives override the `-v` level.
    pub fn init_logging(&self) {
        let result = env_logger::Builder::new()
            .filter_level(self.log_level())
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
        if result.is_err() {
            log::debug!("logger already installed");
        }
    }

    /// The `--set` assignments, split into path and raw text.
    pub fn assignments(&self) -> Result<Vec<(FieldPath, String)>, CliError> {
        self.assignments
            .iter()
            .map(|assignment| -> Result<(FieldPath, String), CliError> {
                let (path, value) = assignment
                    .split_once('=')
                    .ok_or_else(|| CliError::Assignment(assignment.clone()))?;
                Ok((FieldPath::parse(path.trim())?, value.to_string()))
            })
            .collect()
    }

    /// A form session with this configuration's declaration and every
    /// `--set` applied in order.
    pub fn build_session(&self) -> Result<FormSession, CliError> {
        let mut session = FormSession::with_serializer(Serializer::new(self.declaration()));
        for (path, raw) in self.assignments()? {
            let value = session.input(&path, &raw)?;
            log::info!("preset {} = {:?}", path, value);
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metagen_core_store::{path, Value};

    fn parse(args: &[&str]) -> Config {
        Config::parse_from(std::iter::once("metagen").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.edit_mode(), None);
        assert_eq!(config.declaration(), Declaration::default());
        assert_eq!(config.log_level(), LevelFilter::Warn);
        assert!(!config.print);
        assert!(config.assignments().unwrap().is_empty());
    }

    #[test]
    fn edit_mode_flags() {
        assert_eq!(parse(&["--vi"]).edit_mode(), Some(EditMode::Vi));
        assert_eq!(parse(&["--emacs"]).edit_mode(), Some(EditMode::Emacs));
        assert!(Config::try_parse_from(["metagen", "--vi", "--emacs"]).is_err());
    }

    #[test]
    fn declaration_flags() {
        let config = parse(&["--name", "pageMetadata", "--typed", "--indent", "4"]);
        let declaration = config.declaration();
        assert_eq!(declaration.name, "pageMetadata");
        assert_eq!(declaration.type_annotation.as_deref(), Some("Metadata"));
        assert_eq!(declaration.indent, 4);
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv"]).log_level(), LevelFilter::Trace);
    }

    #[test]
    fn assignments_split_on_first_equals() {
        let config = parse(&["--set", "title.default=a=b", "--set", "openGraph.images[0].url="]);
        let assignments = config.assignments().unwrap();
        assert_eq!(assignments[0], (path!("title.default"), "a=b".to_string()));
        assert_eq!(
            assignments[1],
            (path!("openGraph.images.0.url"), String::new())
        );
    }

    #[test]
    fn bad_assignments() {
        assert!(matches!(
            parse(&["--set", "title.default"]).assignments(),
            Err(CliError::Assignment(_))
        ));
        assert!(matches!(
            parse(&["--set", "=x"]).assignments(),
            Err(CliError::Path(PathError::Empty))
        ));
    }

    #[test]
    fn session_applies_assignments_in_order() {
        let config = parse(&[
            "--set",
            "title.default=First",
            "--set",
            "title.default=Second",
            "--set",
            "robots.index=off",
        ]);
        let mut session = config.build_session().unwrap();
        assert_eq!(
            session.value(&path!("title.default")),
            Some(&Value::from("Second"))
        );
        assert_eq!(session.value(&path!("robots.index")), Some(&Value::Bool(false)));
        assert!(session.generate().contains("\"index\": false"));
    }

    #[test]
    fn session_rejects_bad_checkbox() {
        let config = parse(&["--set", "robots.follow=sometimes"]);
        assert!(matches!(config.build_session(), Err(CliError::Store(_))));
    }
}
