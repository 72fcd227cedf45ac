//! REPL command parsing and execution.
//!
//! Commands:
//! - `set <path> <value>` - Coerce text the way the bound field does and write it
//! - `get [path]` - Show the value at path (or the whole tree) as JSON
//! - `fields` - List the fields of the shown sections
//! - `sections` - List sections and whether they are shown
//! - `hide <section>` / `reset` - Hide a section / show them all again
//! - `submit` - Press the form button (generate, or reset when all hidden)
//! - `generate` / `code` - Render the tree now / repeat the last rendering
//! - `help`, `exit`

use nu_ansi_term::{Color, Style};
use serde_json::Value as JsonValue;

use metagen_codegen::{Declaration, Serializer};
use metagen_core_store::{FieldPath, Value};
use metagen_form::{Action, FormSession, Section};

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Generated declaration text
    Code(String),
    /// Status message
    Info(String),
    /// Command failed with an error message
    Error(String),
    /// User requested to exit
    Exit,
    /// Show help
    Help,
}

impl CommandResult {
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// One REPL command, as listed by `help` and offered by completion.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub args: &'static str,
    pub description: &'static str,
}

impl CommandInfo {
    pub fn matches(&self, word: &str) -> bool {
        self.name == word || self.aliases.contains(&word)
    }
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "set",
        aliases: &["s", "write", "w"],
        args: "<path> <value>",
        description: "Write a value the way its field would",
    },
    CommandInfo {
        name: "get",
        aliases: &["g", "read", "r"],
        args: "[path]",
        description: "Show the value at path, or the whole tree",
    },
    CommandInfo {
        name: "fields",
        aliases: &["ls"],
        args: "",
        description: "List fields of the shown sections",
    },
    CommandInfo {
        name: "sections",
        aliases: &[],
        args: "",
        description: "List sections and whether they are shown",
    },
    CommandInfo {
        name: "hide",
        aliases: &["rm"],
        args: "<section>",
        description: "Hide a section (its values are still generated)",
    },
    CommandInfo {
        name: "reset",
        aliases: &[],
        args: "",
        description: "Show every section again",
    },
    CommandInfo {
        name: "submit",
        aliases: &[],
        args: "",
        description: "Press the form button: generate, or reset when all hidden",
    },
    CommandInfo {
        name: "generate",
        aliases: &["gen"],
        args: "",
        description: "Generate and print the metadata code",
    },
    CommandInfo {
        name: "code",
        aliases: &[],
        args: "",
        description: "Print the last generated code",
    },
    CommandInfo {
        name: "help",
        aliases: &["?"],
        args: "",
        description: "Show this help message",
    },
    CommandInfo {
        name: "exit",
        aliases: &["quit", "q"],
        args: "",
        description: "Exit the REPL",
    },
];

/// The command `word` names, alias or not (case-insensitive).
pub fn lookup(word: &str) -> Option<&'static CommandInfo> {
    let word = word.to_lowercase();
    COMMANDS.iter().find(|cmd| cmd.matches(&word))
}

/// Parse and execute a command
pub fn execute(input: &str, session: &mut FormSession) -> CommandResult {
    let input = input.trim();

    if input.is_empty() {
        return CommandResult::ok_none();
    }

    let (command, args) = match input.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (input, ""),
    };

    let Some(info) = lookup(command) else {
        return CommandResult::Error(format!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            command
        ));
    };
    log::trace!("running '{}' with '{}'", info.name, args);

    match info.name {
        "set" => cmd_set(args, session),
        "get" => cmd_get(args, session),
        "fields" => cmd_fields(session),
        "sections" => cmd_sections(session),
        "hide" => cmd_hide(args, session),
        "reset" => {
            session.reset_visibility();
            CommandResult::Info("All sections shown".to_string())
        }
        "submit" => cmd_submit(session),
        "generate" => CommandResult::Code(session.generate().to_string()),
        "code" => cmd_code(session),
        "help" => CommandResult::Help,
        "exit" => CommandResult::Exit,
        other => CommandResult::Error(format!("Command '{}' is not wired up", other)),
    }
}

/// Format help text
pub fn format_help() -> String {
    let cmd_style = Style::new().bold().fg(Color::Cyan);
    let arg_style = Style::new().fg(Color::Yellow);
    let alias_style = Style::new().fg(Color::DarkGray);

    let mut help = String::new();
    help.push_str(&format!(
        "{}\n\n",
        Style::new().bold().paint("metagen commands")
    ));

    for cmd in COMMANDS {
        let aliases = if cmd.aliases.is_empty() {
            String::new()
        } else {
            format!(" (alias: {})", cmd.aliases.join(", "))
        };
        help.push_str(&format!(
            "  {} {} {}{}\n",
            cmd_style.paint(format!("{:<10}", cmd.name)),
            arg_style.paint(format!("{:<16}", cmd.args)),
            cmd.description,
            alias_style.paint(aliases)
        ));
    }

    help.push_str(&format!("\n{}\n", Style::new().bold().paint("Writing values")));
    help.push_str(&format!(
        "  Nested field:       {}\n",
        arg_style.paint("set title.default My App")
    ));
    help.push_str(&format!(
        "  Array element:      {}\n",
        arg_style.paint("set openGraph.images[0].url https://example.com/og.png")
    ));
    help.push_str(&format!(
        "  Checkbox:           {}\n",
        arg_style.paint("set robots.index off")
    ));
    help.push_str(&format!(
        "  Keep spaces:        {}\n",
        arg_style.paint("set title.template \"%s  |  My App\"")
    ));

    help.push_str(&format!(
        "\n{}",
        Style::new().italic().paint(
            "Sections: base, openGraph, robots, twitter, verification. \
             Checkboxes take true/false, on/off or yes/no; integers follow parseInt."
        )
    ));

    help
}

fn cmd_set(args: &str, session: &mut FormSession) -> CommandResult {
    let Some((path_str, raw)) = parse_set_args(args) else {
        return CommandResult::Error(
            "Usage: set <path> <value>\nExample: set title.default My App".to_string(),
        );
    };

    let path = match FieldPath::parse(path_str) {
        Ok(p) => p,
        Err(e) => return CommandResult::Error(format!("Invalid path: {}", e)),
    };

    match session.input(&path, &raw) {
        Ok(value) => CommandResult::ok_display(format!(
            "{} {} = {}",
            Color::Green.paint("ok"),
            Color::Yellow.paint(path.to_string()),
            compact_json(&value)
        )),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_get(args: &str, session: &FormSession) -> CommandResult {
    if args.is_empty() {
        return CommandResult::ok_display(format_json(session.metadata()));
    }

    let path = match FieldPath::parse(args) {
        Ok(p) => p,
        Err(e) => return CommandResult::Error(format!("Invalid path: {}", e)),
    };

    match session.value(&path) {
        Some(value) => CommandResult::ok_display(format_json(value)),
        None => CommandResult::Error(format!("Nothing at '{}'", path)),
    }
}

fn cmd_fields(session: &FormSession) -> CommandResult {
    let mut output = String::new();
    let mut current: Option<Section> = None;

    for (spec, value) in session.visible_fields() {
        if current != Some(spec.section) {
            if current.is_some() {
                output.push('\n');
            }
            output.push_str(&format!(
                "{}\n",
                Style::new().bold().paint(spec.section.title())
            ));
            current = Some(spec.section);
        }

        let shown = match value {
            Some(value) => compact_json(value),
            None => Color::DarkGray.paint("<unset>").to_string(),
        };
        output.push_str(&format!(
            "  {} {} {}\n",
            Color::Yellow.paint(format!("{:<36}", spec.path)),
            shown,
            Color::DarkGray.paint(format!("({}, {})", spec.label, spec.kind.name()))
        ));
    }

    if output.is_empty() {
        return CommandResult::Info(
            "All sections are hidden. Use 'reset' or 'submit' to show them.".to_string(),
        );
    }
    CommandResult::ok_display(output.trim_end())
}

fn cmd_sections(session: &FormSession) -> CommandResult {
    let mut output = String::new();
    for section in Section::ALL {
        let state = if session.is_visible(section) {
            Color::Green.paint("shown")
        } else {
            Color::DarkGray.paint("hidden")
        };
        output.push_str(&format!(
            "  {} {:<14} {}\n",
            Color::Cyan.paint(format!("{:<14}", section.key())),
            section.title(),
            state
        ));
    }
    CommandResult::ok_display(output.trim_end())
}

fn cmd_hide(args: &str, session: &mut FormSession) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: hide <section>".to_string());
    }

    let section: Section = match args.parse() {
        Ok(section) => section,
        Err(e) => return CommandResult::Error(e.to_string()),
    };

    let mut message = if session.hide(section) {
        format!("{} {}", Color::Green.paint("hidden"), section.title())
    } else {
        format!("{} is already hidden", section.title())
    };

    if session.all_hidden() {
        message.push_str(&format!(
            "\n{}",
            Color::DarkGray.paint("Every section is hidden; 'submit' now shows them again.")
        ));
    }
    CommandResult::ok_display(message)
}

fn cmd_submit(session: &mut FormSession) -> CommandResult {
    match session.submit() {
        Action::Generate => CommandResult::Code(session.generated_code().to_string()),
        Action::Reset => CommandResult::Info("All sections shown".to_string()),
    }
}

fn cmd_code(session: &FormSession) -> CommandResult {
    let code = session.generated_code();
    if code.is_empty() {
        CommandResult::Info("Nothing generated yet. Use 'generate' first.".to_string())
    } else {
        CommandResult::Code(code.to_string())
    }
}

/// Split `<path> <value>`.
///
/// The value is the rest of the line and may be empty. A JSON string
/// literal is unquoted, which is how surrounding spaces are written.
fn parse_set_args(args: &str) -> Option<(&str, String)> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }

    let (path, rest) = match args.split_once(char::is_whitespace) {
        Some((path, rest)) => (path, rest.trim()),
        None => (args, ""),
    };

    Some((path, unquote(rest)))
}

fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        if let Ok(JsonValue::String(s)) = serde_json::from_str(raw) {
            return s;
        }
    }
    raw.to_string()
}

/// Format JSON with syntax highlighting
/// One-line JSON, numbers as the generated code prints them.
fn compact_json(value: &Value) -> String {
    Serializer::new(Declaration::default().with_indent(0)).render_json(value)
}

/// Pretty JSON with ANSI colors.
fn format_json(value: &Value) -> String {
    let pretty = Serializer::default().render_json(value);

    let mut result = String::new();
    let mut in_string = false;
    let mut escape_next = false;

    for c in pretty.chars() {
        if escape_next {
            result.push_str(&Color::Green.paint(c.to_string()).to_string());
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string {
            result.push_str(&Color::Green.paint("\\").to_string());
            escape_next = true;
            continue;
        }

        if c == '"' {
            in_string = !in_string;
            result.push_str(&Color::Green.paint("\"").to_string());
            continue;
        }

        if in_string {
            result.push_str(&Color::Green.paint(c.to_string()).to_string());
        } else {
            match c {
                '{' | '}' | '[' | ']' => {
                    result.push_str(&Color::White.bold().paint(c.to_string()).to_string())
                }
                _ if c.is_ascii_digit() || c == '.' || c == '-' => {
                    result.push_str(&Color::Cyan.paint(c.to_string()).to_string())
                }
                _ => result.push(c),
            }
        }
    }

    // String contents are painted per character, so these only hit literals.
    result
        .replace("null", &Color::Yellow.paint("null").to_string())
        .replace("true", &Color::Yellow.paint("true").to_string())
        .replace("false", &Color::Yellow.paint("false").to_string())
}
