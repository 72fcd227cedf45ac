use reedline::{Completer, Span, Suggestion};

use metagen_form::{Section, FIELDS};

use crate::commands::{lookup, COMMANDS};

/// Completes command names, field paths after `set`/`get`, and section
/// names after `hide`.
pub struct ReplCompleter {
    commands: Vec<&'static str>,
}

impl ReplCompleter {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.name).collect(),
        }
    }
}

impl Default for ReplCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ReplCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_pos = &line[..pos];
        let words: Vec<&str> = line_to_pos.split_whitespace().collect();
        let typing_word = !line_to_pos.ends_with(char::is_whitespace);

        // Get the word being typed
        let prefix = if typing_word {
            words.last().copied().unwrap_or("")
        } else {
            ""
        };
        let start = pos - prefix.len();
        let span = Span::new(start, pos);

        if words.is_empty() || (words.len() == 1 && typing_word) {
            return self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(prefix))
                .map(|cmd| suggestion(cmd, command_description(cmd), span, true))
                .collect();
        }

        let argument_index = if typing_word { words.len() - 1 } else { words.len() };
        if argument_index != 1 {
            return Vec::new();
        }

        match lookup(words[0]).map(|cmd| cmd.name) {
            Some("set") | Some("get") => FIELDS
                .iter()
                .filter(|field| field.path.starts_with(prefix))
                .map(|field| suggestion(field.path, field.label.to_string(), span, true))
                .collect(),
            Some("hide") => Section::ALL
                .iter()
                .filter(|section| section.key().starts_with(prefix))
                .map(|section| {
                    suggestion(section.key(), section.title().to_string(), span, false)
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn suggestion(value: &str, description: String, span: Span, append_whitespace: bool) -> Suggestion {
    Suggestion {
        value: value.to_string(),
        description: Some(description),
        style: None,
        extra: None,
        span,
        append_whitespace,
        match_indices: None,
    }
}

fn command_description(cmd: &str) -> String {
    lookup(cmd)
        .map(|info| info.description.to_string())
        .unwrap_or_default()
}
