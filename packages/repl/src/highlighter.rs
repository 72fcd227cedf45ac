use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use metagen_form::Section;

use crate::commands::lookup;

/// Syntax highlighter for the REPL
pub struct ReplHighlighter;

impl ReplHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReplHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for ReplHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if line.is_empty() {
            return styled;
        }

        // Find the first whitespace to split command from args
        let (command, rest) = match line.find(char::is_whitespace) {
            Some(pos) => (&line[..pos], &line[pos..]),
            None => (line, ""),
        };

        let info = lookup(command);
        let cmd_style = if info.is_some() {
            Style::new().bold().fg(Color::Cyan)
        } else {
            Style::new().fg(Color::Red)
        };
        styled.push((cmd_style, command.to_string()));

        if rest.is_empty() {
            return styled;
        }

        match info.map(|cmd| cmd.name) {
            Some("set") => {
                // Leading whitespace and the path, then the value
                let path_start = rest.len() - rest.trim_start().len();
                let path_end = rest[path_start..]
                    .find(char::is_whitespace)
                    .map(|i| path_start + i)
                    .unwrap_or(rest.len());

                styled.push((Style::new().fg(Color::Yellow), rest[..path_end].to_string()));
                if path_end < rest.len() {
                    styled.push((Style::new().fg(Color::Green), rest[path_end..].to_string()));
                }
            }
            Some("get") => {
                styled.push((Style::new().fg(Color::Yellow), rest.to_string()));
            }
            Some("hide") => {
                let color = if rest.trim().parse::<Section>().is_ok() {
                    Color::Yellow
                } else {
                    Color::Red
                };
                styled.push((Style::new().fg(color), rest.to_string()));
            }
            _ => {
                styled.push((Style::new(), rest.to_string()));
            }
        }

        styled
    }
}
