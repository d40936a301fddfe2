use crate::prelude::AppError;

/// Token used when the user submits an empty command.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Save,
    ShowAll,
    Create,
    Find,
    Change,
    Delete,
    Exit,
}

/// Menu entries in display order.
pub const MENU: [(&str, Command); 8] = [
    ("1", Command::Open),
    ("2", Command::Save),
    ("3", Command::ShowAll),
    ("4", Command::Create),
    ("5", Command::Find),
    ("6", Command::Change),
    ("7", Command::Delete),
    ("0", Command::Exit),
];

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Open => "Open file",
            Command::Save => "Save file",
            Command::ShowAll => "Show all contacts",
            Command::Create => "Create contact",
            Command::Find => "Find contact",
            Command::Change => "Change contact",
            Command::Delete => "Delete contact",
            Command::Exit => "Exit",
        }
    }

    pub fn token(&self) -> &'static str {
        MENU.iter()
            .find(|(_, command)| command == self)
            .map(|(token, _)| *token)
            .unwrap_or(UNKNOWN)
    }
}

/// Trimmed input, or [`UNKNOWN`] when nothing was typed.
pub fn normalize_token(input: &str) -> &str {
    let token = input.trim();
    if token.is_empty() { UNKNOWN } else { token }
}

pub fn parse_command(token: &str) -> Result<Command, AppError> {
    MENU.iter()
        .find(|(t, _)| *t == token)
        .map(|(_, command)| *command)
        .ok_or_else(|| AppError::ParseCommand(token.to_string()))
}

pub fn render_menu() -> String {
    MENU.iter()
        .map(|(token, command)| format!("{}. {}", token, command.label()))
        .collect::<Vec<String>>()
        .join("\n")
}
