pub mod dispatch;
pub mod menu;
pub mod run;

pub use run::run_app;

use crate::prelude::{AppError, Contact, FIELDS, Prompt};
use std::io::{self, IsTerminal, Write};

const RULE: &str = "------------------------------------------------------------";

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    FIELDS
        .iter()
        .map(|field| contact.get(*field))
        .collect::<Vec<&str>>()
        .join("\t|")
}

pub fn display_contact_table(contacts: &[Contact]) -> String {
    let header = FIELDS
        .iter()
        .map(|field| field.key().to_uppercase())
        .collect::<Vec<String>>()
        .join("\t|");

    let mut output = format!("{RULE}\n|{header}\n{RULE}\n");
    for contact in contacts {
        output.push_str(&format!("|{}\n", display_contact(contact)));
    }
    output.push_str(RULE);
    output
}

pub fn clear_console() -> Result<(), AppError> {
    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        write!(stdout, "\x1B[2J\x1B[1;1H")?;
        stdout.flush()?;
    }
    Ok(())
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Reads answers from stdin, printing each question first.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> Result<String, AppError> {
        print!("{}", message);
        io::stdout().flush()?;
        get_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_fixed_header() {
        let contacts = vec![Contact::new(
            "1".to_string(),
            "Al".to_string(),
            "142".to_string(),
            "".to_string(),
        )];

        let table = display_contact_table(&contacts);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], "|ID\t|NAME\t|PHONE\t|COMMENT");
        assert_eq!(lines[3], "|1\t|Al\t|142\t|");
        assert_eq!(lines.len(), 5);
    }
}
