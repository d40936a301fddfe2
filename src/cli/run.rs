use crate::cli::{self, StdinPrompt, menu};
use crate::prelude::{AppError, Config, ContactManager, JsonStorage, Outcome, Prompt, Session};
use std::io::{self, IsTerminal};
use tracing::{info, warn};

pub fn run_app(config: &Config) -> Result<(), AppError> {
    let manager = ContactManager::open(Box::new(JsonStorage::new()), &config.document)?;
    let mut session = Session::new(manager);
    let mut prompt = StdinPrompt;
    let interactive = io::stdout().is_terminal();

    info!(document = %config.document.display(), "phone book started");

    while session.is_running() {
        cli::clear_console()?;
        println!("Phone book {}\n", session.manager().path().display());
        println!("{}", menu::render_menu());

        let token = match prompt.ask("\nEnter a command number: ") {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "input closed, leaving without saving");
                break;
            }
        };

        cli::clear_console()?;
        let outcome = session.execute(&token, &mut prompt);
        println!("{}", render_outcome(&outcome));

        // Keep the result on screen until the next menu clears it
        if interactive
            && session.is_running()
            && let Err(err) = prompt.ask("\nPress <Enter> to continue")
        {
            warn!(error = %err, "input closed, leaving without saving");
            break;
        }
    }

    Ok(())
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Opened(path) => format!("Document {} is open", path.display()),
        Outcome::Saved(path) => format!("Saved to {}", path.display()),
        Outcome::Listed { path, contacts } => format!(
            "{}\n\nAll contacts from {}",
            cli::display_contact_table(contacts),
            path.display()
        ),
        Outcome::Created(contact) => {
            format!("Contact created: {}", cli::display_contact(contact))
        }
        Outcome::Found(contacts) => format!(
            "{}\n\nFound {} contact(s)",
            cli::display_contact_table(contacts),
            contacts.len()
        ),
        Outcome::Updated { before, after } => format!(
            "Contact updated: {}\n          now: {}",
            cli::display_contact(before),
            cli::display_contact(after)
        ),
        Outcome::Deleted(contact) => {
            format!("Contact deleted: {}", cli::display_contact(contact))
        }
        Outcome::NotFound(item) => AppError::NotFound(item.clone()).to_string(),
        Outcome::Cancelled => "Back to main menu".to_string(),
        Outcome::Unrecognized(token) => {
            format!("{}. Please try again", AppError::ParseCommand(token.clone()))
        }
        Outcome::Failed(err) => format!("Error: {}", err),
        Outcome::Exited { saved, error } => {
            let mut output = String::new();
            if let Some(path) = saved {
                output.push_str(&format!("Saved to {}\n", path.display()));
            }
            if let Some(err) = error {
                output.push_str(&format!("Changes were not saved: {}\n", err));
            }
            output.push_str("Bye!");
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Contact;
    use std::path::PathBuf;

    #[test]
    fn renders_not_found_and_unrecognized() {
        assert_eq!(
            render_outcome(&Outcome::NotFound("Contact '7'".to_string())),
            "Contact '7' Not found"
        );
        assert_eq!(
            render_outcome(&Outcome::Unrecognized("unknown".to_string())),
            "Unrecognized command: 'unknown'. Please try again"
        );
    }

    #[test]
    fn renders_exit_report() {
        let outcome = Outcome::Exited {
            saved: Some(PathBuf::from("phone_dict.json")),
            error: None,
        };
        assert_eq!(render_outcome(&outcome), "Saved to phone_dict.json\nBye!");
    }

    #[test]
    fn renders_search_count() {
        let outcome = Outcome::Found(vec![Contact::new(
            "1".to_string(),
            "Al".to_string(),
            "142".to_string(),
            "".to_string(),
        )]);

        let output = render_outcome(&outcome);
        assert!(output.contains("|1\t|Al\t|142\t|"));
        assert!(output.ends_with("Found 1 contact(s)"));
    }
}
