use crate::cli::menu::{self, Command};
use crate::prelude::{AppError, Contact, ContactInput, ContactManager};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Source of user answers for the operations that need them.
pub trait Prompt {
    /// Shows `message` and returns the answer as typed, minus the line ending.
    fn ask(&mut self, message: &str) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Result of one command, for the presentation layer to render.
#[derive(Debug)]
pub enum Outcome {
    Opened(PathBuf),
    Saved(PathBuf),
    Listed {
        path: PathBuf,
        contacts: Vec<Contact>,
    },
    Created(Contact),
    Found(Vec<Contact>),
    Updated {
        before: Contact,
        after: Contact,
    },
    Deleted(Contact),
    NotFound(String),
    /// The user backed out before anything changed.
    Cancelled,
    Unrecognized(String),
    Failed(AppError),
    Exited {
        saved: Option<PathBuf>,
        error: Option<AppError>,
    },
}

/// One run of the phone book: the record store plus the exit state.
pub struct Session {
    manager: ContactManager,
    state: SessionState,
}

impl Session {
    pub fn new(manager: ContactManager) -> Self {
        Self {
            manager,
            state: SessionState::Running,
        }
    }

    pub fn manager(&self) -> &ContactManager {
        &self.manager
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Resolves `token` and runs the matching operation.
    pub fn execute(&mut self, token: &str, prompt: &mut dyn Prompt) -> Outcome {
        let token = menu::normalize_token(token);

        if !self.is_running() {
            warn!(token, "command ignored, session already terminated");
            return Outcome::Cancelled;
        }

        match menu::parse_command(token) {
            Ok(command) => self.run(command, prompt),
            Err(_) => {
                debug!(token, "unrecognized command");
                Outcome::Unrecognized(token.to_string())
            }
        }
    }

    pub fn run(&mut self, command: Command, prompt: &mut dyn Prompt) -> Outcome {
        debug!(command = command.label(), "running command");

        let result = match command {
            Command::Open => self.open(prompt),
            Command::Save => self.save(prompt),
            Command::ShowAll => Ok(self.list()),
            Command::Create => self.create(prompt),
            Command::Find => self.find(prompt),
            Command::Change => self.change(prompt),
            Command::Delete => self.delete(prompt),
            Command::Exit => Ok(self.exit(prompt)),
        };

        result.unwrap_or_else(|err| match err {
            AppError::NotFound(item) => Outcome::NotFound(item),
            err => {
                warn!(command = command.label(), error = %err, "command failed");
                Outcome::Failed(err)
            }
        })
    }

    fn open(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome, AppError> {
        let dir = document_dir(self.manager.path());
        let documents = self.manager.storage().list_documents(&dir)?;

        let mut message = String::new();
        for (i, path) in documents.iter().enumerate() {
            message.push_str(&format!("{}. {}\n", i + 1, file_name(path)));
        }
        message.push_str("0 - back to main menu\n\nPick the number of the document to open: ");

        let answer = prompt.ask(&message)?;
        let chosen = answer
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=documents.len()).contains(n));

        let Some(n) = chosen else {
            return Ok(Outcome::Cancelled);
        };

        if self.manager.is_dirty() {
            warn!(path = %self.manager.path().display(), "discarding unsaved changes");
        }

        let path = &documents[n - 1];
        self.manager.load(path)?;
        Ok(Outcome::Opened(path.clone()))
    }

    fn save(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome, AppError> {
        let answer = prompt.ask(
            "Document name without extension.\n\
            <Enter> keeps the current name, 0 returns to the main menu: ",
        )?;
        let answer = answer.trim();

        if answer == "0" {
            return Ok(Outcome::Cancelled);
        }

        let target = if answer.is_empty() {
            None
        } else {
            Some(resolve_document(self.manager.path(), answer))
        };

        let path = self.manager.save(target.as_deref())?;
        Ok(Outcome::Saved(path))
    }

    fn list(&self) -> Outcome {
        Outcome::Listed {
            path: self.manager.path().to_path_buf(),
            contacts: self.manager.contact_list().to_vec(),
        }
    }

    fn create(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome, AppError> {
        let id = prompt.ask("ID: ")?;
        if id.is_empty() {
            return Err(AppError::Validation("ID field is required".to_string()));
        }

        let input = read_fields(prompt)?;
        let contact = Contact::from_input(&id, input);

        self.manager.add_contact(contact.clone())?;
        Ok(Outcome::Created(contact))
    }

    fn find(&self, prompt: &mut dyn Prompt) -> Result<Outcome, AppError> {
        let query = prompt.ask("Search all fields for: ")?;
        if query.is_empty() {
            return Ok(Outcome::Found(Vec::new()));
        }

        let found = self.manager.find(&query).into_iter().cloned().collect();
        Ok(Outcome::Found(found))
    }

    fn change(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome, AppError> {
        let id = prompt.ask("ID of the contact to change: ")?;
        if id.is_empty() {
            return Ok(Outcome::Cancelled);
        }

        let before = self
            .manager
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", id)))?;

        let input = read_fields(prompt)?;
        let after = self.manager.replace(&id, &input)?;
        Ok(Outcome::Updated { before, after })
    }

    fn delete(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome, AppError> {
        let id = prompt.ask("ID of the contact to delete: ")?;
        if id.is_empty() {
            return Ok(Outcome::Cancelled);
        }

        let removed = self.manager.remove(&id)?;
        Ok(Outcome::Deleted(removed))
    }

    fn exit(&mut self, prompt: &mut dyn Prompt) -> Outcome {
        let mut saved = None;
        let mut failure = None;

        if self.manager.is_dirty() {
            let answer = prompt
                .ask("Data has changed! Save before exit? (Y/N, Y by default) ")
                .unwrap_or_else(|err| {
                    warn!(error = %err, "no answer, saving by default");
                    String::new()
                });

            let answer = answer.trim();
            if answer.is_empty() || answer.eq_ignore_ascii_case("y") {
                match self.manager.save(None) {
                    Ok(path) => saved = Some(path),
                    Err(err) => {
                        error!(error = %err, "could not save before exit");
                        failure = Some(err);
                    }
                }
            } else {
                info!("exiting without saving");
            }
        }

        self.state = SessionState::Terminated;
        Outcome::Exited {
            saved,
            error: failure,
        }
    }
}

fn read_fields(prompt: &mut dyn Prompt) -> Result<ContactInput, AppError> {
    let name = prompt.ask("Name: ")?;
    let phone = prompt.ask("Phone: ")?;
    let comment = prompt.ask("Comment: ")?;
    Ok(ContactInput {
        name,
        phone,
        comment,
    })
}

/// Directory holding `document`, `.` for a bare file name.
pub fn document_dir(document: &Path) -> PathBuf {
    match document.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `<dir of current>/<name>.json`; a name already ending in `.json` is kept as is.
pub fn resolve_document(current: &Path, name: &str) -> PathBuf {
    let file = if name.to_ascii_lowercase().ends_with(".json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    };

    match current.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file),
        _ => PathBuf::from(file),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
