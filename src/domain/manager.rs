use super::*;

use crate::storage::ContactStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The in-memory phone book bound to one document.
///
/// `dirty` is true iff `mem` differs from what was last loaded from or
/// written to `path`.
pub struct ContactManager {
    mem: Vec<Contact>,
    path: PathBuf,
    dirty: bool,
    storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Binds a new manager to `path`, creating the document if it does not exist.
    pub fn open(storage: Box<dyn ContactStore>, path: &Path) -> Result<Self, AppError> {
        let mut manager = Self {
            mem: Vec::new(),
            path: path.to_path_buf(),
            dirty: false,
            storage,
        };
        manager.load(path)?;
        Ok(manager)
    }

    /// Replaces the in-memory contacts with the document at `path` and rebinds to it.
    ///
    /// A missing document is first created empty. On failure the manager keeps
    /// its previous path, contacts and dirty flag.
    pub fn load(&mut self, path: &Path) -> Result<(), AppError> {
        if !self.storage.exists(path)? {
            info!(path = %path.display(), "document not found, creating an empty one");
            self.storage.write(path, &[])?;
        }

        let contacts = self.storage.read(path)?;

        info!(
            path = %path.display(),
            medium = self.storage.medium(),
            contacts = contacts.len(),
            "document loaded"
        );

        self.mem = contacts;
        self.path = path.to_path_buf();
        self.dirty = false;
        Ok(())
    }

    /// Writes every contact to `target` (or the bound document) and rebinds to it.
    ///
    /// Returns the path written. A failed write leaves the manager untouched.
    pub fn save(&mut self, target: Option<&Path>) -> Result<PathBuf, AppError> {
        let path = target
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());

        self.storage.write(&path, &self.mem)?;

        if path != self.path {
            info!(from = %self.path.display(), to = %path.display(), "rebound to a new document");
        }
        info!(path = %path.display(), contacts = self.mem.len(), "document saved");

        self.path = path.clone();
        self.dirty = false;
        Ok(path)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn storage(&self) -> &dyn ContactStore {
        self.storage.as_ref()
    }

    /// First contact with this id.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.id == id)
    }

    /// Appends `contact`. The id must be non-empty and not yet in use.
    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        if contact.id.is_empty() {
            warn!("rejected contact without id");
            return Err(AppError::Validation("ID field is required".to_string()));
        }

        if self.get(&contact.id).is_some() {
            warn!(id = %contact.id, "rejected duplicate id");
            return Err(AppError::Validation(format!(
                "Contact with ID '{}' already exist",
                contact.id
            )));
        }

        debug!(id = %contact.id, "contact added");
        self.mem.push(contact);
        self.dirty = true;
        Ok(())
    }

    pub fn find(&self, query: &str) -> Vec<&Contact> {
        search::search_contacts(&self.mem, query)
    }

    /// Rewrites the first contact with `id` using the non-empty fields of `input`.
    ///
    /// The updated contact moves to the end of the list.
    pub fn replace(&mut self, id: &str, input: &ContactInput) -> Result<Contact, AppError> {
        let index = self.index_of(id)?;

        let old = self.mem.remove(index);
        let updated = old.merged_with(input);
        self.mem.push(updated.clone());
        self.dirty = true;

        debug!(id, from = index, to = self.mem.len() - 1, "contact replaced");
        Ok(updated)
    }

    /// Removes the first contact with `id`. Nothing changes when it is absent.
    pub fn remove(&mut self, id: &str) -> Result<Contact, AppError> {
        let index = self.index_of(id)?;

        let removed = self.mem.remove(index);
        self.dirty = true;

        debug!(id, index, "contact removed");
        Ok(removed)
    }

    fn index_of(&self, id: &str) -> Result<usize, AppError> {
        self.mem
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", id)))
    }
}
