use super::*;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::rc::Rc;

/// Documents kept in memory, encoded exactly as on disk.
///
/// Clones share the same documents, so a test can keep a handle after
/// handing the storage to a [`ContactManager`](crate::prelude::ContactManager).
#[derive(Debug, Default, Clone)]
pub struct MemStorage {
    docs: Rc<RefCell<BTreeMap<PathBuf, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of the document at `path`, if any.
    pub fn raw(&self, path: &Path) -> Option<String> {
        self.docs.borrow().get(path).cloned()
    }

    /// Stores `data` verbatim, bypassing the encoder.
    pub fn insert_raw(&self, path: &Path, data: &str) {
        self.docs
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_string());
    }

    /// Makes every following write fail with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl ContactStore for MemStorage {
    fn exists(&self, path: &Path) -> Result<bool, AppError> {
        Ok(self.docs.borrow().contains_key(path))
    }

    fn read(&self, path: &Path) -> Result<Vec<Contact>, AppError> {
        let docs = self.docs.borrow();
        let data = docs.get(path).ok_or_else(|| {
            Error::new(ErrorKind::NotFound, format!("{} does not exist", path.display()))
        })?;
        decode_document(data)
    }

    fn write(&self, path: &Path, contacts: &[Contact]) -> Result<(), AppError> {
        if self.read_only.get() {
            return Err(Error::new(ErrorKind::PermissionDenied, "storage is read-only").into());
        }

        let data = encode_document(contacts)?;
        self.docs.borrow_mut().insert(path.to_path_buf(), data);
        Ok(())
    }

    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        // BTreeMap keeps paths ordered, and siblings share a prefix
        Ok(self
            .docs
            .borrow()
            .keys()
            .filter(|path| path.parent() == Some(dir) && is_document(path))
            .cloned()
            .collect())
    }

    fn medium(&self) -> &str {
        "memory"
    }
}
