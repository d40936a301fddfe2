pub mod json;
pub mod memory;

use crate::prelude::{AppError, Contact};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

pub use json::JsonStorage;
pub use memory::MemStorage;

/// A medium that can hold whole contact documents addressed by path.
pub trait ContactStore {
    fn exists(&self, path: &Path) -> Result<bool, AppError>;

    fn read(&self, path: &Path) -> Result<Vec<Contact>, AppError>;

    /// Replaces the whole document at `path`.
    fn write(&self, path: &Path, contacts: &[Contact]) -> Result<(), AppError>;

    /// `.json` documents directly inside `dir`, sorted by file name.
    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;

    fn medium(&self) -> &str;
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    contacts: &'a [Contact],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    contacts: Vec<Contact>,
}

/// Canonical encoding: 4-space indent, keys sorted at every level.
pub fn encode_document(contacts: &[Contact]) -> Result<String, AppError> {
    // Going through `Value` sorts object keys (serde_json maps are BTreeMaps)
    let value = serde_json::to_value(DocumentRef { contacts })?;

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;

    String::from_utf8(buf)
        .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn decode_document(data: &str) -> Result<Vec<Contact>, AppError> {
    // serde_json will give an error if data is empty
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: Document = serde_json::from_str(data)?;
    Ok(document.contacts)
}

pub fn is_document(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
