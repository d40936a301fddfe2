use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};

/// Contact documents stored as JSON files on disk.
#[derive(Debug, Default, Clone)]
pub struct JsonStorage;

impl JsonStorage {
    pub fn new() -> Self {
        Self
    }
}

impl ContactStore for JsonStorage {
    fn exists(&self, path: &Path) -> Result<bool, AppError> {
        Ok(fs::exists(path)?)
    }

    fn read(&self, path: &Path) -> Result<Vec<Contact>, AppError> {
        let mut file = OpenOptions::new().read(true).open(path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        decode_document(&data)
    }

    fn write(&self, path: &Path, contacts: &[Contact]) -> Result<(), AppError> {
        // Encode first so a serialization failure never truncates the file
        let data = encode_document(contacts)?;

        create_file_parent(path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        file.write_all(data.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };

        let mut documents = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_document(&path) {
                documents.push(path);
            }
        }

        documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(documents)
    }

    fn medium(&self) -> &str {
        "json"
    }
}
