use super::BookStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};
use std::fs;
use std::path::PathBuf;

/// File-backed storage: the whole book lives in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        let book = serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        fs::write(&self.path, content).map_err(RoloError::Io)?;
        Ok(())
    }
}
