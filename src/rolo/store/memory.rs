use super::BookStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};

/// In-memory storage for tests and development. Holds the serialized JSON
/// blob rather than the book itself, so loads go through the same serde
/// path as the file store. Does NOT persist across processes.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.blob {
            Some(blob) => serde_json::from_str(blob).map_err(RoloError::Serialization),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.blob = Some(serde_json::to_string(book).map_err(RoloError::Serialization)?);
        Ok(())
    }
}
