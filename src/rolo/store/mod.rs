//! # Storage layer
//!
//! [`BookStore`] is the persistence port for the address book. The
//! application touches it exactly twice per session: one `load` at startup
//! and one `save` at the exit command. There is no autosave and no
//! crash-recovery path.
//!
//! ## Design rationale
//!
//! Storage sits behind a trait to:
//! - enable **testing** with [`memory::InMemoryStore`] (no filesystem needed)
//! - allow **future backends** without changing the command layer
//! - keep the book's logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, the whole book as one
//!   pretty-printed JSON file
//! - [`memory::InMemoryStore`]: holds the serialized blob in memory; fast,
//!   isolated test execution that still exercises the serde path
//!
//! ## Storage format
//!
//! One JSON document, an array of contacts:
//! ```text
//! [
//!   { "name": "John", "phones": ["1234567890"], "birthday": "29.02.2000" }
//! ]
//! ```
//!
//! Phones and birthdays are stored as their validated input strings, and the
//! whole document re-validates on load: malformed values, empty names, and
//! duplicate names all fail the load instead of seeding a book that breaks
//! the model's rules.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Load the persisted book, or an empty one when nothing has been saved
    /// yet.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the full book, replacing whatever was stored before.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
