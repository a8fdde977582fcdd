use crate::book::AddressBook;
use crate::error::{Result, RoloError};
use crate::model::Contact;

/// Positional argument, or `MissingArguments` when the user typed too few
/// tokens.
pub fn arg(args: &[String], index: usize) -> Result<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(RoloError::MissingArguments)
}

pub fn find_contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Contact> {
    book.find(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))
}

pub fn find_contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Contact> {
    book.find_mut(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))
}
