use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Phone;

use super::helpers::{arg, find_contact};

pub fn run(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    let contact = find_contact(book, name)?;

    let phones = contact
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ");

    Ok(CmdResult::info(format!("{}: {}", contact.name(), phones)))
}
