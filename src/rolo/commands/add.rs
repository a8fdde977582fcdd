use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Contact;

use super::helpers::{arg, find_contact_mut};

pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?.to_string();
    let phone = arg(args, 1)?;

    let message = if book.find(&name).is_none() {
        book.add_record(Contact::new(&name)?);
        "Contact added."
    } else {
        "Contact update."
    };

    // The contact is inserted before the phone is validated, so a malformed
    // phone still leaves the (empty) contact in the book.
    let contact = find_contact_mut(book, &name)?;
    contact.add_phone(phone)?;

    Ok(CmdResult::success(message))
}
