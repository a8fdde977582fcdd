use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

use super::helpers::find_contact_mut;

pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    // Exactly three tokens; anything else gets the usage nudge rather than
    // an error.
    let [name, old_phone, new_phone] = args else {
        return Ok(CmdResult::warning("Enter name, old phone and new phone."));
    };

    let contact = find_contact_mut(book, name)?;
    contact.edit_phone(old_phone, new_phone)?;

    Ok(CmdResult::success("Contact updated."))
}
