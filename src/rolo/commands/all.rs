use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::info("No contacts saved."));
    }
    Ok(CmdResult::info(book.to_string()))
}
