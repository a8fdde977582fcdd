use crate::book::{AddressBook, UpcomingBirthday};
use crate::commands::CmdResult;
use crate::error::Result;
use chrono::NaiveDate;

use super::helpers::{arg, find_contact, find_contact_mut};

pub fn add(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?.to_string();
    let value = arg(args, 1)?;

    let contact = find_contact_mut(book, &name)?;
    contact.add_birthday(value)?;

    Ok(CmdResult::success("Birthday added."))
}

pub fn show(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    let contact = find_contact(book, name)?;

    let message = match contact.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", contact.name(), birthday),
        None => format!("{} has no birthday saved.", contact.name()),
    };

    Ok(CmdResult::info(message))
}

pub fn upcoming(book: &AddressBook, today: NaiveDate, window_days: u32) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok(CmdResult::info(format!(
            "There are no birthdays in the next {} days.",
            window_days
        )));
    }

    let lines = upcoming
        .iter()
        .map(UpcomingBirthday::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(CmdResult::info(lines))
}
