use crate::error::{Result, RoloError};
use crate::model::{Contact, DATE_FORMAT};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The whole contact book: contacts in insertion order, at most one per
/// name.
///
/// The collection is private so callers cannot bypass the name-keyed
/// operations. Serializes as a plain array of contacts; deserialization
/// rejects duplicate names, so a loaded book obeys the same
/// one-contact-per-name invariant the operations maintain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Contact>", into = "Vec<Contact>")]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

/// One entry of the upcoming-birthdays query: who to congratulate and on
/// which date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under the contact's name, wholesale-replacing any existing
    /// entry of that name (never merging). A replaced contact keeps its
    /// position in iteration order; a new one goes to the end.
    pub fn add_record(&mut self, contact: Contact) {
        match self
            .contacts
            .iter_mut()
            .find(|c| c.name() == contact.name())
        {
            Some(slot) => *slot = contact,
            None => self.contacts.push(contact),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.name() == name)
    }

    /// Removes the named contact. An absent name is a no-op, not an error.
    pub fn delete(&mut self, name: &str) {
        self.contacts.retain(|c| c.name() != name);
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Contacts whose next birthday falls within `window_days` of `today`,
    /// inclusive on both ends, in book order (not sorted by date).
    ///
    /// A birthday is projected onto the current year first; if that occurrence
    /// has already passed, onto the next year. The congratulation date is the
    /// qualifying occurrence, pushed to the following Monday when it lands on
    /// a Saturday or Sunday. A Feb 29 birthday projected onto a non-leap year
    /// counts as Mar 1. A window wider than the calendar can represent is
    /// treated as unbounded.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let window_end = today
            .checked_add_signed(Duration::days(i64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);
        let mut upcoming = Vec::new();

        for contact in &self.contacts {
            let Some(birthday) = contact.birthday() else {
                continue;
            };

            let mut candidate = project_onto_year(birthday.date(), today.year());
            if candidate < today {
                candidate = project_onto_year(birthday.date(), today.year() + 1);
            }
            if candidate < today || candidate > window_end {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                name: contact.name().to_string(),
                congratulation_date: shift_off_weekend(candidate),
            });
        }

        upcoming
    }
}

impl TryFrom<Vec<Contact>> for AddressBook {
    type Error = RoloError;

    fn try_from(contacts: Vec<Contact>) -> Result<Self> {
        let mut book = Self::default();
        for contact in contacts {
            if book.find(contact.name()).is_some() {
                return Err(RoloError::DuplicateName(contact.name().to_string()));
            }
            book.contacts.push(contact);
        }
        Ok(book)
    }
}

impl From<AddressBook> for Vec<Contact> {
    fn from(book: AddressBook) -> Self {
        book.contacts
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .contacts
            .iter()
            .map(Contact::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&lines)
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Congratulate {} — {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// Rebuilds `date` in the given year. Feb 29 has no occurrence in non-leap
/// years; those collapse to Mar 1.
fn project_onto_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

/// Weekend dates move to the following Monday; weekdays pass through.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday(); // Mon = 0 .. Sun = 6
    if weekday >= 5 {
        date + Duration::days(i64::from(7 - weekday))
    } else {
        date
    }
}
