use crate::error::{Result, RoloError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for birthdays, both on input and in rendered output.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A validated phone number: exactly 10 decimal digits.
///
/// Construction is the only way to obtain one, so every `Phone` in the
/// system is well-formed. Serializes as the plain digit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self> {
        if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RoloError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Phone::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated birthday: the original `DD.MM.YYYY` string as typed by the
/// user, plus the parsed date used for comparisons.
///
/// Serializes as the original string and re-validates on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| RoloError::InvalidDate(value.to_string()))?;
        Ok(Self {
            value: value.to_string(),
            date,
        })
    }

    /// The parsed date, for window computations. Display keeps the original
    /// spelling instead.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for Birthday {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Birthday::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.value
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// Fields stay private: the name doubles as the contact's key in the book,
/// so it must not change after construction. Deserialization runs through
/// the same name check as `Contact::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ContactData")]
pub struct Contact {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Contact {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(RoloError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Duplicates are allowed; adding the same number twice
    /// yields two entries.
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// First exact match, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Removes the first exact match. Absent numbers are an error, not a
    /// no-op.
    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RoloError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replaces the first occurrence of `old` with `new`.
    ///
    /// `new` is validated before the list is touched, so a malformed
    /// replacement leaves the contact unchanged. The replacement is appended
    /// at the end rather than spliced in place; callers observe the edited
    /// number moving to the back of the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        if self.find_phone(old).is_none() {
            return Err(RoloError::PhoneNotFound(old.to_string()));
        }
        let new = Phone::new(new)?;
        self.remove_phone(old)?;
        self.phones.push(new);
        Ok(())
    }

    /// Sets the birthday, overwriting any existing one.
    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

/// Wire shape of a contact. Phones and birthdays re-validate on their own;
/// this intermediate exists so the name is checked too before a `Contact`
/// comes into being.
#[derive(Deserialize)]
struct ContactData {
    name: String,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<ContactData> for Contact {
    type Error = RoloError;

    fn try_from(data: ContactData) -> Result<Self> {
        let mut contact = Contact::new(&data.name)?;
        contact.phones = data.phones;
        contact.birthday = data.birthday;
        Ok(contact)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
