use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Invalid phone number `{0}`: must be exactly 10 digits.")]
    InvalidPhone(String),

    #[error("Invalid date `{0}`: use DD.MM.YYYY.")]
    InvalidDate(String),

    #[error("Phone number not found: {0}.")]
    PhoneNotFound(String),

    #[error("Contact not found: {0}.")]
    ContactNotFound(String),

    #[error("Duplicate contact name: {0}.")]
    DuplicateName(String),

    #[error("Not enough arguments.")]
    MissingArguments,

    #[error("Contact name cannot be empty.")]
    EmptyName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
