use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid phone number format: {0}")]
    InvalidPhoneFormat(String),
    #[error("invalid birthday format: {0} (expected DD.MM.YYYY)")]
    InvalidBirthdayFormat(String),
    #[error("invalid birthday date: {0}")]
    InvalidBirthdayDate(String),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("invalid page size: {0}")]
    InvalidPageSize(usize),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
