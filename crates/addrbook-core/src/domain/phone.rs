use crate::error::CoreError;
use crate::field::{Field, FieldRule};

pub const PHONE_DIGITS: usize = 10;

pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;

    fn validate(value: &String) -> Result<(), CoreError> {
        if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidPhoneFormat(value.clone()));
        }
        Ok(())
    }
}

pub type Phone = Field<PhoneRule>;

impl Phone {
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
