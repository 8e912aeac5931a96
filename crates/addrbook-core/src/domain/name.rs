use crate::error::CoreError;
use crate::field::{Field, FieldRule};

pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;

    fn validate(value: &String) -> Result<(), CoreError> {
        if value.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(())
    }
}

pub type Name = Field<NameRule>;

impl Name {
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
