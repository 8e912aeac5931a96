use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use crate::rules::dates::days_until_next_occurrence;
use crate::time;
use chrono::NaiveDate;
use std::fmt;

/// One contact: a name, its phone numbers and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// An empty birthday string is treated as unknown.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, CoreError> {
        let name = Name::new(name)?;
        let birthday = birthday
            .filter(|raw| !raw.is_empty())
            .map(Birthday::new)
            .transpose()?;
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), CoreError> {
        match birthday.filter(|raw| !raw.is_empty()) {
            None => self.birthday = None,
            Some(raw) => match self.birthday.as_mut() {
                Some(current) => current.set(raw)?,
                None => self.birthday = Some(Birthday::new(raw)?),
            },
        }
        Ok(())
    }

    pub fn add_phone(&mut self, raw: impl ToString) -> Result<(), CoreError> {
        let phone = Phone::new(raw.to_string())?;
        self.phones.push(phone);
        Ok(())
    }

    /// Drops every phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.as_str() != value);
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let phone = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old)
            .ok_or_else(|| CoreError::PhoneNotFound(old.to_string()))?;
        phone.set(new)
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    pub fn birthday_date(&self) -> Result<Option<NaiveDate>, CoreError> {
        self.birthday.as_ref().map(Birthday::as_date).transpose()
    }

    pub fn days_to_birthday(&self, today: NaiveDate) -> Result<Option<i64>, CoreError> {
        let Some(birthday) = self.birthday.as_ref() else {
            return Ok(None);
        };
        let date = birthday.as_date()?;
        days_until_next_occurrence(today, date)
            .map(Some)
            .ok_or_else(|| CoreError::InvalidBirthdayDate(birthday.as_str().to_string()))
    }

    pub fn days_to_birthday_from_now(&self) -> Result<Option<i64>, CoreError> {
        self.days_to_birthday(time::today()?)
    }

    pub fn describe(&self, today: NaiveDate) -> String {
        self.summary(Some(today))
    }

    fn summary(&self, today: Option<NaiveDate>) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let mut out = format!("Contact name: {}, phones: {}", self.name, phones);
        if let Some(birthday) = &self.birthday {
            out.push_str(&format!(", birthday: {birthday}"));
            let days = today.and_then(|today| self.days_to_birthday(today).ok().flatten());
            if let Some(days) = days {
                out.push_str(&format!(" ({days} days to birthday)"));
            }
        }
        out
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(time::today().ok()))
    }
}
