use crate::error::CoreError;
use crate::field::{Field, FieldRule};
use chrono::NaiveDate;

const MIN_YEAR: i64 = 1;
const MAX_YEAR: i64 = 9999;

/// Accepts `DD.MM.YYYY` strings naming a real calendar date.
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = String;

    fn validate(value: &String) -> Result<(), CoreError> {
        parse_birthday(value).map(|_| ())
    }
}

pub type Birthday = Field<BirthdayRule>;

impl Birthday {
    pub fn as_str(&self) -> &str {
        self.value()
    }

    /// Re-parses the stored value into a date.
    pub fn as_date(&self) -> Result<NaiveDate, CoreError> {
        parse_birthday(self.value())
    }
}

pub fn parse_birthday(raw: &str) -> Result<NaiveDate, CoreError> {
    let format_err = || CoreError::InvalidBirthdayFormat(raw.to_string());
    let date_err = || CoreError::InvalidBirthdayDate(raw.to_string());

    let components: Vec<&str> = raw.split('.').collect();
    let [day, month, year] = components.as_slice() else {
        return Err(format_err());
    };
    let day = parse_component(day).ok_or_else(format_err)?;
    let month = parse_component(month).ok_or_else(format_err)?;
    let year = parse_component(year).ok_or_else(format_err)?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(date_err());
    }
    let (Ok(month), Ok(day)) = (u32::try_from(month), u32::try_from(day)) else {
        return Err(date_err());
    };
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(date_err)
}

fn parse_component(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_birthday, Birthday};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    #[test]
    fn birthday_round_trips_to_date() {
        let cases = [
            ("01.01.2000", 2000, 1, 1),
            ("29.02.2024", 2024, 2, 29),
            ("31.12.1999", 1999, 12, 31),
            ("5.7.1985", 1985, 7, 5),
        ];
        for (raw, year, month, day) in cases {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
            assert_eq!(
                birthday.as_date().unwrap(),
                NaiveDate::from_ymd_opt(year, month, day).unwrap()
            );
        }
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        for raw in ["31.02.2024", "29.02.2023", "00.01.2000", "01.13.2000", "1.-1.2000"] {
            assert_eq!(
                Birthday::new(raw).unwrap_err(),
                CoreError::InvalidBirthdayDate(raw.to_string())
            );
        }
    }

    #[test]
    fn birthday_rejects_wrong_shape() {
        for raw in ["", "2024-02-01", "01.02", "01.02.2000.1", "aa.bb.cccc", "01..2000"] {
            assert_eq!(
                Birthday::new(raw).unwrap_err(),
                CoreError::InvalidBirthdayFormat(raw.to_string())
            );
        }
    }

    #[test]
    fn birthday_tolerates_padding_in_components() {
        let date = parse_birthday(" 07. 08 .1990").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 8, 7).unwrap());
    }

    #[test]
    fn birthday_year_outside_calendar_range_is_invalid_date() {
        assert!(matches!(
            parse_birthday("01.01.0"),
            Err(CoreError::InvalidBirthdayDate(_))
        ));
        assert!(matches!(
            parse_birthday("01.01.10000"),
            Err(CoreError::InvalidBirthdayDate(_))
        ));
    }
}
