use chrono::{Datelike, NaiveDate};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The day `date`'s month/day is observed in `year`.
///
/// Feb 29 falls back to Feb 28 in non-leap years.
pub fn occurrence_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        if date.month() == 2 && date.day() == 29 && !is_leap_year(year) {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Whole days from `today` until the next occurrence of `date`'s month/day.
///
/// An occurrence on `today` counts, yielding `0`.
pub fn days_until_next_occurrence(today: NaiveDate, date: NaiveDate) -> Option<i64> {
    let mut next = occurrence_in_year(date, today.year())?;
    if next < today {
        next = occurrence_in_year(date, today.year() + 1)?;
    }
    Some((next - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::{days_until_next_occurrence, is_leap_year, occurrence_in_year};
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn occurrence_today_is_zero() {
        let today = ymd(2024, 6, 10);
        assert_eq!(days_until_next_occurrence(today, ymd(1990, 6, 10)), Some(0));
    }

    #[test]
    fn occurrence_later_this_year() {
        let today = ymd(2024, 6, 10);
        assert_eq!(days_until_next_occurrence(today, ymd(1990, 6, 20)), Some(10));
    }

    #[test]
    fn occurrence_one_day_past_rolls_to_next_year() {
        // 2025-06-09 .. 2026-06-09 spans no leap day.
        assert_eq!(
            days_until_next_occurrence(ymd(2025, 6, 10), ymd(1990, 6, 9)),
            Some(364)
        );
        // 2023-06-09 .. 2024-06-09 spans 2024-02-29.
        assert_eq!(
            days_until_next_occurrence(ymd(2023, 6, 10), ymd(1990, 6, 9)),
            Some(365)
        );
    }

    #[test]
    fn leap_day_observed_on_feb_28_in_common_years() {
        let leap_day = ymd(2000, 2, 29);
        assert_eq!(occurrence_in_year(leap_day, 2023), Some(ymd(2023, 2, 28)));
        assert_eq!(occurrence_in_year(leap_day, 2024), Some(ymd(2024, 2, 29)));

        assert_eq!(days_until_next_occurrence(ymd(2023, 2, 28), leap_day), Some(0));
        assert_eq!(days_until_next_occurrence(ymd(2024, 2, 28), leap_day), Some(1));
        assert_eq!(days_until_next_occurrence(ymd(2023, 3, 1), leap_day), Some(365));
    }
}
