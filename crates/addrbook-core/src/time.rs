use crate::error::CoreError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Calendar date at `now_utc` as seen from `local_offset`.
pub fn local_today(now_utc: i64, local_offset: FixedOffset) -> Result<NaiveDate, CoreError> {
    let now =
        DateTime::<Utc>::from_timestamp(now_utc, 0).ok_or(CoreError::InvalidTimestamp(now_utc))?;
    Ok(now.with_timezone(&local_offset).date_naive())
}

pub fn today() -> Result<NaiveDate, CoreError> {
    local_today(now_utc(), local_offset())
}

#[cfg(test)]
mod tests {
    use super::local_today;
    use crate::error::CoreError;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn local_today_applies_offset() {
        let now = Utc
            .with_ymd_and_hms(2024, 6, 10, 23, 30, 0)
            .unwrap()
            .timestamp();
        let utc = FixedOffset::east_opt(0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            local_today(now, utc).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
        assert_eq!(
            local_today(now, plus_two).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()
        );
    }

    #[test]
    fn local_today_rejects_out_of_range_timestamp() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            local_today(i64::MAX, utc).unwrap_err(),
            CoreError::InvalidTimestamp(i64::MAX)
        );
    }
}
