pub mod dates;

pub use dates::{days_until_next_occurrence, is_leap_year, occurrence_in_year};
