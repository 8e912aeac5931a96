pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, BirthdayRule};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule, PHONE_DIGITS};
pub use record::Record;
