pub mod book;
pub mod domain;
pub mod error;
pub mod field;
pub mod paginate;
pub mod rules;
pub mod time;

pub use book::AddressBook;
pub use domain::*;
pub use error::CoreError;
pub use field::{Field, FieldRule};
pub use paginate::{AddressBookPaginator, PageCursor, PageSize, DEFAULT_PAGE_SIZE};
