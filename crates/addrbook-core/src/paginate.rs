use crate::book::AddressBook;
use crate::domain::Record;
use crate::error::CoreError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self, CoreError> {
        if size == 0 {
            return Err(CoreError::InvalidPageSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = CoreError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl AddressBook {
    /// Page `index` (zero-based) of the current records, or `None` once the
    /// page would start past the end.
    pub fn page(&self, index: usize, size: PageSize) -> Option<Vec<&Record>> {
        let start = index.checked_mul(size.get())?;
        if start >= self.len() {
            return None;
        }
        Some(self.records().skip(start).take(size.get()).collect())
    }
}

/// A page cursor that is not tied to a borrow of the book.
///
/// Each [`PageCursor::next_page`] call reads the book as it is at that
/// moment, so records added or removed between calls shift later pages.
/// The cursor never rewinds; start a new one to page from the beginning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    size: PageSize,
    next: usize,
}

impl PageCursor {
    pub fn new(size: PageSize) -> Self {
        Self { size, next: 0 }
    }

    pub fn page_size(&self) -> PageSize {
        self.size
    }

    /// Index of the page the next call will return.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn next_page<'a>(&mut self, book: &'a AddressBook) -> Option<Vec<&'a Record>> {
        let page = book.page(self.next, self.size)?;
        self.next += 1;
        Some(page)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

pub struct AddressBookPaginator<'a> {
    book: &'a AddressBook,
    cursor: PageCursor,
}

impl<'a> AddressBookPaginator<'a> {
    pub fn new(book: &'a AddressBook, size: PageSize) -> Self {
        Self {
            book,
            cursor: PageCursor::new(size),
        }
    }
}

impl<'a> Iterator for AddressBookPaginator<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_page(self.book)
    }
}

impl AddressBook {
    pub fn paginate(&self, size: PageSize) -> AddressBookPaginator<'_> {
        AddressBookPaginator::new(self, size)
    }
}
