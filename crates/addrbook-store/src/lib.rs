pub mod backup;
pub mod error;
pub mod json;
pub mod paths;

pub use json::{load, save, RecordEntry};

use crate::error::Result;
use addrbook_config::AppConfig;
use addrbook_core::AddressBook;
use std::path::{Path, PathBuf};

/// The JSON file an address book is kept in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    path: PathBuf,
}

impl BookFile {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file under the per-user data directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::open(paths::book_path()?))
    }

    /// The configured `book_path`, or the default location when unset.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.book_path {
            Some(path) => Ok(Self::open(path.clone())),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<AddressBook> {
        json::load(&self.path)
    }

    /// Like [`BookFile::load`], but a missing file yields an empty book.
    pub fn load_or_default(&self) -> Result<AddressBook> {
        match self.load() {
            Err(err) if err.is_not_found() => Ok(AddressBook::new()),
            other => other,
        }
    }

    pub fn save(&self, book: &AddressBook) -> Result<()> {
        json::save(book, &self.path)
    }

    pub fn backup_to(&self, path: &Path) -> Result<()> {
        backup::backup_to(&self.path, path)
    }
}
