use crate::error::{Result, StoreError};
use crate::paths;
use addrbook_core::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// On-disk shape of one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub name: String,
    pub birthday: Option<String>,
    pub phones: Vec<String>,
}

impl From<&Record> for RecordEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            birthday: record.birthday().map(|b| b.as_str().to_string()),
            phones: record
                .phones()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
        }
    }
}

impl TryFrom<RecordEntry> for Record {
    type Error = addrbook_core::CoreError;

    fn try_from(entry: RecordEntry) -> std::result::Result<Self, Self::Error> {
        let mut record = Record::new(&entry.name, entry.birthday.as_deref())?;
        for phone in entry.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

pub fn to_entries(book: &AddressBook) -> Vec<RecordEntry> {
    book.records().map(RecordEntry::from).collect()
}

pub fn from_entries(entries: Vec<RecordEntry>) -> Result<AddressBook> {
    let mut book = AddressBook::new();
    for entry in entries {
        book.add_record(Record::try_from(entry)?);
    }
    Ok(book)
}

pub fn to_json(book: &AddressBook) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_entries(book))?)
}

pub fn from_json(contents: &str) -> Result<AddressBook> {
    let entries: Vec<RecordEntry> = serde_json::from_str(contents)?;
    from_entries(entries)
}

/// Replaces `path` with the serialized book.
///
/// The document is written to a sibling temp file first and renamed over
/// `path`, so a failed write leaves the previous contents in place.
pub fn save(book: &AddressBook, path: &Path) -> Result<()> {
    let contents = to_json(book)?;
    paths::ensure_parent_dir(path)?;
    write_atomic(path, &contents)?;
    debug!(path = %path.display(), records = book.len(), "saved address book");
    Ok(())
}

pub fn load(path: &Path) -> Result<AddressBook> {
    let contents = fs::read_to_string(path)?;
    let book = from_json(&contents)?;
    debug!(path = %path.display(), records = book.len(), "loaded address book");
    Ok(book)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{file_name}-{}.tmp", Uuid::new_v4()));
    let written = write_private(&tmp_path, contents)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(StoreError::from));
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}

/// Writes a new file that only the owner can read, from the moment it exists.
fn write_private(path: &Path, contents: &str) -> Result<()> {
    let mut file = paths::create_private_file(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{from_json, to_json, write_private, RecordEntry};
    use crate::error::StoreError;
    use addrbook_core::{AddressBook, CoreError, Record};
    use tempfile::TempDir;

    #[test]
    fn entry_mirrors_record_fields() {
        let mut record = Record::new("Alice", Some("01.02.1990")).unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();

        let entry = RecordEntry::from(&record);
        assert_eq!(
            entry,
            RecordEntry {
                name: "Alice".to_string(),
                birthday: Some("01.02.1990".to_string()),
                phones: vec!["1234567890".to_string(), "0987654321".to_string()],
            }
        );
        assert_eq!(Record::try_from(entry).unwrap(), record);
    }

    #[test]
    fn missing_birthday_serializes_as_null() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Bob", None).unwrap());
        let json = to_json(&book).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "name": "Bob", "birthday": null, "phones": [] }])
        );
    }

    #[test]
    fn from_json_propagates_field_errors() {
        let err = from_json(r#"[{"name": "Bob", "birthday": null, "phones": ["12"]}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidPhoneFormat(ref phone)) if phone == "12"
        ));

        let err = from_json(r#"[{"name": "Bob", "birthday": "31.02.2024", "phones": []}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidBirthdayDate(_))
        ));
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        for doc in ["", "{}", "[{\"name\": 1}]", "[{\"name\": \"A\"}"] {
            let err = from_json(doc).unwrap_err();
            assert!(matches!(err, StoreError::Json(_)), "doc: {doc:?}");
        }
    }

    #[test]
    fn from_json_last_duplicate_name_wins() {
        let book = from_json(
            r#"[
                {"name": "Ann", "birthday": null, "phones": ["1111111111"]},
                {"name": "Ann", "birthday": null, "phones": ["2222222222"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.find("Ann").unwrap().find_phone("2222222222").is_some());
    }

    #[test]
    fn write_private_refuses_existing_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(".book.tmp");
        write_private(&path, "[]").expect("first write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "[]");

        let err = write_private(&path, "[]").expect_err("second write");
        assert_eq!(err.kind(), crate::error::StoreErrorKind::Io);
    }

    #[cfg(unix)]
    #[test]
    fn write_private_creates_owner_only_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(".book.tmp");
        write_private(&path, "[]").expect("write");

        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
