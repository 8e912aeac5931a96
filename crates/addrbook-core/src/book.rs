use crate::domain::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// All contacts, keyed by name, in insertion order.
///
/// Re-adding a name replaces the stored record but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Records whose name contains `keyword` ignoring case, or whose phones
    /// contain it verbatim.
    pub fn search(&self, keyword: &str) -> Vec<&Record> {
        let needle = keyword.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&needle)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(keyword))
            })
            .collect()
    }

    /// Records with a birthday at most `within_days` days away, soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|record| match record.days_to_birthday(today) {
                Ok(Some(days)) if days <= within_days => Some((record, days)),
                _ => None,
            })
            .collect();
        upcoming.sort_by(|(a, a_days), (b, b_days)| {
            a_days
                .cmp(b_days)
                .then_with(|| a.name().as_str().cmp(b.name().as_str()))
        });
        upcoming
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
