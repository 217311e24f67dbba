//! The address book: records keyed by name.
//!
//! Entries keep their insertion order. Adding a record under a name that is
//! already present replaces the stored record (last write wins) without
//! moving the entry.

use crate::config::OutputFormat;
use crate::domain::Field;
use crate::models::Record;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// A collection of [`Record`]s keyed by their name.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut john = Record::new("John");
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// assert!(book.find("John").is_some());
/// assert!(book.find("Jane").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().value().to_string();
        match self.records.insert(key, record) {
            Some(previous) => debug!(
                contact = %previous.name(),
                discarded_phones = previous.phones().len(),
                "Replaced existing record"
            ),
            None => debug!(size = self.records.len(), "Added record"),
        }
    }

    /// The record stored under `name`, or `None` if there is none.
    pub fn find(&self, name: &str) -> Option<&Record> {
        trace!(name, "Looking up record");
        self.records.get(name)
    }

    /// Mutable access to the record stored under `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        trace!(name, "Looking up record for update");
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) {
        // shift_remove keeps the order of the remaining entries
        if self.records.shift_remove(name).is_some() {
            debug!(name, size = self.records.len(), "Deleted record");
        }
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Render the whole book as text lines or pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Iterator over the entries of an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, record)| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

/// One record per line, in insertion order.
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
