//! Record model representing one contact in the address book.

use crate::domain::{Field, Name, Phone};
use crate::error::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

/// A contact: a name plus an ordered list of phone numbers.
///
/// Insertion order of phones is preserved and duplicate numbers are
/// allowed. The record owns its phones exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with the given name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The record's name, also its key in the book.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not exactly ten
    /// digits. The phone list is left untouched in that case.
    pub fn add_phone(&mut self, phone: &str) -> ValidationResult<()> {
        let phone = Phone::new(phone).inspect_err(|e| {
            warn!(contact = %self.name, error = %e, "Rejected phone number");
        })?;

        debug!(contact = %self.name, phone = %phone, "Added phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Does nothing if none match.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.value() != phone);

        let removed = before - self.phones.len();
        if removed > 0 {
            debug!(contact = %self.name, phone, removed, "Removed phone");
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Later duplicates of `old` are left as they are. A missing `old` is a
    /// no-op and `new` is not checked in that case.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `old` is found and `new` is
    /// not exactly ten digits; the record is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<()> {
        let Some(slot) = self.phones.iter_mut().find(|p| p.value() == old) else {
            return Ok(());
        };

        let replacement = Phone::new(new).inspect_err(|e| {
            warn!(contact = %self.name, error = %e, "Rejected phone edit");
        })?;

        debug!(contact = %self.name, old, new, "Edited phone");
        *slot = replacement;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        trace!(contact = %self.name, phone, "Looking up phone");
        self.phones.iter().find(|p| p.value() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
