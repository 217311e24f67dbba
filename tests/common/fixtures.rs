//! Test fixtures and sample data.
//!
//! Builds the records used by the original demonstration sequence.

use address_book::{AddressBook, Record};

/// Create a record with the given phones, panicking on an invalid phone.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).expect("fixture phone must be valid");
    }
    record
}

/// John with two phones and Jane with one, added in that order.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}
