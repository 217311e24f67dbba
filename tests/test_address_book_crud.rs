//! Tests for creating, reading, updating, and deleting contacts through the
//! address book, following the demonstration sequence end to end.

mod common;
use common::fixtures::*;

use address_book::{AddressBook, Field, ValidationError};

#[test]
fn test_find_returns_stored_record() {
    let book = sample_book();

    let john = book.find("John").expect("John should be present");
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );
}

#[test]
fn test_listing_follows_insertion_order() {
    let book = sample_book();
    let lines: Vec<String> = book.iter().map(|(_, record)| record.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Contact name: John, phones: 1234567890; 5555555555",
            "Contact name: Jane, phones: 9876543210",
        ]
    );
}

#[test]
fn test_edit_through_book_is_visible_on_next_find() {
    let mut book = sample_book();

    book.find_mut("John")
        .unwrap()
        .edit_phone("1234567890", "1112223333")
        .unwrap();

    let john = book.find("John").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
}

#[test]
fn test_find_phone_on_found_record() {
    let book = sample_book();
    let john = book.find("John").unwrap();

    let phone = john.find_phone("5555555555").unwrap();
    assert_eq!(phone.value(), "5555555555");
    assert_eq!(format!("{}: {}", john.name(), phone), "John: 5555555555");
    assert!(john.find_phone("0000000000").is_none());
}

#[test]
fn test_delete_removes_from_find_and_iteration() {
    let mut book = sample_book();
    book.delete("Jane");

    assert!(book.find("Jane").is_none());
    assert!(book.iter().all(|(name, _)| name != "Jane"));
    assert_eq!(book.len(), 1);

    // Deleting again is harmless
    book.delete("Jane");
    assert_eq!(book.len(), 1);
}

#[test]
fn test_remove_missing_phone_leaves_record_unchanged() {
    let mut book = sample_book();
    let before = book.find("John").unwrap().clone();

    book.find_mut("John").unwrap().remove_phone("0000000000");
    assert_eq!(book.find("John"), Some(&before));
}

#[test]
fn test_same_name_last_write_wins() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890"]));
    book.add_record(sample_record("John", &["2223334444", "5556667777"]));

    assert_eq!(book.iter().filter(|(name, _)| *name == "John").count(), 1);
    assert_eq!(
        book.find("John").unwrap().to_string(),
        "Contact name: John, phones: 2223334444; 5556667777"
    );
}

#[test]
fn test_invalid_phone_surfaces_to_caller() {
    let mut book = sample_book();
    let jane = book.find_mut("Jane").unwrap();

    let err = jane.add_phone("987654321").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidPhone(ref v) if v == "987654321"));
    assert_eq!(jane.phones().len(), 1);
}

#[test]
fn test_book_json_listing() {
    let mut book = sample_book();
    book.delete("Jane");

    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "John": { "name": "John", "phones": ["1234567890", "5555555555"] }
        })
    );
}
