//! Data models for the address book.
//!
//! This module contains the contact record built from the domain value objects.

pub mod record;

pub use record::Record;
