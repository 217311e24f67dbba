//! Shared capability of the record's value objects.

use std::fmt;

/// A named holder of a single text value.
///
/// Implementors render as exactly their value, so `to_string()` and
/// `value()` always agree.
pub trait Field: fmt::Display {
    /// Borrow the stored value.
    fn value(&self) -> &str;
}
