//! Name value object.

use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The name identifying a [`Record`](crate::models::Record).
///
/// Any text is accepted; the address book uses it verbatim as its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Any text is accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
