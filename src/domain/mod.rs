//! Domain value objects and types.
//!
//! This module contains the value objects a contact is built from. Only
//! phone numbers carry a construction-time validation rule; names are
//! accepted as given.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
