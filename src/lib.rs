//! Address Book - an in-memory contact directory with validated phone numbers.
//!
//! Contacts are stored as named records, each holding zero or more phone
//! numbers that must be exactly ten digits. Records are kept in an
//! insertion-ordered book keyed by name.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`Name`, `Phone`) and their validation errors
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` directory
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::AddressBook;
pub use config::{Config, OutputFormat};
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{ConfigError, ConfigResult, ValidationResult};
pub use models::Record;
