//! Address Book - demonstration entry point
//!
//! Builds a small book, edits and queries it, and prints the results to stdout.
//! Logs go to stderr.

use address_book::{AddressBook, Config, OutputFormat, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!(output = %cfg.output_format, "Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    print_book(&book, config.output_format)?;

    let john = book.find_mut("John").context("John is missing from the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    if let Some(phone) = john.find_phone("5555555555") {
        println!("{}: {}", john.name(), phone);
    }

    book.delete("Jane");
    print_book(&book, config.output_format)?;

    info!(records = book.len(), "Done");
    Ok(())
}

fn print_book(book: &AddressBook, format: OutputFormat) -> Result<()> {
    let listing = book.render(format)?;
    if !listing.is_empty() {
        println!("{}", listing);
    }
    Ok(())
}
