//! Populate the example SQLite database from CSV input or synthetic data.
//!
//! [`populate`] runs one pass: prepare directories, open the database,
//! ensure the schema, load rows, read back a [`Summary`], close. The binary
//! in `main.rs` wires it to the command line.
//!
//! [`Summary`]: coursedb_store_sqlite::Summary

pub mod config;
pub mod error;
mod populate;

pub use config::{CliOverrides, PopulateConfig, load_config};
pub use error::{Error, Result};
pub use populate::{Report, ensure_dirs, populate};

#[cfg(test)]
mod tests;
