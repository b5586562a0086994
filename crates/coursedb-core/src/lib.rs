//! Core types for the coursedb populator.
//!
//! Holds the record types, the seams between "where rows come from" and
//! "where rows go", and the decision that picks CSV input or the synthetic
//! dataset. This crate is free of database dependencies.

pub mod csv_source;
pub mod error;
pub mod load;
pub mod record;
pub mod source;
pub mod synthetic;

pub use error::{Error, Result};
