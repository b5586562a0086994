//! SQLite backend for the coursedb populator.
//!
//! A [`Database`] owns one synchronous [`rusqlite::Connection`] for the
//! length of a run and releases it on drop or [`Database::close`].

mod encode;
mod schema;
mod store;
mod summary;

pub mod error;

pub use error::{Error, Result};
pub use store::Database;
pub use summary::{SAMPLE_LIMIT, Summary};
