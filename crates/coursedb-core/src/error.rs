//! Error types for `coursedb-core`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error on {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A row is missing a required column or holds a value of the wrong type.
  #[error("malformed csv in {path:?}: {source}")]
  Csv {
    path:   PathBuf,
    #[source]
    source: csv::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
