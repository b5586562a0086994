//! [`CsvSource`] — a [`RowSource`] over two fixed files in one directory.
//!
//! Files are UTF-8, comma separated, with a header row. Columns are matched
//! by header name, so their order does not matter.

use std::{
  fs::File,
  path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{
  Error, Result,
  record::{Person, Transaction},
  source::RowSource,
};

pub const PEOPLE_FILE: &str = "people.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

/// Reads `people.csv` and `transactions.csv` from `dir`.
#[derive(Debug, Clone)]
pub struct CsvSource {
  dir: PathBuf,
}

impl CsvSource {
  pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

  pub fn people_path(&self) -> PathBuf { self.dir.join(PEOPLE_FILE) }

  pub fn transactions_path(&self) -> PathBuf { self.dir.join(TRANSACTIONS_FILE) }
}

impl RowSource for CsvSource {
  fn has_people(&self) -> bool { self.people_path().exists() }

  fn has_transactions(&self) -> bool { self.transactions_path().exists() }

  fn read_people(&self) -> Result<Vec<Person>> { read_all(&self.people_path()) }

  fn read_transactions(&self) -> Result<Vec<Transaction>> {
    read_all(&self.transactions_path())
  }
}

/// Parse every record of `path`. The first bad record fails the whole file.
fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
  let file = File::open(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;

  let rows = csv::Reader::from_reader(file)
    .into_deserialize()
    .collect::<std::result::Result<Vec<T>, csv::Error>>()
    .map_err(|source| Error::Csv {
      path: path.to_path_buf(),
      source,
    })?;

  tracing::debug!(path = %path.display(), rows = rows.len(), "parsed csv");
  Ok(rows)
}
