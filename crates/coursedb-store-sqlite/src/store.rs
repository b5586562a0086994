//! [`Database`] — schema setup, batch inserts and read-back over one
//! SQLite file.

use std::{fs, path::Path};

use coursedb_core::{
  record::{Person, Transaction},
  source::RowSink,
};
use rusqlite::{Connection, OptionalExtension as _};

use crate::{
  Error, Result,
  encode::{RawTransaction, encode_date, person_from_row},
  schema::{CONNECTION_PRAGMAS, SCHEMA},
  summary::{SAMPLE_LIMIT, Summary},
};

// ─── Database ────────────────────────────────────────────────────────────────

/// A single connection to the populated database.
///
/// Single writer, single process: concurrent runs against one file are not
/// supported.
pub struct Database {
  pub(crate) conn: Connection,
}

impl Database {
  /// Open (or create) the database at `path`.
  ///
  /// With `overwrite`, an existing file is deleted first so the schema is
  /// created in an empty database.
  pub fn open(path: impl AsRef<Path>, overwrite: bool) -> Result<Self> {
    let path = path.as_ref();

    if overwrite && path.exists() {
      fs::remove_file(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
      })?;
      tracing::info!(path = %path.display(), "removed existing database");
    }

    Self::init(Connection::open(path)?)
  }

  /// Open an in-memory database — useful for testing.
  pub fn open_in_memory() -> Result<Self> { Self::init(Connection::open_in_memory()?) }

  fn init(conn: Connection) -> Result<Self> {
    conn.execute_batch(CONNECTION_PRAGMAS)?;
    Ok(Self { conn })
  }

  /// Create both tables and the `person_id` index if they are missing.
  ///
  /// All statements run in one transaction, so an interrupted run never
  /// leaves half a schema behind.
  pub fn ensure_schema(&mut self) -> Result<()> {
    let tx = self.conn.transaction()?;
    tx.execute_batch(SCHEMA)?;
    tx.commit()?;
    tracing::debug!("schema ensured");
    Ok(())
  }

  /// Insert `rows` into `people` as one transaction.
  ///
  /// A failing row (e.g. a duplicate id) rolls the whole batch back.
  pub fn insert_people(&mut self, rows: &[Person]) -> Result<usize> {
    let tx = self.conn.transaction()?;
    {
      let mut stmt =
        tx.prepare("INSERT INTO people (id, name, email, age) VALUES (?1, ?2, ?3, ?4)")?;
      for p in rows {
        stmt.execute(rusqlite::params![p.id, p.name, p.email, p.age])?;
      }
    }
    tx.commit()?;
    Ok(rows.len())
  }

  /// Insert `rows` into `transactions` as one transaction.
  ///
  /// Every `person_id` must already exist in `people`.
  pub fn insert_transactions(&mut self, rows: &[Transaction]) -> Result<usize> {
    let tx = self.conn.transaction()?;
    {
      let mut stmt = tx.prepare(
        "INSERT INTO transactions (id, person_id, amount, txn_date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
      )?;
      for t in rows {
        stmt.execute(rusqlite::params![
          t.id,
          t.person_id,
          t.amount,
          encode_date(t.txn_date),
          t.description,
        ])?;
      }
    }
    tx.commit()?;
    Ok(rows.len())
  }

  /// Look up one person by id.
  pub fn get_person(&self, id: i64) -> Result<Option<Person>> {
    Ok(
      self
        .conn
        .query_row(
          "SELECT id, name, email, age FROM people WHERE id = ?1",
          rusqlite::params![id],
          person_from_row,
        )
        .optional()?,
    )
  }

  /// Row counts plus the first [`SAMPLE_LIMIT`] rows of each table by id.
  pub fn summary(&self) -> Result<Summary> {
    let people: i64 = self
      .conn
      .query_row("SELECT COUNT(*) FROM people", [], |r| r.get(0))?;
    let transactions: i64 = self
      .conn
      .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))?;

    let limit = SAMPLE_LIMIT as i64;

    let mut stmt = self
      .conn
      .prepare("SELECT id, name, email, age FROM people ORDER BY id LIMIT ?1")?;
    let sample_people = stmt
      .query_map(rusqlite::params![limit], person_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = self.conn.prepare(
      "SELECT id, person_id, amount, txn_date, description
       FROM transactions ORDER BY id LIMIT ?1",
    )?;
    let sample_transactions = stmt
      .query_map(rusqlite::params![limit], RawTransaction::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?
      .into_iter()
      .map(RawTransaction::into_transaction)
      .collect::<Result<Vec<_>>>()?;

    Ok(Summary {
      people,
      transactions,
      sample_people,
      sample_transactions,
    })
  }

  /// Release the connection, reporting any error SQLite raises on close.
  pub fn close(self) -> Result<()> {
    self.conn.close().map_err(|(_, e)| Error::Database(e))
  }
}

// ─── RowSink impl ────────────────────────────────────────────────────────────

impl RowSink for Database {
  type Error = Error;

  fn insert_people(&mut self, rows: &[Person]) -> Result<usize> {
    Database::insert_people(self, rows)
  }

  fn insert_transactions(&mut self, rows: &[Transaction]) -> Result<usize> {
    Database::insert_transactions(self, rows)
  }
}
