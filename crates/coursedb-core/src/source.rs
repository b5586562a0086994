//! The seams on either side of [`load`](crate::load::load).

use crate::{
  Result,
  record::{Person, Transaction},
};

/// Where input rows come from.
///
/// Presence is checked separately from reading so the sourcing decision can
/// be made before any row is parsed.
pub trait RowSource {
  fn has_people(&self) -> bool;

  fn has_transactions(&self) -> bool;

  /// Read every person row. Only called when [`has_people`](Self::has_people)
  /// returned `true`.
  fn read_people(&self) -> Result<Vec<Person>>;

  /// Read every transaction row. Only called when
  /// [`has_transactions`](Self::has_transactions) returned `true`.
  fn read_transactions(&self) -> Result<Vec<Transaction>>;
}

/// Where rows are written.
///
/// Each call receives a complete batch; an implementation must either store
/// all of it or none of it. Returns the number of rows written.
pub trait RowSink {
  type Error: From<crate::Error>;

  fn insert_people(&mut self, rows: &[Person]) -> Result<usize, Self::Error>;

  fn insert_transactions(
    &mut self,
    rows: &[Transaction],
  ) -> Result<usize, Self::Error>;
}
