//! Conversions between record types and the values stored in SQLite.
//!
//! Dates are stored as `YYYY-MM-DD` text.

use chrono::NaiveDate;
use coursedb_core::record::{DATE_FORMAT, Person, Transaction};

use crate::{Error, Result};

pub fn encode_date(date: NaiveDate) -> String { date.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

pub fn person_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:    row.get(0)?,
    name:  row.get(1)?,
    email: row.get(2)?,
    age:   row.get(3)?,
  })
}

/// A `transactions` row before its date column is decoded.
pub struct RawTransaction {
  pub id:          i64,
  pub person_id:   i64,
  pub amount:      f64,
  pub txn_date:    String,
  pub description: Option<String>,
}

impl RawTransaction {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      person_id:   row.get(1)?,
      amount:      row.get(2)?,
      txn_date:    row.get(3)?,
      description: row.get(4)?,
    })
  }

  pub fn into_transaction(self) -> Result<Transaction> {
    Ok(Transaction {
      id:          self.id,
      person_id:   self.person_id,
      amount:      self.amount,
      txn_date:    decode_date(&self.txn_date)?,
      description: self.description,
    })
  }
}
