//! The end-of-run report of what the database holds.

use std::fmt;

use coursedb_core::record::{Person, Transaction};

/// Most rows shown per table.
pub const SAMPLE_LIMIT: usize = 5;

/// Row counts and the first few rows of each table, ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
  pub people:              i64,
  pub transactions:        i64,
  pub sample_people:       Vec<Person>,
  pub sample_transactions: Vec<Transaction>,
}

fn opt<T: fmt::Display>(v: Option<T>) -> String {
  v.map_or_else(|| "NULL".to_owned(), |v| v.to_string())
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "Database summary: {} people, {} transactions",
      self.people, self.transactions
    )?;

    writeln!(f, "\nSample people:")?;
    for p in &self.sample_people {
      writeln!(
        f,
        "({}, {:?}, {}, {})",
        p.id,
        p.name,
        opt(p.email.as_deref().map(|e| format!("{e:?}"))),
        opt(p.age)
      )?;
    }

    writeln!(f, "\nSample transactions:")?;
    for t in &self.sample_transactions {
      writeln!(f, "({}, {}, {:?}, {})", t.id, t.person_id, t.amount, t.txn_date)?;
    }

    Ok(())
  }
}
