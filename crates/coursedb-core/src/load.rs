//! Choosing between CSV input and the synthetic dataset, and moving the
//! chosen rows into a [`RowSink`].

use rand::Rng;

use crate::{
  source::{RowSink, RowSource},
  synthetic,
};

/// Which CSV tables were present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvTables {
  pub people:       bool,
  pub transactions: bool,
}

/// Outcome of the sourcing decision.
///
/// Each table with a CSV file uses it. The synthetic dataset is only used
/// when neither file exists; a missing file next to a present one leaves its
/// table empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sourcing {
  Csv(CsvTables),
  Synthetic,
}

/// Decide where rows come from, given which input files exist.
pub fn decide(people_present: bool, transactions_present: bool) -> Sourcing {
  if people_present || transactions_present {
    Sourcing::Csv(CsvTables {
      people:       people_present,
      transactions: transactions_present,
    })
  } else {
    Sourcing::Synthetic
  }
}

/// What [`load`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loaded {
  pub sourcing:     Sourcing,
  pub people:       usize,
  pub transactions: usize,
}

/// Move rows from `source` (or the synthetic generator) into `sink`.
///
/// People are written before transactions so foreign keys resolve. Each
/// table is read completely before its batch is handed to the sink.
pub fn load<S, K, R>(source: &S, sink: &mut K, rng: &mut R) -> Result<Loaded, K::Error>
where
  S: RowSource + ?Sized,
  K: RowSink + ?Sized,
  R: Rng + ?Sized,
{
  let sourcing = decide(source.has_people(), source.has_transactions());

  let (people, transactions) = match sourcing {
    Sourcing::Csv(tables) => {
      let mut people = 0;
      if tables.people {
        let rows = source.read_people()?;
        people = sink.insert_people(&rows)?;
        tracing::info!("Loaded {people} people from csv");
      }

      let mut transactions = 0;
      if tables.transactions {
        let rows = source.read_transactions()?;
        transactions = sink.insert_transactions(&rows)?;
        tracing::info!("Loaded {transactions} transactions from csv");
      }

      (people, transactions)
    }
    Sourcing::Synthetic => {
      let dataset = synthetic::generate(rng);
      let people = sink.insert_people(&dataset.people)?;
      let transactions = sink.insert_transactions(&dataset.transactions)?;
      tracing::info!(
        "Inserted {people} synthetic people and {transactions} synthetic transactions"
      );
      (people, transactions)
    }
  };

  Ok(Loaded { sourcing, people, transactions })
}
