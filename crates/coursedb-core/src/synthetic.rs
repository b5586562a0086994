//! Placeholder dataset used when no CSV input exists at all.
//!
//! The roster is fixed; dates and amounts are drawn from the caller's RNG so
//! a seeded RNG reproduces the same dataset.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::record::{Person, Transaction};

pub const TRANSACTIONS_PER_PERSON: usize = 3;

/// Span of days, inclusive, added to the anchor date.
pub const DATE_SPAN_DAYS: u64 = 365;

pub const MIN_AMOUNT: f64 = -50.0;
pub const MAX_AMOUNT: f64 = 200.0;

/// First day of the window transaction dates are drawn from.
pub fn anchor_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct SyntheticDataset {
  pub people:       Vec<Person>,
  pub transactions: Vec<Transaction>,
}

fn roster() -> Vec<Person> {
  [
    (1, "Alice", "alice@example.com", 30),
    (2, "Bob", "bob@example.com", 25),
    (3, "Charlie", "charlie@example.com", 35),
  ]
  .into_iter()
  .map(|(id, name, email, age)| Person {
    id,
    name: name.to_owned(),
    email: Some(email.to_owned()),
    age: Some(age),
  })
  .collect()
}

/// Build the roster and [`TRANSACTIONS_PER_PERSON`] transactions per person.
///
/// Transaction ids count up from 1 across the whole set, in roster order.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> SyntheticDataset {
  let people = roster();
  let anchor = anchor_date();

  let mut transactions = Vec::with_capacity(people.len() * TRANSACTIONS_PER_PERSON);
  let mut next_id = 1_i64;

  for person in &people {
    for _ in 0..TRANSACTIONS_PER_PERSON {
      let offset = rng.gen_range(0..=DATE_SPAN_DAYS);
      let txn_date = anchor
        .checked_add_days(Days::new(offset))
        .unwrap_or(anchor);
      let amount = round_cents(rng.gen_range(MIN_AMOUNT..=MAX_AMOUNT));

      transactions.push(Transaction {
        id: next_id,
        person_id: person.id,
        amount,
        txn_date,
        description: Some(format!("synthetic transaction {next_id}")),
      });
      next_id += 1;
    }
  }

  SyntheticDataset { people, transactions }
}

fn round_cents(amount: f64) -> f64 { (amount * 100.0).round() / 100.0 }
