//! Row types for the `people` and `transactions` tables.
//!
//! Primary keys are always supplied by the caller (a CSV row or the
//! synthetic generator). Nothing here allocates ids, so a duplicate id is a
//! constraint error at insert time rather than something prevented up front.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error as _};

/// Text form of `txn_date`, both in CSV input and in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row of the `people` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
  pub id:    i64,
  pub name:  String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub age:   Option<i64>,
}

/// A row of the `transactions` table.
///
/// `amount` may be negative (refunds). `person_id` must name an existing
/// [`Person`] when the row is inserted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
  pub id:          i64,
  pub person_id:   i64,
  pub amount:      f64,
  #[serde(deserialize_with = "canonical_date")]
  pub txn_date:    NaiveDate,
  #[serde(default)]
  pub description: Option<String>,
}

/// Accept only zero-padded `YYYY-MM-DD`, so the stored text is the cell text.
fn canonical_date<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
  let raw = String::deserialize(de)?;
  let date = NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom)?;
  if date.format(DATE_FORMAT).to_string() != raw {
    return Err(D::Error::custom(format!(
      "date {raw:?} is not in YYYY-MM-DD form"
    )));
  }
  Ok(date)
}
