//! SQL schema for the coursedb SQLite store.

/// Applied on every connection. Foreign keys are off by default in SQLite
/// and the setting is ignored inside a transaction, so it runs on its own.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// Table and index DDL; idempotent thanks to `IF NOT EXISTS`.
///
/// Run inside a single transaction by [`Database::ensure_schema`].
///
/// [`Database::ensure_schema`]: crate::Database::ensure_schema
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS people (
    id    INTEGER PRIMARY KEY,   -- caller supplied
    name  TEXT NOT NULL,
    email TEXT,
    age   INTEGER
);

CREATE TABLE IF NOT EXISTS transactions (
    id          INTEGER PRIMARY KEY,   -- caller supplied
    person_id   INTEGER NOT NULL,
    amount      REAL NOT NULL,         -- negative for refunds
    txn_date    TEXT NOT NULL,         -- YYYY-MM-DD
    description TEXT,
    FOREIGN KEY (person_id) REFERENCES people (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_transactions_person ON transactions (person_id);
";
