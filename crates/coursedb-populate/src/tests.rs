//! End-to-end runs against temporary directories.

use std::{fs, path::Path};

use coursedb_core::{
  load::{CsvTables, Sourcing},
  record::Person,
};
use coursedb_store_sqlite::{Database, SAMPLE_LIMIT};
use rand::{SeedableRng, rngs::StdRng};
use tempfile::TempDir;

use crate::{CliOverrides, Error, PopulateConfig, load_config, populate};

fn config_in(dir: &TempDir) -> PopulateConfig {
  PopulateConfig {
    db_path:  dir.path().join("nested/db/example.db"),
    data_dir: dir.path().join("data/raw"),
    force:    false,
    seed:     Some(3),
  }
}

fn write_csv(config: &PopulateConfig, name: &str, body: &str) {
  fs::create_dir_all(&config.data_dir).unwrap();
  fs::write(config.data_dir.join(name), body).unwrap();
}

fn run(config: &PopulateConfig) -> crate::Result<crate::Report> {
  populate(config, &mut config.rng())
}

fn reopen(path: &Path) -> Database {
  let mut db = Database::open(path, false).unwrap();
  db.ensure_schema().unwrap();
  db
}

// ─── Sourcing ────────────────────────────────────────────────────────────────

#[test]
fn empty_input_dir_creates_synthetic_database() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);

  let report = run(&config).unwrap();

  assert_eq!(report.loaded.sourcing, Sourcing::Synthetic);
  assert_eq!(report.summary.people, 3);
  assert_eq!(report.summary.transactions, 9);
  assert_eq!(report.summary.sample_transactions.len(), SAMPLE_LIMIT);
  assert!(config.db_path.is_file());
  assert!(config.data_dir.is_dir());
}

#[test]
fn people_csv_round_trips() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);
  write_csv(&config, "people.csv", "id,name,email,age\n1,A,a@x.com,20\n");

  let report = run(&config).unwrap();

  assert_eq!(
    report.loaded.sourcing,
    Sourcing::Csv(CsvTables { people: true, transactions: false })
  );
  assert_eq!(report.summary.transactions, 0);

  let db = reopen(&config.db_path);
  assert_eq!(
    db.get_person(1).unwrap(),
    Some(Person {
      id:    1,
      name:  "A".into(),
      email: Some("a@x.com".into()),
      age:   Some(20),
    })
  );
}

#[test]
fn both_csv_files_are_loaded() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);
  write_csv(&config, "people.csv", "id,name,email,age\n7,G,,\n8,H,h@x.com,41\n");
  write_csv(
    &config,
    "transactions.csv",
    "id,person_id,amount,txn_date,description\n\
     20,7,99.99,2023-05-01,rent\n\
     21,8,-3.5,2023-05-02,\n",
  );

  let report = run(&config).unwrap();

  assert_eq!(report.loaded.people, 2);
  assert_eq!(report.loaded.transactions, 2);
  let ids: Vec<_> = report.summary.sample_transactions.iter().map(|t| t.id).collect();
  assert_eq!(ids, [20, 21]);
  assert_eq!(report.summary.sample_transactions[1].description, None);
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[test]
fn parse_error_aborts_the_run() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);
  write_csv(&config, "people.csv", "id,name\nnot-a-number,A\n");

  let err = run(&config).unwrap_err();
  assert!(matches!(
    err,
    Error::Store(coursedb_store_sqlite::Error::Core(coursedb_core::Error::Csv { .. }))
  ));
  assert_eq!(reopen(&config.db_path).summary().unwrap().people, 0);
}

#[test]
fn non_canonical_csv_date_is_rejected() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);
  write_csv(&config, "people.csv", "id,name\n1,A\n");
  write_csv(
    &config,
    "transactions.csv",
    "id,person_id,amount,txn_date,description\n1,1,5.0,2020-1-5,x\n",
  );

  let err = run(&config).unwrap_err();
  assert!(matches!(
    err,
    Error::Store(coursedb_store_sqlite::Error::Core(coursedb_core::Error::Csv { .. }))
  ));
  assert_eq!(reopen(&config.db_path).summary().unwrap().transactions, 0);
}

#[test]
fn csv_date_is_stored_as_written() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);
  write_csv(&config, "people.csv", "id,name\n1,A\n");
  write_csv(
    &config,
    "transactions.csv",
    "id,person_id,amount,txn_date,description\n1,1,5.0,2020-01-05,x\n",
  );

  run(&config).unwrap();

  let conn = rusqlite::Connection::open(&config.db_path).unwrap();
  let stored: String = conn
    .query_row("SELECT txn_date FROM transactions WHERE id = 1", [], |r| r.get(0))
    .unwrap();
  assert_eq!(stored, "2020-01-05");
}

#[test]
fn transaction_for_unknown_person_fails() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);
  write_csv(&config, "people.csv", "id,name\n1,A\n");
  write_csv(
    &config,
    "transactions.csv",
    "id,person_id,amount,txn_date,description\n1,2,5.0,2023-01-01,x\n",
  );

  let err = run(&config).unwrap_err();
  assert!(matches!(
    err,
    Error::Store(coursedb_store_sqlite::Error::Database(_))
  ));

  let summary = reopen(&config.db_path).summary().unwrap();
  assert_eq!(summary.people, 1);
  assert_eq!(summary.transactions, 0);
}

#[test]
fn rerun_without_force_hits_duplicate_ids() {
  let dir = tempfile::tempdir().unwrap();
  let config = config_in(&dir);

  run(&config).unwrap();
  let err = run(&config).unwrap_err();

  assert!(matches!(
    err,
    Error::Store(coursedb_store_sqlite::Error::Database(_))
  ));
  assert_eq!(reopen(&config.db_path).summary().unwrap().people, 3);
}

// ─── Overwrite ───────────────────────────────────────────────────────────────

#[test]
fn force_replaces_previous_run() {
  let dir = tempfile::tempdir().unwrap();
  let mut config = config_in(&dir);

  run(&config).unwrap();
  write_csv(&config, "people.csv", "id,name\n42,Only\n");
  config.force = true;

  let report = run(&config).unwrap();

  assert_eq!(report.summary.people, 1);
  assert_eq!(report.summary.transactions, 0);
  assert_eq!(report.summary.sample_people[0].id, 42);
}

// ─── Configuration ───────────────────────────────────────────────────────────

#[test]
fn missing_config_file_uses_defaults() {
  let dir = tempfile::tempdir().unwrap();
  let config = load_config(&dir.path().join("absent.toml"), CliOverrides::default()).unwrap();

  assert_eq!(config.db_path, Path::new("db/example.db"));
  assert_eq!(config.data_dir, Path::new("data/raw"));
  assert!(!config.force);
}

#[test]
fn cli_overrides_config_file() {
  let dir = tempfile::tempdir().unwrap();
  let file = dir.path().join("coursedb.toml");
  fs::write(&file, "db_path = \"from/file.db\"\ndata_dir = \"in\"\nseed = 9\n").unwrap();

  let config = load_config(&file, CliOverrides {
    db_path: Some("from/cli.db".into()),
    force: true,
    ..Default::default()
  })
  .unwrap();

  assert_eq!(config.db_path, Path::new("from/cli.db"));
  assert_eq!(config.data_dir, Path::new("in"));
  assert!(config.force);
  assert_eq!(config.seed, Some(9));
}

#[test]
fn same_seed_same_synthetic_rows() {
  let a = tempfile::tempdir().unwrap();
  let b = tempfile::tempdir().unwrap();

  let first = populate(&config_in(&a), &mut StdRng::seed_from_u64(11)).unwrap();
  let second = populate(&config_in(&b), &mut StdRng::seed_from_u64(11)).unwrap();

  assert_eq!(first.summary, second.summary);
}
