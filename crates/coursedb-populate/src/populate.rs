//! The single-pass population run.

use std::{
  fs,
  path::{Path, PathBuf},
};

use coursedb_core::{
  csv_source::CsvSource,
  load::{Loaded, load},
};
use coursedb_store_sqlite::{Database, Summary};
use rand::Rng;

use crate::{Error, PopulateConfig, Result};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Report {
  pub db_path: PathBuf,
  pub loaded:  Loaded,
  pub summary: Summary,
}

fn create_dir(path: &Path) -> Result<()> {
  fs::create_dir_all(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })
}

/// Create the database's parent directory and the CSV input directory.
/// Existing directories are left alone.
pub fn ensure_dirs(config: &PopulateConfig) -> Result<()> {
  if let Some(parent) = config.db_path.parent()
    && !parent.as_os_str().is_empty()
  {
    create_dir(parent)?;
  }
  create_dir(&config.data_dir)
}

/// Populate the database described by `config`.
///
/// The connection is closed before returning on every path. If the run
/// itself failed, that error is returned in preference to a close error.
pub fn populate<R: Rng + ?Sized>(config: &PopulateConfig, rng: &mut R) -> Result<Report> {
  ensure_dirs(config)?;

  let mut db = Database::open(&config.db_path, config.force)?;
  let source = CsvSource::new(&config.data_dir);

  let outcome = fill(&mut db, &source, rng);
  let closed = db.close();

  let (loaded, summary) = outcome?;
  closed?;

  Ok(Report {
    db_path: config.db_path.clone(),
    loaded,
    summary,
  })
}

fn fill<R: Rng + ?Sized>(
  db: &mut Database,
  source: &CsvSource,
  rng: &mut R,
) -> Result<(Loaded, Summary)> {
  db.ensure_schema()?;
  let loaded = load(source, db, rng)?;
  let summary = db.summary()?;
  Ok((loaded, summary))
}
