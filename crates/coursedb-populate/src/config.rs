//! Run configuration.
//!
//! Layered lowest to highest: built-in defaults, an optional TOML file,
//! `COURSEDB_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::Result;

pub const DEFAULT_DB_PATH: &str = "db/example.db";
pub const DEFAULT_DATA_DIR: &str = "data/raw";
pub const ENV_PREFIX: &str = "COURSEDB";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopulateConfig {
  /// SQLite file to create or extend.
  #[serde(default = "default_db_path")]
  pub db_path:  PathBuf,
  /// Directory holding `people.csv` and `transactions.csv`.
  #[serde(default = "default_data_dir")]
  pub data_dir: PathBuf,
  /// Delete an existing file at `db_path` before opening.
  #[serde(default)]
  pub force:    bool,
  /// Seed for the synthetic dataset; entropy when unset.
  #[serde(default)]
  pub seed:     Option<u64>,
}

fn default_db_path() -> PathBuf { PathBuf::from(DEFAULT_DB_PATH) }

fn default_data_dir() -> PathBuf { PathBuf::from(DEFAULT_DATA_DIR) }

impl Default for PopulateConfig {
  fn default() -> Self {
    Self {
      db_path:  default_db_path(),
      data_dir: default_data_dir(),
      force:    false,
      seed:     None,
    }
  }
}

impl PopulateConfig {
  /// The RNG the synthetic generator draws from.
  pub fn rng(&self) -> StdRng {
    self
      .seed
      .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
  }
}

/// Values given on the command line; `None`/`false` defers to lower layers.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
  pub db_path:  Option<PathBuf>,
  pub data_dir: Option<PathBuf>,
  pub force:    bool,
  pub seed:     Option<u64>,
}

fn path_value(path: Option<PathBuf>) -> Option<String> {
  path.map(|p| p.to_string_lossy().into_owned())
}

/// Build a [`PopulateConfig`] from every layer. A missing `file` is not an
/// error.
pub fn load_config(file: &Path, cli: CliOverrides) -> Result<PopulateConfig> {
  let mut builder = config::Config::builder()
    .set_default("db_path", DEFAULT_DB_PATH)?
    .set_default("data_dir", DEFAULT_DATA_DIR)?
    .add_source(config::File::from(file.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix(ENV_PREFIX))
    .set_override_option("db_path", path_value(cli.db_path))?
    .set_override_option("data_dir", path_value(cli.data_dir))?
    .set_override_option("seed", cli.seed)?;

  if cli.force {
    builder = builder.set_override("force", true)?;
  }

  Ok(builder.build()?.try_deserialize()?)
}
